// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Service wrapping a running monitor with the development-mode report schedule.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use vigil_core::{InputEvent, MonitorConfig, MonitorResult};

use crate::host::HostCapabilities;
use crate::monitor::PerformanceMonitor;
use crate::snapshot::MetricsSnapshot;

/// Requests a report on the next pump of the owning [`MonitorService`].
///
/// Cloneable and usable from any thread. Requests are honored even after the
/// monitor stops, since recorded samples stay readable.
#[derive(Debug, Clone, Default)]
pub struct ReportTrigger(Arc<AtomicBool>);

impl ReportTrigger {
    /// Creates a trigger with no pending request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a report.
    pub fn fire(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns `true` if a report was requested, clearing the request.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

#[derive(Debug)]
struct ReportSchedule {
    interval_ms: f64,
    next_due_ms: f64,
}

impl ReportSchedule {
    fn new(interval_ms: f64, now_ms: f64) -> Self {
        Self {
            interval_ms,
            next_due_ms: now_ms + interval_ms,
        }
    }

    fn poll(&mut self, now_ms: f64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        let skipped = ((now_ms - self.next_due_ms) / self.interval_ms).floor();
        self.next_due_ms += (skipped + 1.0) * self.interval_ms;
        true
    }
}

/// Owns a running [`PerformanceMonitor`] and prints reports on demand, and
/// periodically in development mode.
#[derive(Debug)]
pub struct MonitorService {
    monitor: PerformanceMonitor,
    schedule: Option<ReportSchedule>,
    trigger: ReportTrigger,
}

impl MonitorService {
    /// Validates `config`, then builds and starts the monitor.
    pub fn launch(config: MonitorConfig, host: HostCapabilities) -> MonitorResult<Self> {
        let dev_mode = config.dev_mode;
        let interval_ms = config.report_interval_ms;
        let monitor = PerformanceMonitor::launch(config, host)?;

        let schedule = dev_mode.then(|| ReportSchedule::new(interval_ms, monitor.now_ms()));
        if dev_mode {
            log::info!(
                "Performance monitoring active. Reports every {:.0}ms; fire the ReportTrigger for one on demand.",
                interval_ms
            );
        }

        Ok(Self {
            monitor,
            schedule,
            trigger: ReportTrigger::new(),
        })
    }

    /// Returns a trigger that requests a report on the next pump.
    pub fn trigger(&self) -> ReportTrigger {
        self.trigger.clone()
    }

    /// Returns `true` if periodic reports are scheduled.
    pub fn is_dev_mode(&self) -> bool {
        self.schedule.is_some()
    }

    /// The wrapped monitor.
    pub fn monitor(&self) -> &PerformanceMonitor {
        &self.monitor
    }

    /// The wrapped monitor, mutably.
    pub fn monitor_mut(&mut self) -> &mut PerformanceMonitor {
        &mut self.monitor
    }

    /// Forwards a frame, then reports if one is due or requested.
    pub fn on_frame(&mut self) -> Option<MetricsSnapshot> {
        self.monitor.on_frame();
        self.report_if_due()
    }

    /// Forwards an input event.
    pub fn on_input(&mut self, event: &InputEvent) {
        self.monitor.on_input(event);
    }

    /// Forwards a timer tick, then reports if one is due or requested.
    pub fn tick(&mut self) -> Option<MetricsSnapshot> {
        self.monitor.tick();
        self.report_if_due()
    }

    /// Logs a report now and returns its snapshot.
    pub fn generate_report(&self) -> MetricsSnapshot {
        self.monitor.generate_report()
    }

    /// Cancels the report schedule and stops the monitor.
    pub fn shutdown(&mut self) {
        if self.schedule.take().is_some() {
            log::debug!("Report schedule cancelled.");
        }
        self.monitor.stop();
    }

    fn report_if_due(&mut self) -> Option<MetricsSnapshot> {
        let now = self.monitor.now_ms();
        let scheduled = self.monitor.is_running()
            && self
                .schedule
                .as_mut()
                .is_some_and(|schedule| schedule.poll(now));
        let requested = self.trigger.take();
        (scheduled || requested).then(|| self.monitor.generate_report())
    }
}

impl Drop for MonitorService {
    fn drop(&mut self) {
        self.shutdown();
    }
}
