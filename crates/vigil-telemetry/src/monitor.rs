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

//! The performance monitor: lifecycle, producer dispatch and aggregation.

use std::sync::Arc;
use vigil_core::sample::{InteractionSample, RenderSample};
use vigil_core::{
    Clock, EntryType, InputEvent, InteractionKind, MonitorConfig, MonitorResult, ReportSink,
};

use crate::host::HostCapabilities;
use crate::observers::{InteractionObserver, ScrollObserver, ScrollState, VitalsObserver};
use crate::report::emit_report;
use crate::samplers::{FpsSampler, MemorySampler};
use crate::snapshot::MetricsSnapshot;
use crate::store::MetricStore;
use crate::token::{RunToken, StopHandle};
use crate::utils::timer::ScopedRenderTimer;

/// Samples frame rate, heap usage, interaction latency and scroll gestures
/// into bounded rolling buffers.
///
/// The host drives the monitor:
/// - [`on_frame`](Self::on_frame) once per rendered frame,
/// - [`on_input`](Self::on_input) for click, scroll and pointer-move events,
/// - [`tick`](Self::tick) from an idle timer so timers fire between frames.
///
/// Every producer shares one [`RunToken`]; [`stop`](Self::stop) halts all of
/// them at once.
#[derive(Debug)]
pub struct PerformanceMonitor {
    config: MonitorConfig,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn ReportSink>,
    token: RunToken,
    store: MetricStore,
    fps: FpsSampler,
    memory: Option<MemorySampler>,
    interactions: InteractionObserver,
    scroll: ScrollObserver,
    vitals: Option<VitalsObserver>,
}

impl PerformanceMonitor {
    /// Builds an idle monitor, probing the optional host capabilities once.
    ///
    /// The memory sampler only exists if the host can introspect its heap,
    /// and a vitals listener only exists for each entry type the host's
    /// timeline supports.
    ///
    /// Fails with [`MonitorError::InvalidConfig`](vigil_core::MonitorError::InvalidConfig)
    /// if `config` does not pass [`MonitorConfig::validate`].
    pub fn new(config: MonitorConfig, host: HostCapabilities) -> MonitorResult<Self> {
        config.validate()?;
        let HostCapabilities {
            clock,
            heap,
            timeline,
            sink,
        } = host;

        let memory = heap.map(|probe| MemorySampler::new(probe, config.memory_interval_ms));
        if memory.is_none() {
            log::debug!("Heap introspection unavailable, memory sampler disabled.");
        }
        let vitals = timeline.and_then(VitalsObserver::probe);
        if vitals.is_none() {
            log::debug!("Performance timeline unavailable, vitals listeners disabled.");
        }

        Ok(Self {
            fps: FpsSampler::new(config.fps_window_ms, clock.now_ms()),
            scroll: ScrollObserver::new(config.scroll_debounce_ms),
            interactions: InteractionObserver::new(),
            store: MetricStore::new(),
            token: RunToken::new(),
            memory,
            vitals,
            clock,
            sink,
            config,
        })
    }

    /// Builds a monitor and starts it immediately.
    pub fn launch(config: MonitorConfig, host: HostCapabilities) -> MonitorResult<Self> {
        let mut monitor = Self::new(config, host)?;
        monitor.start();
        Ok(monitor)
    }

    /// Starts every producer. Does nothing if already running.
    pub fn start(&mut self) {
        if self.token.is_active() {
            return;
        }
        let now = self.clock.now_ms();
        self.fps.reset(now);
        if let Some(memory) = self.memory.as_mut() {
            memory.arm(now);
        }
        self.interactions.clear();
        self.scroll.cancel();
        if let Some(vitals) = self.vitals.as_mut() {
            vitals.discard();
        }
        self.token.activate();

        log::info!(
            "Performance monitoring started (memory sampler: {}, vitals listeners: {:?})",
            self.memory.is_some(),
            self.vitals_listeners()
        );
    }

    /// Stops every producer: the frame loop, the memory timer, the input
    /// observers and the vitals listeners.
    ///
    /// Pending interactions and an unfinished scroll gesture are discarded.
    /// Recorded samples stay readable.
    pub fn stop(&mut self) {
        let was_running = self.token.is_active();
        self.token.cancel();
        if let Some(memory) = self.memory.as_mut() {
            memory.disarm();
        }
        self.interactions.clear();
        self.scroll.cancel();
        if let Some(vitals) = self.vitals.as_mut() {
            vitals.discard();
        }
        if was_running {
            log::info!("Performance monitoring stopped.");
        }
    }

    /// Returns `true` while the producers are active.
    pub fn is_running(&self) -> bool {
        self.token.is_active()
    }

    /// Returns a handle that stops this monitor from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.token.stop_handle()
    }

    /// Counts a rendered frame.
    ///
    /// Closes the FPS window when it has elapsed, resolves the latency of
    /// every input waiting for this paint, and fires due timers.
    pub fn on_frame(&mut self) {
        if !self.is_running() {
            return;
        }
        let now = self.clock.now_ms();

        if let Some(sample) = self.fps.on_frame(now) {
            log::trace!("FPS window closed at {:.1}ms: {}", now, sample.value);
            if sample.value < self.config.low_fps_threshold {
                self.sink.warn(&format!("Low FPS detected: {}", sample.value));
            }
            self.store.push_fps(sample);
        }

        for sample in self.interactions.on_paint(now) {
            self.record_interaction(sample);
        }

        self.poll_timers(now);
    }

    /// Observes a click, scroll or pointer-move event.
    ///
    /// Never blocks; scroll events are handled passively.
    pub fn on_input(&mut self, event: &InputEvent) {
        if !self.is_running() {
            return;
        }
        let now = self.clock.now_ms();
        self.interactions.on_event(event, now);

        if event.kind == InteractionKind::Scroll {
            if let Some(sample) = self.scroll.on_scroll(now) {
                self.store.push_scroll(sample);
            }
        }
    }

    /// Fires due timers without counting a frame.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        let now = self.clock.now_ms();
        self.poll_timers(now);
    }

    /// Records how long the host took to render a frame.
    pub fn record_render_time(&mut self, duration_ms: f64) {
        if !self.is_running() {
            return;
        }
        self.store.push_render(RenderSample {
            timestamp_ms: self.clock.now_ms(),
            duration_ms,
        });
    }

    /// Starts a timer that records a render time when dropped.
    pub fn time_render(&mut self) -> ScopedRenderTimer<'_> {
        ScopedRenderTimer::new(self)
    }

    /// Copies every buffer and computes the summary. Does not mutate anything.
    pub fn metrics(&self) -> MetricsSnapshot {
        MetricsSnapshot::capture(&self.store)
    }

    /// Logs the summary as a grouped report and returns the same snapshot
    /// [`metrics`](Self::metrics) would.
    pub fn generate_report(&self) -> MetricsSnapshot {
        let snapshot = self.metrics();
        emit_report(self.sink.as_ref(), &snapshot);
        snapshot
    }

    /// The underlying buffers.
    pub fn store(&self) -> &MetricStore {
        &self.store
    }

    /// The configuration the monitor was built with.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// The host clock.
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Current time on the host clock.
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Returns `true` if the host provided heap introspection.
    pub fn has_memory_sampler(&self) -> bool {
        self.memory.is_some()
    }

    /// Entry types with an installed vitals listener.
    pub fn vitals_listeners(&self) -> &[EntryType] {
        self.vitals
            .as_ref()
            .map(|vitals| vitals.listeners())
            .unwrap_or(&[])
    }

    /// Running layout shift total, if the layout-shift listener is installed.
    pub fn cumulative_layout_shift(&self) -> Option<f64> {
        self.vitals
            .as_ref()
            .filter(|vitals| vitals.listeners().contains(&EntryType::LayoutShift))
            .map(|vitals| vitals.cumulative_layout_shift())
    }

    /// State of the scroll gesture detector.
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    /// Number of inputs waiting for the next paint.
    pub fn pending_interactions(&self) -> usize {
        self.interactions.pending_count()
    }

    fn record_interaction(&mut self, sample: InteractionSample) {
        if sample.latency_ms > self.config.high_latency_threshold_ms {
            self.sink.warn(&format!(
                "High interaction latency: {:.2}ms for {}",
                sample.latency_ms, sample.kind
            ));
        }
        self.store.push_interaction(sample);
    }

    fn poll_timers(&mut self, now: f64) {
        if let Some(sample) = self.memory.as_mut().and_then(|memory| memory.poll(now)) {
            log::trace!("Heap snapshot: {:.2}MB used", sample.used_mib());
            self.store.push_memory(sample);
        }
        if let Some(sample) = self.scroll.poll(now) {
            log::trace!("Scroll gesture finished after {:.1}ms", sample.duration_ms);
            self.store.push_scroll(sample);
        }
        if let Some(vitals) = self.vitals.as_mut() {
            vitals.poll(self.sink.as_ref());
        }
    }
}
