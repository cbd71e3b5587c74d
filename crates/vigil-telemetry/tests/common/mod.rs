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

//! Shared host doubles for the monitor integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use vigil_core::{HeapProbe, HeapUsage, MonitorConfig, ReportSink};
use vigil_infra::ManualClock;
use vigil_telemetry::{HostCapabilities, PerformanceMonitor};

/// One line written to a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkLine {
    Message(log::Level, String),
    GroupStart(String),
    GroupEnd,
}

/// A report sink that remembers everything written to it.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<SinkLine>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<SinkLine> {
        self.lines.lock().unwrap().clone()
    }

    pub fn messages_at(&self, level: log::Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                SinkLine::Message(l, message) if l == level => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages_at(log::Level::Warn)
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages_at(log::Level::Info)
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl ReportSink for RecordingSink {
    fn log(&self, level: log::Level, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(SinkLine::Message(level, message.to_string()));
    }

    fn group_start(&self, label: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(SinkLine::GroupStart(label.to_string()));
    }

    fn group_end(&self) {
        self.lines.lock().unwrap().push(SinkLine::GroupEnd);
    }
}

/// A heap probe returning a fixed reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedHeap(pub HeapUsage);

impl FixedHeap {
    pub fn mib(used: u64) -> Self {
        Self(HeapUsage {
            used_bytes: used * 1024 * 1024,
            total_bytes: 2 * used * 1024 * 1024,
            limit_bytes: 4096 * 1024 * 1024,
        })
    }
}

impl HeapProbe for FixedHeap {
    fn heap_usage(&self) -> Option<HeapUsage> {
        Some(self.0)
    }
}

/// Clock and sink handles kept by a test after the host is moved into a monitor.
pub struct Harness {
    pub clock: Arc<ManualClock>,
    pub sink: Arc<RecordingSink>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(ManualClock::new(0.0)),
            sink: Arc::new(RecordingSink::default()),
        }
    }

    /// A host with only the required capabilities.
    pub fn host(&self) -> HostCapabilities {
        HostCapabilities::new(self.clock.clone()).with_sink(self.sink.clone())
    }

    /// Launches a monitor with the default configuration on a bare host.
    pub fn launch(&self) -> PerformanceMonitor {
        PerformanceMonitor::launch(MonitorConfig::default(), self.host()).unwrap()
    }

    pub fn at(&self, now_ms: f64) {
        self.clock.set_ms(now_ms);
    }
}
