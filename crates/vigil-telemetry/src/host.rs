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

//! The bundle of host capabilities a monitor is built from.

use std::sync::Arc;
use vigil_core::{Clock, HeapProbe, PerformanceTimeline, ReportSink};

use crate::report::LogReportSink;

/// Host facilities handed to [`PerformanceMonitor::new`](crate::PerformanceMonitor::new).
///
/// The clock and the report sink are required; heap introspection and the
/// performance timeline are optional and probed once at construction.
#[derive(Debug)]
pub struct HostCapabilities {
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) heap: Option<Box<dyn HeapProbe>>,
    pub(crate) timeline: Option<Box<dyn PerformanceTimeline>>,
    pub(crate) sink: Arc<dyn ReportSink>,
}

impl HostCapabilities {
    /// Creates a host with only a clock, reporting through [`LogReportSink`].
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            heap: None,
            timeline: None,
            sink: Arc::new(LogReportSink::new()),
        }
    }

    /// Adds heap introspection.
    pub fn with_heap_probe(mut self, probe: impl HeapProbe) -> Self {
        self.heap = Some(Box::new(probe));
        self
    }

    /// Adds a performance timeline for the vitals listeners.
    pub fn with_timeline(mut self, timeline: impl PerformanceTimeline) -> Self {
        self.timeline = Some(Box::new(timeline));
        self
    }

    /// Replaces the log channel warnings and reports go to.
    pub fn with_sink(mut self, sink: Arc<dyn ReportSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns `true` if heap introspection is available.
    pub fn has_heap_probe(&self) -> bool {
        self.heap.is_some()
    }

    /// Returns `true` if a performance timeline is available.
    pub fn has_timeline(&self) -> bool {
        self.timeline.is_some()
    }
}
