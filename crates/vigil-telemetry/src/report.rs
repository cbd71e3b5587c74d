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

//! The human-readable performance report and the default log channel.

use std::sync::atomic::{AtomicUsize, Ordering};
use vigil_core::ReportSink;

use crate::snapshot::MetricsSnapshot;

/// Log target used by [`LogReportSink`].
pub const REPORT_TARGET: &str = "vigil::report";

/// Heading of the grouped report.
pub const REPORT_LABEL: &str = "Performance Report";

/// A [`ReportSink`] that forwards to the `log` facade.
///
/// Messages inside a group are indented by two spaces per open group.
#[derive(Debug, Default)]
pub struct LogReportSink {
    depth: AtomicUsize,
}

impl LogReportSink {
    /// Creates a sink with no open group.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for LogReportSink {
    fn log(&self, level: log::Level, message: &str) {
        let indent = "  ".repeat(self.depth.load(Ordering::Relaxed));
        log::log!(target: REPORT_TARGET, level, "{indent}{message}");
    }

    fn group_start(&self, label: &str) {
        self.log(log::Level::Info, label);
        self.depth.fetch_add(1, Ordering::Relaxed);
    }

    fn group_end(&self) {
        let _ = self
            .depth
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |d| d.checked_sub(1));
    }
}

/// Writes the summary of `snapshot` to `sink` under the report heading.
pub fn emit_report(sink: &dyn ReportSink, snapshot: &MetricsSnapshot) {
    let summary = &snapshot.summary;
    sink.group_start(REPORT_LABEL);
    sink.info(&format!("Average FPS: {:.2}", summary.avg_fps));
    sink.info(&format!(
        "Average Interaction Latency: {:.2}ms",
        summary.avg_interaction_latency_ms
    ));
    if let Some(memory) = &summary.current_memory_usage {
        sink.info(&format!("Memory Usage: {:.2}MB", memory.used_mib()));
    }
    if !snapshot.render_times.is_empty() {
        sink.info(&format!(
            "Average Render Time: {:.2}ms",
            summary.avg_render_time_ms
        ));
    }
    sink.group_end();
}
