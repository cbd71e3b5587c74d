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

//! Web-vitals listeners: largest contentful paint, first input delay and
//! cumulative layout shift. Values are logged, never stored in buffers.

use vigil_core::{EntryType, PerformanceEntry, PerformanceTimeline, ReportSink};

/// Listens to the host's performance timeline for the entry types it supports.
#[derive(Debug)]
pub struct VitalsObserver {
    timeline: Box<dyn PerformanceTimeline>,
    listeners: Vec<EntryType>,
    cumulative_layout_shift: f64,
}

impl VitalsObserver {
    /// Installs one listener per entry type the timeline supports.
    ///
    /// Returns `None` when the timeline supports none of them.
    pub fn probe(timeline: Box<dyn PerformanceTimeline>) -> Option<Self> {
        let listeners: Vec<EntryType> = EntryType::ALL
            .into_iter()
            .filter(|entry_type| timeline.supports(*entry_type))
            .collect();
        if listeners.is_empty() {
            return None;
        }
        Some(Self {
            timeline,
            listeners,
            cumulative_layout_shift: 0.0,
        })
    }

    /// The entry types being listened to.
    pub fn listeners(&self) -> &[EntryType] {
        &self.listeners
    }

    /// Running layout shift total, excluding shifts right after user input.
    pub fn cumulative_layout_shift(&self) -> f64 {
        self.cumulative_layout_shift
    }

    /// Drains new timeline entries and logs them to `sink`.
    pub fn poll(&mut self, sink: &dyn ReportSink) {
        for index in 0..self.listeners.len() {
            let entry_type = self.listeners[index];
            let entries = self.timeline.take_records(entry_type);
            if entries.is_empty() {
                continue;
            }
            match entry_type {
                EntryType::LargestContentfulPaint => Self::report_lcp(&entries, sink),
                EntryType::FirstInput => Self::report_fid(&entries, sink),
                EntryType::LayoutShift => self.accumulate_cls(&entries, sink),
            }
        }
    }

    /// Drops queued timeline entries without logging them.
    pub fn discard(&mut self) {
        for entry_type in &self.listeners {
            self.timeline.take_records(*entry_type);
        }
    }

    fn report_lcp(entries: &[PerformanceEntry], sink: &dyn ReportSink) {
        // Only the newest candidate counts.
        let latest = entries.iter().rev().find_map(|entry| match entry {
            PerformanceEntry::LargestContentfulPaint { start_time_ms } => Some(*start_time_ms),
            _ => None,
        });
        if let Some(start_time_ms) = latest {
            sink.info(&format!("LCP: {start_time_ms:.2}ms"));
        }
    }

    fn report_fid(entries: &[PerformanceEntry], sink: &dyn ReportSink) {
        for entry in entries {
            if let PerformanceEntry::FirstInput {
                start_time_ms,
                processing_start_ms,
            } = entry
            {
                let delay = processing_start_ms - start_time_ms;
                sink.info(&format!("FID: {delay:.2}ms"));
            }
        }
    }

    fn accumulate_cls(&mut self, entries: &[PerformanceEntry], sink: &dyn ReportSink) {
        for entry in entries {
            if let PerformanceEntry::LayoutShift {
                value,
                had_recent_input: false,
            } = entry
            {
                self.cumulative_layout_shift += value;
            }
        }
        sink.info(&format!("CLS: {:.4}", self.cumulative_layout_shift));
    }
}
