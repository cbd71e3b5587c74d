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

//! Host capability contracts.
//!
//! The monitor never talks to a platform directly. Everything it needs from
//! the host (time, heap introspection, performance-timeline entries and an
//! operator-visible log channel) goes through one of these traits, so the
//! optional capabilities can be probed once and the rest injected.

use std::fmt::Debug;

use crate::event::{EntryType, PerformanceEntry};

/// A monotonic clock, in milliseconds from an arbitrary origin.
///
/// All samples recorded by one monitor share this clock domain.
pub trait Clock: Send + Sync + Debug + 'static {
    /// Returns the current time in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Heap sizes reported by a [`HeapProbe`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapUsage {
    /// Bytes currently in use.
    pub used_bytes: u64,
    /// Bytes currently reserved.
    pub total_bytes: u64,
    /// Upper bound the heap may grow to.
    pub limit_bytes: u64,
}

/// Optional heap-introspection capability.
///
/// Hosts without heap introspection simply do not provide a probe; the memory
/// sampler is then never created.
pub trait HeapProbe: Send + Debug + 'static {
    /// Reads the current heap usage. Returns `None` if the reading failed,
    /// in which case the tick is skipped.
    fn heap_usage(&self) -> Option<HeapUsage>;
}

/// Optional performance-observation capability.
pub trait PerformanceTimeline: Send + Debug + 'static {
    /// Returns `true` if entries of this type can be observed.
    fn supports(&self, entry_type: EntryType) -> bool;

    /// Removes and returns the entries of the given type delivered since the
    /// previous call, oldest first.
    fn take_records(&self, entry_type: EntryType) -> Vec<PerformanceEntry>;
}

/// The operator-visible log channel the monitor reports through.
///
/// Supports leveled messages and labeled groups. Groups may nest.
pub trait ReportSink: Send + Sync + Debug + 'static {
    /// Emits one message at the given level.
    fn log(&self, level: log::Level, message: &str);

    /// Opens a labeled group; subsequent messages belong to it.
    fn group_start(&self, label: &str);

    /// Closes the innermost open group.
    fn group_end(&self);

    /// Emits an informational message.
    fn info(&self, message: &str) {
        self.log(log::Level::Info, message);
    }

    /// Emits a warning.
    fn warn(&self, message: &str) {
        self.log(log::Level::Warn, message);
    }
}
