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

//! Periodic heap snapshots.

use vigil_core::sample::MemorySample;
use vigil_core::HeapProbe;

/// Reads the heap through a [`HeapProbe`] on a fixed interval.
///
/// Only built when the host provides heap introspection. The timer is
/// deadline based: a pump that arrives late takes a single snapshot and the
/// next deadline is re-phased onto the original interval grid.
#[derive(Debug)]
pub struct MemorySampler {
    probe: Box<dyn HeapProbe>,
    interval_ms: f64,
    next_due_ms: Option<f64>,
}

impl MemorySampler {
    /// Creates a disarmed sampler.
    pub fn new(probe: Box<dyn HeapProbe>, interval_ms: f64) -> Self {
        Self {
            probe,
            interval_ms,
            next_due_ms: None,
        }
    }

    /// Schedules the first snapshot one interval after `now_ms`.
    pub fn arm(&mut self, now_ms: f64) {
        self.next_due_ms = Some(now_ms + self.interval_ms);
    }

    /// Cancels the timer.
    pub fn disarm(&mut self) {
        self.next_due_ms = None;
    }

    /// Returns the time of the next scheduled snapshot, if armed.
    pub fn next_due_ms(&self) -> Option<f64> {
        self.next_due_ms
    }

    /// Takes a snapshot if the timer is due.
    ///
    /// Returns `None` when the timer is not due, is disarmed, or the probe
    /// could not be read this tick.
    pub fn poll(&mut self, now_ms: f64) -> Option<MemorySample> {
        let due = self.next_due_ms?;
        if now_ms < due {
            return None;
        }

        let skipped = ((now_ms - due) / self.interval_ms).floor();
        if skipped >= 1.0 {
            log::trace!("Memory sampler skipped {skipped} missed tick(s)");
        }
        self.next_due_ms = Some(due + (skipped + 1.0) * self.interval_ms);

        let usage = self.probe.heap_usage()?;
        Some(MemorySample {
            timestamp_ms: now_ms,
            used_bytes: usage.used_bytes,
            total_bytes: usage.total_bytes,
            limit_bytes: usage.limit_bytes,
        })
    }
}
