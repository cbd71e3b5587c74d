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

//! Provides an RAII timer for render-time samples. (RAII = Resource Acquisition Is Initialization)

use crate::monitor::PerformanceMonitor;

/// Times a scope on the monitor's clock and records the result as a render
/// time when dropped.
///
/// The measurement is recorded even on early returns.
pub struct ScopedRenderTimer<'a> {
    monitor: &'a mut PerformanceMonitor,
    started_ms: f64,
}

impl<'a> ScopedRenderTimer<'a> {
    /// Creates a new timer for the given monitor and starts it immediately.
    pub fn new(monitor: &'a mut PerformanceMonitor) -> Self {
        let started_ms = monitor.now_ms();
        Self {
            monitor,
            started_ms,
        }
    }

    /// Milliseconds elapsed since the timer started.
    pub fn elapsed_ms(&self) -> f64 {
        (self.monitor.now_ms() - self.started_ms).max(0.0)
    }
}

impl Drop for ScopedRenderTimer<'_> {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        self.monitor.record_render_time(elapsed_ms);
    }
}
