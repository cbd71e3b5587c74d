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

//! Frame-rate sampling over fixed windows.

use vigil_core::sample::FpsSample;

/// Counts frames and emits one [`FpsSample`] per elapsed window.
#[derive(Debug, Clone)]
pub struct FpsSampler {
    window_ms: f64,
    frame_count: u32,
    window_start_ms: f64,
}

impl FpsSampler {
    /// Creates a sampler whose first window starts at `now_ms`.
    pub fn new(window_ms: f64, now_ms: f64) -> Self {
        Self {
            window_ms,
            frame_count: 0,
            window_start_ms: now_ms,
        }
    }

    /// Discards the current window and starts a new one at `now_ms`.
    pub fn reset(&mut self, now_ms: f64) {
        self.frame_count = 0;
        self.window_start_ms = now_ms;
    }

    /// Frames counted in the current window so far.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Counts one rendered frame. Returns a sample when at least one window
    /// has elapsed since the last boundary, and starts the next window.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<FpsSample> {
        self.frame_count = self.frame_count.saturating_add(1);
        let elapsed = now_ms - self.window_start_ms;
        if elapsed < self.window_ms || elapsed <= 0.0 {
            return None;
        }

        let value = (f64::from(self.frame_count) * 1000.0 / elapsed).round() as u32;
        self.reset(now_ms);
        Some(FpsSample {
            timestamp_ms: now_ms,
            value,
        })
    }
}
