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

//! Sample types recorded by the monitor, one per metric category.
//!
//! Every sample carries a `timestamp_ms` in the clock domain of the host
//! [`Clock`](crate::host::Clock), so samples from different buffers can be
//! placed on the same timeline.

use serde::Serialize;

use crate::buffer::RollingBuffer;
use crate::event::InteractionKind;

/// Number of FPS samples kept (one per second, so one minute of history).
pub const FPS_CAPACITY: usize = 60;
/// Number of heap snapshots kept.
pub const MEMORY_CAPACITY: usize = 100;
/// Number of interaction latency samples kept.
pub const INTERACTION_CAPACITY: usize = 200;
/// Number of scroll gestures kept.
pub const SCROLL_CAPACITY: usize = 100;
/// Number of render-time samples kept.
pub const RENDER_CAPACITY: usize = 100;

/// Rolling FPS history.
pub type FpsBuffer = RollingBuffer<FpsSample, FPS_CAPACITY>;
/// Rolling heap usage history.
pub type MemoryBuffer = RollingBuffer<MemorySample, MEMORY_CAPACITY>;
/// Rolling interaction latency history.
pub type InteractionBuffer = RollingBuffer<InteractionSample, INTERACTION_CAPACITY>;
/// Rolling scroll gesture history.
pub type ScrollBuffer = RollingBuffer<ScrollSample, SCROLL_CAPACITY>;
/// Rolling render-time history.
pub type RenderBuffer = RollingBuffer<RenderSample, RENDER_CAPACITY>;

/// Frames rendered during one FPS window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FpsSample {
    /// End of the window.
    pub timestamp_ms: f64,
    /// Frames per second, rounded to the nearest integer.
    pub value: u32,
}

/// A heap usage snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemorySample {
    /// Time the snapshot was read.
    pub timestamp_ms: f64,
    /// Bytes currently in use.
    pub used_bytes: u64,
    /// Bytes currently reserved.
    pub total_bytes: u64,
    /// Upper bound the heap may grow to.
    pub limit_bytes: u64,
}

impl MemorySample {
    /// Returns the used heap size in mebibytes.
    pub fn used_mib(&self) -> f64 {
        self.used_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Delay between a user input and the next painted frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionSample {
    /// Time the input was observed.
    pub timestamp_ms: f64,
    /// The kind of input.
    pub kind: InteractionKind,
    /// Milliseconds until the next paint.
    pub latency_ms: f64,
    /// Tag name of the element the input targeted.
    pub target: String,
}

/// One contiguous scroll gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollSample {
    /// Time of the first scroll event of the gesture.
    pub timestamp_ms: f64,
    /// Milliseconds from the first to the last scroll event of the gesture.
    pub duration_ms: f64,
}

/// Time spent producing one frame, as reported by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderSample {
    /// Time the measurement was recorded.
    pub timestamp_ms: f64,
    /// Render duration in milliseconds.
    pub duration_ms: f64,
}
