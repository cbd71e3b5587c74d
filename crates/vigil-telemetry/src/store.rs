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

//! Rolling storage for every metric category of a monitor.

use vigil_core::sample::{
    FpsBuffer, FpsSample, InteractionBuffer, InteractionSample, MemoryBuffer, MemorySample,
    RenderBuffer, RenderSample, ScrollBuffer, ScrollSample,
};

/// Central store for all samples recorded by one monitor.
///
/// Each category has its own bounded buffer; pushing into a full buffer
/// evicts its oldest sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricStore {
    fps: FpsBuffer,
    memory: MemoryBuffer,
    interactions: InteractionBuffer,
    scroll: ScrollBuffer,
    render: RenderBuffer,
}

impl MetricStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an FPS window.
    pub fn push_fps(&mut self, sample: FpsSample) {
        self.fps.push(sample);
    }

    /// Records a heap snapshot.
    pub fn push_memory(&mut self, sample: MemorySample) {
        self.memory.push(sample);
    }

    /// Records an interaction latency.
    pub fn push_interaction(&mut self, sample: InteractionSample) {
        self.interactions.push(sample);
    }

    /// Records a finished scroll gesture.
    pub fn push_scroll(&mut self, sample: ScrollSample) {
        self.scroll.push(sample);
    }

    /// Records a render time.
    pub fn push_render(&mut self, sample: RenderSample) {
        self.render.push(sample);
    }

    /// FPS history.
    pub fn fps(&self) -> &FpsBuffer {
        &self.fps
    }

    /// Heap snapshot history.
    pub fn memory(&self) -> &MemoryBuffer {
        &self.memory
    }

    /// Interaction latency history.
    pub fn interactions(&self) -> &InteractionBuffer {
        &self.interactions
    }

    /// Scroll gesture history.
    pub fn scroll(&self) -> &ScrollBuffer {
        &self.scroll
    }

    /// Render time history.
    pub fn render(&self) -> &RenderBuffer {
        &self.render
    }

    /// Mean of the FPS history, or 0.0 if empty.
    pub fn average_fps(&self) -> f64 {
        self.fps.mean_by(|s| f64::from(s.value))
    }

    /// Mean interaction latency in milliseconds, or 0.0 if empty.
    pub fn average_interaction_latency(&self) -> f64 {
        self.interactions.mean_by(|s| s.latency_ms)
    }

    /// Mean render time in milliseconds, or 0.0 if empty.
    pub fn average_render_time(&self) -> f64 {
        self.render.mean_by(|s| s.duration_ms)
    }

    /// The newest heap snapshot, if any.
    pub fn current_memory(&self) -> Option<MemorySample> {
        self.memory.latest().copied()
    }
}
