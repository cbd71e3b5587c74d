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

//! Read-only views of a monitor's metrics.

use serde::Serialize;
use vigil_core::sample::{FpsSample, InteractionSample, MemorySample, RenderSample, ScrollSample};
use vigil_core::MonitorResult;

use crate::store::MetricStore;

/// Aggregates derived from the rolling buffers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Mean of the FPS history, 0 when no window has completed.
    pub avg_fps: f64,
    /// Mean interaction latency in milliseconds, 0 when none was measured.
    pub avg_interaction_latency_ms: f64,
    /// Mean render time in milliseconds, 0 when none was recorded.
    pub avg_render_time_ms: f64,
    /// The newest heap snapshot, if any.
    pub current_memory_usage: Option<MemorySample>,
}

/// A copy of every buffer plus its summary, taken at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    /// FPS history, oldest first.
    pub fps: Vec<FpsSample>,
    /// Heap snapshots, oldest first.
    pub memory_usage: Vec<MemorySample>,
    /// Render times, oldest first.
    pub render_times: Vec<RenderSample>,
    /// Interaction latencies, oldest first.
    pub interaction_latency: Vec<InteractionSample>,
    /// Scroll gestures, oldest first.
    pub scroll_performance: Vec<ScrollSample>,
    /// Aggregates over the buffers above.
    pub summary: Summary,
}

impl MetricsSnapshot {
    /// Copies the store's buffers and computes their summary.
    pub fn capture(store: &MetricStore) -> Self {
        Self {
            fps: store.fps().to_vec(),
            memory_usage: store.memory().to_vec(),
            render_times: store.render().to_vec(),
            interaction_latency: store.interactions().to_vec(),
            scroll_performance: store.scroll().to_vec(),
            summary: Summary {
                avg_fps: store.average_fps(),
                avg_interaction_latency_ms: store.average_interaction_latency(),
                avg_render_time_ms: store.average_render_time(),
                current_memory_usage: store.current_memory(),
            },
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> MonitorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
