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

//! Input-to-next-paint latency.

use std::collections::VecDeque;
use vigil_core::sample::{InteractionSample, INTERACTION_CAPACITY};
use vigil_core::{InputEvent, InteractionKind};

#[derive(Debug, Clone)]
struct PendingInteraction {
    started_ms: f64,
    kind: InteractionKind,
    target: String,
}

/// Measures the delay between an input event and the next painted frame.
///
/// Each event is parked until the host reports the next frame; the
/// difference between the two clock readings is the latency.
#[derive(Debug, Default)]
pub struct InteractionObserver {
    pending: VecDeque<PendingInteraction>,
}

impl InteractionObserver {
    /// Creates an observer with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks an event observed at `now_ms` until the next paint.
    ///
    /// At most as many events are parked as the interaction buffer can hold;
    /// older ones would be evicted from it anyway.
    pub fn on_event(&mut self, event: &InputEvent, now_ms: f64) {
        if self.pending.len() == INTERACTION_CAPACITY {
            self.pending.pop_front();
        }
        self.pending.push_back(PendingInteraction {
            started_ms: now_ms,
            kind: event.kind,
            target: event.target.clone(),
        });
    }

    /// Resolves every parked event against a paint at `now_ms`.
    pub fn on_paint(&mut self, now_ms: f64) -> Vec<InteractionSample> {
        self.pending
            .drain(..)
            .map(|pending| InteractionSample {
                timestamp_ms: pending.started_ms,
                kind: pending.kind,
                latency_ms: (now_ms - pending.started_ms).max(0.0),
                target: pending.target,
            })
            .collect()
    }

    /// Number of events waiting for a paint.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drops every parked event.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latency_is_time_to_next_paint() {
        let mut observer = InteractionObserver::new();
        observer.on_event(&InputEvent::click("BUTTON"), 100.0);
        let samples = observer.on_paint(137.0);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].timestamp_ms, 100.0);
        assert!((samples[0].latency_ms - 37.0).abs() < 1e-9);
        assert_eq!(samples[0].kind, InteractionKind::Click);
        assert_eq!(samples[0].target, "BUTTON");
        assert_eq!(observer.pending_count(), 0);
    }

    #[test]
    fn one_paint_resolves_all_parked_events_in_order() {
        let mut observer = InteractionObserver::new();
        observer.on_event(&InputEvent::pointer_move("DIV"), 10.0);
        observer.on_event(&InputEvent::scroll("HTML"), 12.0);
        let samples = observer.on_paint(20.0);

        let latencies: Vec<f64> = samples.iter().map(|s| s.latency_ms).collect();
        assert_eq!(latencies, vec![10.0, 8.0]);
        assert!(observer.on_paint(40.0).is_empty());
    }

    #[test]
    fn parked_events_are_bounded() {
        let mut observer = InteractionObserver::new();
        for i in 0..(INTERACTION_CAPACITY + 50) {
            observer.on_event(&InputEvent::pointer_move("DIV"), i as f64);
        }
        assert_eq!(observer.pending_count(), INTERACTION_CAPACITY);
        let samples = observer.on_paint(1000.0);
        assert_eq!(samples[0].timestamp_ms, 50.0);
    }
}
