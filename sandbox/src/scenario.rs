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

//! Synthetic workload: which inputs, timeline entries and render costs each
//! frame of the demo produces.

use std::time::Duration;

use vigil_core::{InputEvent, PerformanceEntry};

/// Deterministic script for a loop running at `fps` frames per second.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    fps: u64,
}

impl Scenario {
    pub fn new(fps: u32) -> Self {
        Self { fps: u64::from(fps) }
    }

    /// Frame period.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    /// Inputs delivered before `frame` is rendered.
    ///
    /// A click every two seconds, a quarter-second scroll burst every three
    /// seconds, and pointer movement in between.
    pub fn inputs(&self, frame: u64) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if frame % (self.fps * 2) == self.fps / 2 {
            events.push(InputEvent::click("BUTTON"));
        }
        let in_second = frame % (self.fps * 3);
        if in_second < self.fps / 4 && in_second % 2 == 0 {
            events.push(InputEvent::scroll("HTML"));
        }
        if frame % 5 == 0 {
            events.push(InputEvent::pointer_move("CANVAS"));
        }
        events
    }

    /// How long rendering `frame` takes. Every sixth second one click lands on
    /// a long frame.
    pub fn render_cost(&self, frame: u64) -> Duration {
        if frame % (self.fps * 6) == self.fps / 2 {
            return Duration::from_millis(140);
        }
        Duration::from_millis(2 + frame % 4)
    }

    /// Timeline entries the page would produce around `frame`.
    pub fn timeline_entries(&self, frame: u64, now_ms: f64) -> Vec<PerformanceEntry> {
        let mut entries = Vec::new();
        if frame == self.fps / 2 || frame == self.fps {
            entries.push(PerformanceEntry::LargestContentfulPaint {
                start_time_ms: now_ms,
            });
        }
        if frame == self.fps / 2 {
            entries.push(PerformanceEntry::FirstInput {
                start_time_ms: now_ms,
                processing_start_ms: now_ms + 3.5,
            });
        }
        if frame > 0 && frame % (self.fps * 4) == 0 {
            entries.push(PerformanceEntry::LayoutShift {
                value: 0.02,
                had_recent_input: frame % (self.fps * 8) == 0,
            });
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::InteractionKind;

    #[test]
    fn scroll_bursts_are_short() {
        let scenario = Scenario::new(60);
        let scroll_frames: Vec<u64> = (0..180)
            .filter(|frame| {
                scenario
                    .inputs(*frame)
                    .iter()
                    .any(|event| event.kind == InteractionKind::Scroll)
            })
            .collect();
        assert_eq!(scroll_frames, vec![0, 2, 4, 6, 8, 10, 12, 14]);
    }

    #[test]
    fn long_frame_lands_on_a_click() {
        let scenario = Scenario::new(60);
        let frame = 30;
        assert!(scenario.render_cost(frame) >= Duration::from_millis(100));
        assert!(scenario
            .inputs(frame)
            .iter()
            .any(|event| event.kind == InteractionKind::Click));
    }
}
