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

//! Scroll gesture duration, debounced on scroll inactivity.

use vigil_core::sample::ScrollSample;

/// Whether a scroll gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollState {
    /// No gesture in progress.
    Idle,
    /// A gesture started at `started_ms`; its newest event arrived at `last_event_ms`.
    Scrolling {
        /// Time of the first event of the gesture.
        started_ms: f64,
        /// Time of the newest event of the gesture.
        last_event_ms: f64,
    },
}

/// Turns a stream of scroll events into one sample per contiguous gesture.
///
/// A gesture ends once no scroll event has arrived for the debounce period.
/// Its duration runs from the first to the last event; the debounce wait
/// itself is not counted.
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    debounce_ms: f64,
    state: ScrollState,
}

impl ScrollObserver {
    /// Creates an idle observer.
    pub fn new(debounce_ms: f64) -> Self {
        Self {
            debounce_ms,
            state: ScrollState::Idle,
        }
    }

    /// Current gesture state.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Handles a scroll event at `now_ms`.
    ///
    /// Every event pushes the debounce deadline back. If the previous gesture
    /// had already gone quiet without a pump closing it, it is closed first
    /// and returned.
    pub fn on_scroll(&mut self, now_ms: f64) -> Option<ScrollSample> {
        let finished = self.poll(now_ms);
        self.state = match self.state {
            ScrollState::Idle => ScrollState::Scrolling {
                started_ms: now_ms,
                last_event_ms: now_ms,
            },
            ScrollState::Scrolling { started_ms, .. } => ScrollState::Scrolling {
                started_ms,
                last_event_ms: now_ms,
            },
        };
        finished
    }

    /// Closes the current gesture if it has been quiet for the debounce period.
    pub fn poll(&mut self, now_ms: f64) -> Option<ScrollSample> {
        match self.state {
            ScrollState::Scrolling {
                started_ms,
                last_event_ms,
            } if now_ms >= last_event_ms + self.debounce_ms => {
                self.state = ScrollState::Idle;
                Some(ScrollSample {
                    timestamp_ms: started_ms,
                    duration_ms: last_event_ms - started_ms,
                })
            }
            _ => None,
        }
    }

    /// Abandons an in-flight gesture without recording it.
    pub fn cancel(&mut self) {
        self.state = ScrollState::Idle;
    }
}
