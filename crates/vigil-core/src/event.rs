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

//! Inputs the host feeds into the monitor: user input events and
//! performance-timeline entries.

use serde::Serialize;
use std::fmt::{self, Display};

/// The user input categories whose latency is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// A pointer click.
    Click,
    /// A scroll of the document.
    Scroll,
    /// A pointer movement.
    PointerMove,
}

impl InteractionKind {
    /// Returns the event name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Click => "click",
            InteractionKind::Scroll => "scroll",
            InteractionKind::PointerMove => "pointermove",
        }
    }
}

impl Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document-level input event delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// What kind of input this is.
    pub kind: InteractionKind,
    /// Tag name of the element the event targeted (e.g. "BUTTON").
    pub target: String,
}

impl InputEvent {
    /// Creates a new input event.
    pub fn new(kind: InteractionKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }

    /// A click on an element with the given tag name.
    pub fn click(target: impl Into<String>) -> Self {
        Self::new(InteractionKind::Click, target)
    }

    /// A scroll targeting the given element.
    pub fn scroll(target: impl Into<String>) -> Self {
        Self::new(InteractionKind::Scroll, target)
    }

    /// A pointer movement over the given element.
    pub fn pointer_move(target: impl Into<String>) -> Self {
        Self::new(InteractionKind::PointerMove, target)
    }
}

/// The performance-timeline categories the vitals observers listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Paint timing of the largest content element.
    LargestContentfulPaint,
    /// Timing of the first user input.
    FirstInput,
    /// Unexpected layout movement.
    LayoutShift,
}

impl EntryType {
    /// All entry types, in the order the observers are installed.
    pub const ALL: [EntryType; 3] = [
        EntryType::LargestContentfulPaint,
        EntryType::FirstInput,
        EntryType::LayoutShift,
    ];
}

/// A single entry delivered by the host's performance timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerformanceEntry {
    /// A largest-contentful-paint candidate.
    LargestContentfulPaint {
        /// Render time of the candidate.
        start_time_ms: f64,
    },
    /// The first user input.
    FirstInput {
        /// Time the input happened.
        start_time_ms: f64,
        /// Time the page started processing it.
        processing_start_ms: f64,
    },
    /// A layout shift.
    LayoutShift {
        /// Shift score of this entry.
        value: f64,
        /// Whether a user input happened just before the shift.
        had_recent_input: bool,
    },
}

impl PerformanceEntry {
    /// Returns the timeline category of this entry.
    pub fn entry_type(&self) -> EntryType {
        match self {
            PerformanceEntry::LargestContentfulPaint { .. } => EntryType::LargestContentfulPaint,
            PerformanceEntry::FirstInput { .. } => EntryType::FirstInput,
            PerformanceEntry::LayoutShift { .. } => EntryType::LayoutShift,
        }
    }
}
