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

//! A [`PerformanceTimeline`] fed through a `flume` channel.
//!
//! The host publishes entries from wherever it produces them through a
//! cloneable [`TimelineFeed`]; the monitor drains them on its next pump.
//! The channel is bounded: while nobody drains it, the oldest entries are
//! dropped to make room for new ones.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

use vigil_core::{EntryType, PerformanceEntry, PerformanceTimeline};

/// Entries retained by [`ChannelTimeline::new`] before the oldest are dropped.
pub const DEFAULT_TIMELINE_CAPACITY: usize = 256;

/// Receiving side: buffers entries per type until the monitor takes them.
#[derive(Debug)]
pub struct ChannelTimeline {
    supported: HashSet<EntryType>,
    receiver: flume::Receiver<PerformanceEntry>,
    backlog: Mutex<VecDeque<PerformanceEntry>>,
    capacity: usize,
}

/// Sending side of a [`ChannelTimeline`].
#[derive(Debug, Clone)]
pub struct TimelineFeed {
    sender: flume::Sender<PerformanceEntry>,
    // Used only to evict the oldest entry when the channel is full.
    overflow: flume::Receiver<PerformanceEntry>,
}

impl ChannelTimeline {
    /// Creates a timeline that supports the given entry types, and its feed.
    pub fn new(supported: impl IntoIterator<Item = EntryType>) -> (Self, TimelineFeed) {
        Self::with_capacity(supported, DEFAULT_TIMELINE_CAPACITY)
    }

    /// Like [`new`](Self::new), retaining at most `capacity` undrained entries.
    pub fn with_capacity(
        supported: impl IntoIterator<Item = EntryType>,
        capacity: usize,
    ) -> (Self, TimelineFeed) {
        let capacity = capacity.max(1);
        let (sender, receiver) = flume::bounded(capacity);
        let feed = TimelineFeed {
            sender,
            overflow: receiver.clone(),
        };
        let timeline = Self {
            supported: supported.into_iter().collect(),
            receiver,
            backlog: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        };
        (timeline, feed)
    }

    /// Creates a timeline supporting every entry type.
    pub fn all() -> (Self, TimelineFeed) {
        Self::new(EntryType::ALL)
    }
}

impl PerformanceTimeline for ChannelTimeline {
    fn supports(&self, entry_type: EntryType) -> bool {
        self.supported.contains(&entry_type)
    }

    fn take_records(&self, entry_type: EntryType) -> Vec<PerformanceEntry> {
        let Ok(mut backlog) = self.backlog.lock() else {
            return Vec::new();
        };
        backlog.extend(
            self.receiver
                .try_iter()
                .filter(|entry| self.supported.contains(&entry.entry_type())),
        );
        let excess = backlog.len().saturating_sub(self.capacity);
        backlog.drain(..excess);

        let mut taken = Vec::new();
        backlog.retain(|entry| {
            if entry.entry_type() == entry_type {
                taken.push(*entry);
                false
            } else {
                true
            }
        });
        taken
    }
}

impl TimelineFeed {
    /// Delivers an entry, logging an error if the timeline is gone.
    ///
    /// Never blocks: when the channel is full the oldest undrained entry is
    /// dropped.
    pub fn publish(&self, mut entry: PerformanceEntry) {
        log::trace!("Publishing a {:?} entry.", entry.entry_type());
        // Every feed holds one sender and one eviction receiver.
        if self.sender.receiver_count() <= self.sender.sender_count() {
            log::error!("Failed to publish performance entry. Timeline likely dropped.");
            return;
        }
        loop {
            match self.sender.try_send(entry) {
                Ok(()) => return,
                Err(flume::TrySendError::Full(rejected)) => {
                    if let Ok(evicted) = self.overflow.try_recv() {
                        log::trace!("Timeline full, dropped a {:?} entry.", evicted.entry_type());
                    }
                    entry = rejected;
                }
                Err(flume::TrySendError::Disconnected(_)) => {
                    log::error!("Failed to publish performance entry. Timeline likely dropped.");
                    return;
                }
            }
        }
    }

    /// Number of published entries not yet drained by the timeline.
    pub fn queued(&self) -> usize {
        self.sender.len()
    }
}
