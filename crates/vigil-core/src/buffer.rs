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

//! Fixed-capacity rolling storage for metric samples.

use serde::{Serialize, Serializer};
use std::collections::vec_deque::{self, VecDeque};

/// A fixed-capacity, insertion-ordered buffer that evicts its oldest sample
/// when a push would exceed `N`.
///
/// Producers always append the newest sample, so iteration order is also
/// capture order (oldest to newest).
#[derive(Debug, Clone, PartialEq)]
pub struct RollingBuffer<T, const N: usize> {
    samples: VecDeque<T>,
}

impl<T, const N: usize> RollingBuffer<T, N> {
    /// The maximum number of samples kept.
    pub const CAPACITY: usize = N;

    /// Creates a new, empty buffer.
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(N),
        }
    }

    /// Returns the maximum number of samples kept.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Appends a sample, evicting and returning the oldest one if the buffer was full.
    pub fn push(&mut self, sample: T) -> Option<T> {
        if N == 0 {
            return Some(sample);
        }
        let evicted = if self.samples.len() == N {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(sample);
        evicted
    }

    /// Returns the number of samples currently held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no sample has been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns `true` once the buffer holds `N` samples.
    pub fn is_full(&self) -> bool {
        self.samples.len() == N
    }

    /// Returns the newest sample.
    pub fn latest(&self) -> Option<&T> {
        self.samples.back()
    }

    /// Returns the oldest sample still held.
    pub fn oldest(&self) -> Option<&T> {
        self.samples.front()
    }

    /// Iterates over the samples from oldest to newest.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.samples.iter()
    }

    /// Removes every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Arithmetic mean of `value(sample)` over the buffer, or `0.0` when empty.
    pub fn mean_by<F>(&self, value: F) -> f64
    where
        F: Fn(&T) -> f64,
    {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(value).sum::<f64>() / self.samples.len() as f64
    }
}

impl<T: Clone, const N: usize> RollingBuffer<T, N> {
    /// Copies the samples into a `Vec`, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.samples.iter().cloned().collect()
    }
}

impl<T, const N: usize> Default for RollingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a RollingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl<T: Serialize, const N: usize> Serialize for RollingBuffer<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.samples.iter())
    }
}
