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

//! Cooperative cancellation shared by every producer of a monitor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The run flag checked by every producer before it records anything.
///
/// One token is threaded through the FPS loop, the memory timer, the input
/// observers and the vitals listeners, so cancelling it halts all of them.
#[derive(Debug, Clone, Default)]
pub struct RunToken {
    active: Arc<AtomicBool>,
}

impl RunToken {
    /// Creates an inactive token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the token active.
    pub fn activate(&self) {
        self.active.store(true, Ordering::SeqCst);
    }

    /// Cancels the token.
    pub fn cancel(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Returns `true` while producers may record samples.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Returns a handle that can cancel this token from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            active: Arc::clone(&self.active),
        }
    }
}

/// A cloneable, thread-safe handle that stops a monitor.
///
/// The monitor observes the cancellation on its next pump.
#[derive(Debug, Clone)]
pub struct StopHandle {
    active: Arc<AtomicBool>,
}

impl StopHandle {
    /// Stops the monitor this handle was taken from.
    pub fn stop(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Returns `true` once the monitor is no longer running.
    pub fn is_stopped(&self) -> bool {
        !self.active.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_lifecycle() {
        let token = RunToken::new();
        assert!(!token.is_active());
        token.activate();
        assert!(token.is_active());
        token.cancel();
        assert!(!token.is_active());
    }

    #[test]
    fn stop_handle_cancels_from_another_thread() {
        let token = RunToken::new();
        token.activate();
        let handle = token.stop_handle();

        std::thread::spawn(move || handle.stop()).join().unwrap();

        assert!(!token.is_active());
        assert!(token.stop_handle().is_stopped());
    }
}
