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

//! Process memory probe backed by `sysinfo`.

use std::fmt;
use std::sync::Mutex;

use sysinfo::{Pid, ProcessesToUpdate, System};
use vigil_core::{HeapProbe, HeapUsage};

/// Reads the current process's memory footprint.
///
/// `used_bytes` is the resident set, `total_bytes` the reserved virtual size
/// and `limit_bytes` the machine's physical memory.
pub struct SysinfoHeapProbe {
    pid: Pid,
    system: Mutex<System>,
}

impl SysinfoHeapProbe {
    /// Creates a probe for the current process.
    ///
    /// Returns `None` on platforms `sysinfo` cannot introspect.
    pub fn new() -> Option<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            log::debug!("sysinfo does not support this platform.");
            return None;
        }
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => pid,
            Err(e) => {
                log::warn!("Failed to resolve the current process id: {e}");
                return None;
            }
        };
        Some(Self {
            pid,
            system: Mutex::new(System::new()),
        })
    }
}

impl fmt::Debug for SysinfoHeapProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SysinfoHeapProbe")
            .field("pid", &self.pid)
            .finish_non_exhaustive()
    }
}

impl HeapProbe for SysinfoHeapProbe {
    fn heap_usage(&self) -> Option<HeapUsage> {
        let mut system = self.system.lock().ok()?;
        system.refresh_memory();
        system.refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);

        let process = system.process(self.pid)?;
        Some(HeapUsage {
            used_bytes: process.memory(),
            total_bytes: process.virtual_memory(),
            limit_bytes: system.total_memory(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_reads_own_process() {
        let Some(probe) = SysinfoHeapProbe::new() else {
            return;
        };
        let usage = probe.heap_usage().expect("own process should be visible");
        assert!(usage.used_bytes > 0);
        assert!(usage.limit_bytes > 0);
    }
}
