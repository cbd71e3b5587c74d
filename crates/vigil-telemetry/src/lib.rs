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

//! Performance monitoring service.
//!
//! [`PerformanceMonitor`] owns the rolling metric buffers and the producers
//! that fill them: the FPS sampler, the heap snapshot timer, the interaction
//! latency and scroll gesture observers, and the web-vitals listeners. The
//! host pumps it with frames, input events and timer ticks.
//! [`MonitorService`] adds the development-mode report schedule on top.

pub mod host;
pub mod monitor;
pub mod observers;
pub mod report;
pub mod samplers;
pub mod service;
pub mod snapshot;
pub mod store;
pub mod token;
pub mod utils;

pub use host::HostCapabilities;
pub use monitor::PerformanceMonitor;
pub use report::LogReportSink;
pub use service::{MonitorService, ReportTrigger};
pub use snapshot::{MetricsSnapshot, Summary};
pub use store::MetricStore;
pub use token::{RunToken, StopHandle};
