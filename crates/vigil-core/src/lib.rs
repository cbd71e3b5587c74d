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

//! # Vigil Core
//!
//! Foundational crate containing the sample types, the rolling buffer, and the
//! host capability contracts shared by the performance monitor.
//!
//! This crate defines the abstract "what" of monitoring: what a sample looks
//! like, how many of them are kept, and which host facilities a monitor may
//! depend on. `vigil-telemetry` provides the monitor itself, and `vigil-infra`
//! provides concrete implementations of the host capabilities.

#![warn(missing_docs)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod host;
pub mod sample;

pub use buffer::RollingBuffer;
pub use config::MonitorConfig;
pub use error::{MonitorError, MonitorResult};
pub use event::{EntryType, InputEvent, InteractionKind, PerformanceEntry};
pub use host::{Clock, HeapProbe, HeapUsage, PerformanceTimeline, ReportSink};
pub use sample::{
    FpsBuffer, FpsSample, InteractionBuffer, InteractionSample, MemoryBuffer, MemorySample,
    RenderBuffer, RenderSample, ScrollBuffer, ScrollSample,
};
