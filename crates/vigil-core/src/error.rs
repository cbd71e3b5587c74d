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

//! Error types for configuration and export.
//!
//! Sampling itself never fails: missing capabilities are skipped and
//! threshold crossings are reported as warnings, not errors.

use std::fmt::{self, Display};

/// A specialized `Result` type for monitor operations.
pub type MonitorResult<T> = Result<T, MonitorError>;

/// An error that can occur while configuring the monitor or exporting its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    /// A configuration value is out of range.
    InvalidConfig(String),
    /// Encoding or decoding JSON failed.
    Serialization(String),
    /// Reading or writing a file failed.
    Io(String),
}

impl Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            MonitorError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            MonitorError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for MonitorError {}

impl From<serde_json::Error> for MonitorError {
    fn from(err: serde_json::Error) -> Self {
        MonitorError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for MonitorError {
    fn from(err: std::io::Error) -> Self {
        MonitorError::Io(err.to_string())
    }
}
