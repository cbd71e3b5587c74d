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

//! Monitor configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MonitorError, MonitorResult};

/// Thresholds and intervals used by the monitor.
///
/// Every field has a default, so a JSON document only needs the values it
/// overrides. Buffer capacities are not configurable; see
/// [`sample`](crate::sample).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Length of one FPS window.
    pub fps_window_ms: f64,
    /// A window below this many frames per second triggers a warning.
    pub low_fps_threshold: u32,
    /// Period of the heap snapshot timer.
    pub memory_interval_ms: f64,
    /// An interaction slower than this triggers a warning.
    pub high_latency_threshold_ms: f64,
    /// Quiet time after the last scroll event that ends a gesture.
    pub scroll_debounce_ms: f64,
    /// Period of the development-mode report.
    pub report_interval_ms: f64,
    /// Enables the periodic report and the report trigger.
    pub dev_mode: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            fps_window_ms: 1000.0,
            low_fps_threshold: 30,
            memory_interval_ms: 5000.0,
            high_latency_threshold_ms: 100.0,
            scroll_debounce_ms: 150.0,
            report_interval_ms: 30_000.0,
            dev_mode: false,
        }
    }
}

impl MonitorConfig {
    /// Parses a configuration from a JSON string and validates it.
    pub fn from_json(json: &str) -> MonitorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file and validates it.
    pub fn from_file(path: impl AsRef<Path>) -> MonitorResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> MonitorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the same configuration with development mode switched on or off.
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Checks that every interval is a positive, finite duration.
    pub fn validate(&self) -> MonitorResult<()> {
        let intervals = [
            ("fps_window_ms", self.fps_window_ms),
            ("memory_interval_ms", self.memory_interval_ms),
            ("scroll_debounce_ms", self.scroll_debounce_ms),
            ("report_interval_ms", self.report_interval_ms),
        ];
        for (name, value) in intervals {
            if !value.is_finite() || value <= 0.0 {
                return Err(MonitorError::InvalidConfig(format!(
                    "{name} must be a positive number of milliseconds, got {value}"
                )));
            }
        }
        if !self.high_latency_threshold_ms.is_finite() || self.high_latency_threshold_ms < 0.0 {
            return Err(MonitorError::InvalidConfig(format!(
                "high_latency_threshold_ms must be non-negative, got {}",
                self.high_latency_threshold_ms
            )));
        }
        Ok(())
    }
}
