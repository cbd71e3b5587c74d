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

// Vigil Sandbox
// Drives the performance monitor from a simulated frame loop.

mod scenario;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use vigil_core::MonitorConfig;
use vigil_infra::{ChannelTimeline, SysinfoHeapProbe, SystemClock};
use vigil_telemetry::{HostCapabilities, MonitorService};

use crate::scenario::Scenario;

const DEV_ENV_VAR: &str = "VIGIL_ENV";

#[derive(Parser, Debug)]
#[command(name = "sandbox")]
#[command(about = "Runs a simulated frame loop under the vigil performance monitor")]
struct Args {
    /// Enable development mode (periodic reports).
    #[arg(long)]
    dev: bool,

    /// How long to run.
    #[arg(short, long, default_value_t = 5)]
    seconds: u64,

    /// Target frame rate of the simulated loop.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// JSON file with monitor settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final snapshot as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<MonitorConfig> {
    let config = match &args.config {
        Some(path) => MonitorConfig::from_file(path)
            .with_context(|| format!("failed to load monitor config from {}", path.display()))?,
        None => MonitorConfig::default(),
    };
    let dev_from_env = std::env::var(DEV_ENV_VAR).is_ok_and(|value| value == "development");
    let dev_mode = config.dev_mode || args.dev || dev_from_env;
    Ok(config.with_dev_mode(dev_mode))
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let scenario = Scenario::new(args.fps);

    let (timeline, feed) = ChannelTimeline::all();
    let mut host = HostCapabilities::new(Arc::new(SystemClock::new())).with_timeline(timeline);
    match SysinfoHeapProbe::new() {
        Some(probe) => host = host.with_heap_probe(probe),
        None => log::warn!("Process memory is not observable here; running without memory samples."),
    }

    let mut service = MonitorService::launch(config, host)?;
    let total_frames = args.seconds * u64::from(args.fps);
    log::info!(
        "Simulating {} frames at {} FPS (dev mode: {}).",
        total_frames,
        args.fps,
        service.is_dev_mode()
    );

    for frame in 0..total_frames {
        let frame_start = Instant::now();

        for event in scenario.inputs(frame) {
            service.on_input(&event);
        }
        {
            let _timer = service.monitor_mut().time_render();
            std::thread::sleep(scenario.render_cost(frame));
        }
        let now_ms = service.monitor().now_ms();
        for entry in scenario.timeline_entries(frame, now_ms) {
            feed.publish(entry);
        }
        if service.on_frame().is_some() {
            log::debug!("Periodic report emitted at frame {frame}.");
        }

        let remaining = scenario
            .frame_budget()
            .checked_sub(frame_start.elapsed())
            .unwrap_or(Duration::ZERO);
        std::thread::sleep(remaining);
    }

    let report = service.generate_report();
    if let Some(cls) = service.monitor().cumulative_layout_shift() {
        log::info!("Final CLS: {cls:.4}");
    }
    service.shutdown();

    if args.json {
        println!("{}", report.to_json()?);
    }
    Ok(())
}
