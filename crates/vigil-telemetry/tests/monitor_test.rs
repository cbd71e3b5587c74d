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

mod common;

use common::{FixedHeap, Harness, SinkLine};
use vigil_core::sample::{FPS_CAPACITY, INTERACTION_CAPACITY, MEMORY_CAPACITY};
use vigil_core::{
    EntryType, InputEvent, InteractionKind, MonitorConfig, MonitorError, PerformanceEntry,
};
use vigil_infra::ChannelTimeline;
use vigil_telemetry::PerformanceMonitor;

#[test]
fn test_sixty_frames_in_one_second_yield_sixty_fps() {
    let harness = Harness::new();
    let mut monitor = harness.launch();

    for i in 1..=60 {
        harness.at(i as f64 * 1000.0 / 60.0);
        monitor.on_frame();
    }

    let metrics = monitor.metrics();
    assert_eq!(metrics.fps.len(), 1);
    assert_eq!(metrics.fps[0].value, 60);
    assert_eq!(metrics.fps[0].timestamp_ms, 1000.0);
    assert_eq!(metrics.summary.avg_fps, 60.0);
    assert!(harness.sink.warnings().is_empty());
}

#[test]
fn test_low_fps_window_warns() {
    let harness = Harness::new();
    let mut monitor = harness.launch();

    for i in 1..=20 {
        harness.at(i as f64 * 50.0);
        monitor.on_frame();
    }

    assert_eq!(monitor.metrics().fps[0].value, 20);
    assert_eq!(harness.sink.warnings(), vec!["Low FPS detected: 20"]);
}

#[test]
fn test_click_latency_is_measured_to_next_paint() {
    let harness = Harness::new();
    let mut monitor = harness.launch();

    harness.at(100.0);
    monitor.on_input(&InputEvent::click("BUTTON"));
    harness.at(137.0);
    monitor.on_frame();

    let metrics = monitor.metrics();
    assert_eq!(metrics.interaction_latency.len(), 1);
    let sample = &metrics.interaction_latency[0];
    assert_eq!(sample.kind, InteractionKind::Click);
    assert_eq!(sample.latency_ms, 37.0);
    assert_eq!(sample.target, "BUTTON");
    assert_eq!(sample.timestamp_ms, 100.0);
    assert_eq!(metrics.summary.avg_interaction_latency_ms, 37.0);
    assert!(harness.sink.warnings().is_empty());
}

#[test]
fn test_slow_interaction_warns() {
    let harness = Harness::new();
    let mut monitor = harness.launch();

    harness.at(10.0);
    monitor.on_input(&InputEvent::click("CANVAS"));
    harness.at(160.0);
    monitor.on_frame();

    assert_eq!(
        harness.sink.warnings(),
        vec!["High interaction latency: 150.00ms for click"]
    );
}

#[test]
fn test_every_input_waiting_for_a_paint_resolves_on_it() {
    let harness = Harness::new();
    let mut monitor = harness.launch();

    harness.at(10.0);
    monitor.on_input(&InputEvent::pointer_move("DIV"));
    harness.at(20.0);
    monitor.on_input(&InputEvent::click("A"));
    harness.at(30.0);
    monitor.on_frame();

    let latencies: Vec<_> = monitor
        .metrics()
        .interaction_latency
        .iter()
        .map(|sample| (sample.kind, sample.latency_ms))
        .collect();
    assert_eq!(
        latencies,
        vec![
            (InteractionKind::PointerMove, 20.0),
            (InteractionKind::Click, 10.0)
        ]
    );
    assert_eq!(monitor.pending_interactions(), 0);
}

#[test]
fn test_scroll_burst_yields_one_gesture() {
    let harness = Harness::new();
    let mut monitor = harness.launch();

    for i in 0..=10 {
        harness.at(100.0 + i as f64 * 20.0);
        monitor.on_input(&InputEvent::scroll("HTML"));
    }

    harness.at(449.0);
    monitor.tick();
    assert!(monitor.metrics().scroll_performance.is_empty());

    harness.at(450.0);
    monitor.tick();
    let scrolls = monitor.metrics().scroll_performance;
    assert_eq!(scrolls.len(), 1);
    assert_eq!(scrolls[0].timestamp_ms, 100.0);
    assert_eq!(scrolls[0].duration_ms, 200.0);
}

#[test]
fn test_empty_monitor_reports_zero_averages() {
    let harness = Harness::new();
    let monitor = harness.launch();

    let summary = monitor.metrics().summary;
    assert_eq!(summary.avg_fps, 0.0);
    assert_eq!(summary.avg_interaction_latency_ms, 0.0);
    assert_eq!(summary.avg_render_time_ms, 0.0);
    assert!(summary.current_memory_usage.is_none());
}

#[test]
fn test_memory_snapshots_follow_the_interval() {
    let harness = Harness::new();
    let host = harness.host().with_heap_probe(FixedHeap::mib(64));
    let mut monitor = PerformanceMonitor::launch(MonitorConfig::default(), host).unwrap();
    assert!(monitor.has_memory_sampler());

    harness.at(4999.0);
    monitor.tick();
    assert!(monitor.metrics().memory_usage.is_empty());

    harness.at(5000.0);
    monitor.tick();
    // A late pump takes one snapshot, not one per missed interval.
    harness.at(12000.0);
    monitor.on_frame();
    harness.at(14999.0);
    monitor.tick();
    harness.at(15000.0);
    monitor.tick();

    let metrics = monitor.metrics();
    let stamps: Vec<f64> = metrics.memory_usage.iter().map(|s| s.timestamp_ms).collect();
    assert_eq!(stamps, vec![5000.0, 12000.0, 15000.0]);
    let current = metrics.summary.current_memory_usage.unwrap();
    assert_eq!(current.used_bytes, 64 * 1024 * 1024);
    assert_eq!(current.timestamp_ms, 15000.0);
}

#[test]
fn test_buffers_are_capped() {
    let harness = Harness::new();
    let host = harness.host().with_heap_probe(FixedHeap::mib(8));
    let mut monitor = PerformanceMonitor::launch(MonitorConfig::default(), host).unwrap();

    for i in 1..=250 {
        let t = i as f64 * 1000.0;
        harness.at(t - 10.0);
        monitor.on_input(&InputEvent::click("A"));
        harness.at(t);
        monitor.on_frame();
    }

    let metrics = monitor.metrics();
    assert_eq!(metrics.fps.len(), FPS_CAPACITY);
    assert_eq!(metrics.fps[0].timestamp_ms, (250 - FPS_CAPACITY + 1) as f64 * 1000.0);
    assert_eq!(metrics.interaction_latency.len(), INTERACTION_CAPACITY);
    assert_eq!(
        metrics.interaction_latency[0].timestamp_ms,
        (250 - INTERACTION_CAPACITY + 1) as f64 * 1000.0 - 10.0
    );
    assert_eq!(metrics.memory_usage.len(), 50);

    for i in 251..=600 {
        harness.at(i as f64 * 1000.0);
        monitor.tick();
    }
    assert_eq!(monitor.metrics().memory_usage.len(), MEMORY_CAPACITY);
}

#[test]
fn test_stop_halts_every_producer() {
    let harness = Harness::new();
    let (timeline, feed) = ChannelTimeline::all();
    let host = harness
        .host()
        .with_heap_probe(FixedHeap::mib(16))
        .with_timeline(timeline);
    let mut monitor = PerformanceMonitor::launch(MonitorConfig::default(), host).unwrap();

    harness.at(10.0);
    monitor.on_input(&InputEvent::click("A"));
    monitor.on_input(&InputEvent::scroll("HTML"));
    monitor.stop();
    assert!(!monitor.is_running());
    harness.sink.clear();

    for i in 1..=120 {
        harness.at(10.0 + i as f64 * 100.0);
        monitor.on_frame();
        monitor.on_input(&InputEvent::click("A"));
        monitor.record_render_time(5.0);
        monitor.tick();
    }
    feed.publish(PerformanceEntry::LargestContentfulPaint {
        start_time_ms: 900.0,
    });
    monitor.tick();

    let metrics = monitor.metrics();
    assert!(metrics.fps.is_empty());
    assert!(metrics.memory_usage.is_empty());
    assert!(metrics.interaction_latency.is_empty());
    assert!(metrics.scroll_performance.is_empty());
    assert!(metrics.render_times.is_empty());
    assert!(harness.sink.lines().is_empty());
}

#[test]
fn test_stop_handle_stops_from_another_thread() {
    let harness = Harness::new();
    let mut monitor = harness.launch();
    let handle = monitor.stop_handle();

    std::thread::spawn(move || handle.stop()).join().unwrap();

    assert!(!monitor.is_running());
    harness.at(1000.0);
    monitor.on_frame();
    assert!(monitor.metrics().fps.is_empty());
}

#[test]
fn test_restart_keeps_samples_and_resumes() {
    let harness = Harness::new();
    let mut monitor = harness.launch();

    harness.at(1000.0);
    monitor.on_frame();
    monitor.stop();
    harness.at(5000.0);
    monitor.start();
    harness.at(6000.0);
    monitor.on_frame();

    let stamps: Vec<f64> = monitor.metrics().fps.iter().map(|s| s.timestamp_ms).collect();
    assert_eq!(stamps, vec![1000.0, 6000.0]);
}

#[test]
fn test_generate_report_matches_metrics() {
    let harness = Harness::new();
    let host = harness.host().with_heap_probe(FixedHeap::mib(32));
    let mut monitor = PerformanceMonitor::launch(MonitorConfig::default(), host).unwrap();

    for i in 1..=60 {
        harness.at(i as f64 * 1000.0 / 60.0);
        monitor.on_frame();
    }
    harness.at(1010.0);
    monitor.on_input(&InputEvent::click("A"));
    harness.at(1030.0);
    monitor.on_frame();
    monitor.record_render_time(4.0);
    harness.at(5000.0);
    monitor.tick();

    let report = monitor.generate_report();
    assert_eq!(report, monitor.metrics());
    assert_eq!(
        harness.sink.lines(),
        vec![
            SinkLine::GroupStart("Performance Report".to_string()),
            SinkLine::Message(log::Level::Info, "Average FPS: 60.00".to_string()),
            SinkLine::Message(
                log::Level::Info,
                "Average Interaction Latency: 20.00ms".to_string()
            ),
            SinkLine::Message(log::Level::Info, "Memory Usage: 32.00MB".to_string()),
            SinkLine::Message(log::Level::Info, "Average Render Time: 4.00ms".to_string()),
            SinkLine::GroupEnd,
        ]
    );
}

#[test]
fn test_vitals_are_logged_not_stored() {
    let harness = Harness::new();
    let (timeline, feed) = ChannelTimeline::all();
    let mut monitor = PerformanceMonitor::launch(
        MonitorConfig::default(),
        harness.host().with_timeline(timeline),
    )
    .unwrap();
    assert_eq!(monitor.vitals_listeners(), EntryType::ALL);

    feed.publish(PerformanceEntry::LargestContentfulPaint {
        start_time_ms: 1200.0,
    });
    feed.publish(PerformanceEntry::LargestContentfulPaint {
        start_time_ms: 2500.0,
    });
    feed.publish(PerformanceEntry::FirstInput {
        start_time_ms: 10.0,
        processing_start_ms: 14.0,
    });
    feed.publish(PerformanceEntry::LayoutShift {
        value: 0.1,
        had_recent_input: false,
    });
    feed.publish(PerformanceEntry::LayoutShift {
        value: 0.2,
        had_recent_input: true,
    });
    feed.publish(PerformanceEntry::LayoutShift {
        value: 0.05,
        had_recent_input: false,
    });
    harness.at(100.0);
    monitor.tick();

    assert_eq!(
        harness.sink.infos(),
        vec!["LCP: 2500.00ms", "FID: 4.00ms", "CLS: 0.1500"]
    );
    let cls = monitor.cumulative_layout_shift().unwrap();
    assert!((cls - 0.15).abs() < 1e-9);

    let metrics = monitor.metrics();
    assert!(metrics.fps.is_empty());
    assert!(metrics.interaction_latency.is_empty());
}

#[test]
fn test_unsupported_timeline_installs_no_listener() {
    let harness = Harness::new();
    let (timeline, feed) = ChannelTimeline::new([EntryType::FirstInput]);
    let mut monitor = PerformanceMonitor::launch(
        MonitorConfig::default(),
        harness.host().with_timeline(timeline),
    )
    .unwrap();
    assert_eq!(monitor.vitals_listeners(), [EntryType::FirstInput]);
    assert_eq!(monitor.cumulative_layout_shift(), None);

    feed.publish(PerformanceEntry::LayoutShift {
        value: 0.4,
        had_recent_input: false,
    });
    monitor.tick();
    assert!(harness.sink.lines().is_empty());
}

#[test]
fn test_invalid_intervals_are_rejected_at_construction() {
    let harness = Harness::new();
    let zero_memory_interval = MonitorConfig {
        memory_interval_ms: 0.0,
        ..MonitorConfig::default()
    };
    let negative_fps_window = MonitorConfig {
        fps_window_ms: -1.0,
        ..MonitorConfig::default()
    };

    let result = PerformanceMonitor::launch(
        zero_memory_interval,
        harness.host().with_heap_probe(FixedHeap::mib(8)),
    );
    assert!(matches!(result, Err(MonitorError::InvalidConfig(_))));

    let result = PerformanceMonitor::new(negative_fps_window, harness.host());
    assert!(matches!(result, Err(MonitorError::InvalidConfig(_))));
}

#[test]
fn test_memory_sampler_takes_one_snapshot_per_interval_under_rapid_ticks() {
    let harness = Harness::new();
    let config = MonitorConfig {
        memory_interval_ms: 1.0,
        ..MonitorConfig::default()
    };
    let host = harness.host().with_heap_probe(FixedHeap::mib(8));
    let mut monitor = PerformanceMonitor::launch(config, host).unwrap();

    for i in 0..20 {
        harness.at(1.0 + i as f64 * 0.04);
        monitor.tick();
    }

    assert_eq!(monitor.metrics().memory_usage.len(), 1);
}
