//! Unit tests for perf module.

use reorderboard::perf::{PerfMonitor, ScopedTimer};

#[test]
fn test_perf_monitor_basic() {
    let mut monitor = PerfMonitor::new();

    monitor.begin_event();
    let time = monitor.end_event("pointer_move");

    assert!(time.is_some());
    assert!(time.unwrap() >= 0.0);
    assert_eq!(monitor.total_events(), 1);
}

#[test]
fn test_end_without_begin() {
    let mut monitor = PerfMonitor::new();
    assert!(monitor.end_event("pointer_move").is_none());
    assert_eq!(monitor.total_events(), 0);
    assert_eq!(monitor.slow_event_percentage(), 0.0);
}

#[test]
fn test_events_grouped_by_name() {
    let mut monitor = PerfMonitor::new();
    for name in ["pointer_down", "pointer_move", "pointer_move", "pointer_up"] {
        monitor.begin_event();
        monitor.end_event(name);
    }

    assert_eq!(monitor.total_events(), 4);
    assert_eq!(monitor.get_operation_stats("pointer_move").unwrap().count(), 2);
    assert_eq!(monitor.get_operation_stats("pointer_down").unwrap().count(), 1);
    assert!(monitor.get_operation_stats("pointer_leave").is_none());
}

#[test]
fn test_operation_stats_recording() {
    let mut monitor = PerfMonitor::new();

    monitor.record_operation("relocate", 5.0);
    monitor.record_operation("relocate", 10.0);
    monitor.record_operation("relocate", 15.0);

    let stats = monitor.get_operation_stats("relocate").unwrap();
    assert!((stats.average() - 10.0).abs() < 0.001);
    assert_eq!(stats.min(), 5.0);
    assert_eq!(stats.max(), 15.0);
}

#[test]
fn test_reset_clears_everything() {
    let mut monitor = PerfMonitor::new();
    monitor.begin_event();
    monitor.end_event("pointer_down");
    monitor.record_operation("relocate", 1.0);

    monitor.reset();

    assert_eq!(monitor.total_events(), 0);
    assert!(monitor.get_operation_stats("relocate").is_none());
}

#[test]
fn test_log_summary_with_and_without_data() {
    let mut monitor = PerfMonitor::new();
    monitor.log_summary();

    for name in ["pointer_down", "pointer_move", "pointer_up"] {
        monitor.begin_event();
        monitor.end_event(name);
    }
    monitor.log_summary();
    assert_eq!(monitor.total_events(), 3);
}

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping must not warn
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}
