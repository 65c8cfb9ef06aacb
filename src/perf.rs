//! Performance monitoring utilities.
//!
//! Pointer moves arrive at display rate and each one may reflow the document
//! and query the spatial index, so event handling time is tracked per event
//! kind.
//!
//! ## Usage
//!
//! Enable scope timing with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! reorderboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn reflow() {
//!     profile_scope!("reflow");
//!     // ... work ...
//! }
//! ```

use crate::constants::EVENT_BUDGET_MS;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::{debug, warn};
#[cfg(feature = "profiling")]
use tracing::trace;

/// Number of samples to keep for operation statistics
const STATS_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

// ============================================================================
// Event Performance Monitor
// ============================================================================

/// Per-event-kind timing statistics.
pub struct PerfMonitor {
    /// When the current event started
    event_start: Option<Instant>,
    /// Events that exceeded the budget
    slow_event_count: u64,
    /// Total events tracked
    total_events: u64,
    operation_stats: HashMap<&'static str, OperationStats>,
}

/// Statistics for a specific operation type.
#[derive(Debug, Clone)]
pub struct OperationStats {
    /// Recent timing samples in milliseconds
    samples: VecDeque<f64>,
    /// Total invocation count
    count: u64,
    /// Minimum observed time
    min_ms: f64,
    /// Maximum observed time
    max_ms: f64,
    /// Running sum of the retained samples
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            min_ms: f64::MAX,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    /// Record a new timing sample.
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.min_ms = self.min_ms.min(ms);
        self.max_ms = self.max_ms.max(ms);
    }

    /// Average over the retained samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// 95th percentile over the retained samples.
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted.get(idx.min(sorted.len() - 1)).copied().unwrap_or(0.0)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.min_ms }
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }
}

impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self {
            event_start: None,
            slow_event_count: 0,
            total_events: 0,
            operation_stats: HashMap::new(),
        }
    }

    /// Mark the start of event handling.
    pub fn begin_event(&mut self) {
        self.event_start = Some(Instant::now());
    }

    /// Mark the end of event handling and record it under `name`.
    /// Returns the handling time in milliseconds.
    pub fn end_event(&mut self, name: &'static str) -> Option<f64> {
        let start = self.event_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        self.total_events += 1;
        self.record_operation(name, ms);

        if ms > EVENT_BUDGET_MS {
            self.slow_event_count += 1;
            warn!(
                event = name,
                elapsed_ms = format!("{:.2}", ms),
                budget_ms = format!("{:.2}", EVENT_BUDGET_MS),
                "Slow pointer event"
            );
        }
        Some(ms)
    }

    /// Record an operation timing.
    pub fn record_operation(&mut self, name: &'static str, elapsed_ms: f64) {
        self.operation_stats.entry(name).or_default().record(elapsed_ms);
    }

    pub fn get_operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.operation_stats.get(name)
    }

    pub fn total_events(&self) -> u64 {
        self.total_events
    }

    /// Percentage of events that exceeded the budget.
    pub fn slow_event_percentage(&self) -> f64 {
        if self.total_events == 0 {
            return 0.0;
        }
        (self.slow_event_count as f64 / self.total_events as f64) * 100.0
    }

    /// Log the slowest operations.
    pub fn log_summary(&self) {
        let mut ops: Vec<_> = self.operation_stats.iter().collect();
        ops.sort_by(|a, b| {
            b.1.average()
                .partial_cmp(&a.1.average())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            total = self.total_events,
            slow_percentage = format!("{:.1}%", self.slow_event_percentage()),
            "Pointer event timings"
        );
        for (name, stats) in ops.iter().take(5) {
            debug!(
                "  {}: avg={:.3}ms, p95={:.3}ms, max={:.3}ms, count={}",
                name,
                stats.average(),
                stats.p95(),
                stats.max(),
                stats.count()
            );
        }
    }

    pub fn reset(&mut self) {
        self.event_start = None;
        self.slow_event_count = 0;
        self.total_events = 0;
        self.operation_stats.clear();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs its duration on drop when over the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with a low threshold, used by `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 0.25)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}
