//! Timing collection for repeated solver invocations.

use std::time::{Duration, Instant};

/// Aggregated wall-clock timing across solver calls.
///
/// The solver itself emits nothing; callers that want visibility wrap their
/// invocations with [`SolverTimings::time`] and print a summary once the run
/// is over.
#[derive(Debug, Clone, Default)]
pub struct SolverTimings {
    total_duration: Duration,
    call_count: u64,
    min_duration: Duration,
    max_duration: Duration,
}

impl SolverTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call's duration.
    pub fn record(&mut self, duration: Duration) {
        self.total_duration += duration;
        self.call_count += 1;
        if duration < self.min_duration || self.min_duration == Duration::ZERO {
            self.min_duration = duration;
        }
        if duration > self.max_duration {
            self.max_duration = duration;
        }
    }

    /// Time a closure and record its duration.
    pub fn time<T>(&mut self, body: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = body();
        self.record(start.elapsed());
        result
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Average call duration.
    pub fn avg_duration(&self) -> Duration {
        if self.call_count == 0 {
            Duration::ZERO
        } else {
            let avg_nanos = self.total_duration.as_nanos() / self.call_count as u128;
            Duration::from_nanos(avg_nanos as u64)
        }
    }

    /// Print summary statistics.
    pub fn print_summary(&self, label: &str) {
        println!(
            "{:24} | calls: {:6} | total: {:8.2}ms | avg: {:8.2}μs | min: {:8.2}μs | max: {:8.2}μs",
            label,
            self.call_count,
            self.total_duration.as_secs_f64() * 1000.0,
            self.avg_duration().as_secs_f64() * 1_000_000.0,
            self.min_duration.as_secs_f64() * 1_000_000.0,
            self.max_duration.as_secs_f64() * 1_000_000.0,
        );
    }
}
