//! # StatsTracker
//!
//! Bookkeeping a host keeps around an engine: how long the last generation took,
//! the most recent best costs, and how far the run has come since its first best.
//! It only reads what the engine exposes and never touches the engine itself.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::stats::StatsTracker;
//!
//! let mut stats = StatsTracker::new();
//! stats.start_generation_timer();
//! // ... advance the engine ...
//! stats.stop_generation_timer();
//! stats.track_cost(950);
//!
//! assert_eq!(stats.recent_costs().back(), Some(&950));
//! assert_eq!(StatsTracker::improvement_percentage(Some(1000), 950), 5.0);
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of recent costs kept by default.
pub const MAX_COSTS_TO_TRACK: usize = 20;

#[derive(Debug, Clone)]
pub struct StatsTracker {
    started_at: Option<Instant>,
    last_generation_time: Duration,
    recent_costs: VecDeque<u64>,
    capacity: usize,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::with_capacity(MAX_COSTS_TO_TRACK)
    }

    /// Creates a tracker remembering at most `capacity` recent costs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            started_at: None,
            last_generation_time: Duration::ZERO,
            recent_costs: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn start_generation_timer(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stops the running timer and records the elapsed time.
    ///
    /// Without a running timer the last recorded time is kept.
    pub fn stop_generation_timer(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.last_generation_time = started_at.elapsed();
        }
    }

    pub fn last_generation_time(&self) -> Duration {
        self.last_generation_time
    }

    /// Throughput implied by the last generation, or `0.0` if none was timed.
    pub fn generations_per_second(&self) -> f64 {
        if self.last_generation_time.is_zero() {
            return 0.0;
        }
        1.0 / self.last_generation_time.as_secs_f64()
    }

    /// Remembers `cost`, dropping the oldest entry once the window is full.
    pub fn track_cost(&mut self, cost: u64) {
        if self.capacity == 0 {
            return;
        }
        if self.recent_costs.len() >= self.capacity {
            self.recent_costs.pop_front();
        }
        self.recent_costs.push_back(cost);
    }

    /// Tracked costs, oldest first.
    pub fn recent_costs(&self) -> &VecDeque<u64> {
        &self.recent_costs
    }

    /// Percentage by which `current` undercuts `initial`.
    ///
    /// Returns `0.0` when there is no initial cost yet or it is zero.
    pub fn improvement_percentage(initial: Option<u64>, current: u64) -> f64 {
        match initial {
            Some(initial) if initial != 0 => {
                100.0 * (initial as f64 - current as f64) / initial as f64
            }
            _ => 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.last_generation_time = Duration::ZERO;
        self.recent_costs.clear();
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
