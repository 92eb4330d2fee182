//! Search limits and cooperative time control.
//!
//! Engines stop at whichever limit trips first: the depth ceiling or the
//! move-time clock. The clock is checked at node boundaries, not on every
//! node, so overrun past the budget stays small and bounded.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Limits controlling when an engine should stop searching.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum time allowed for this move (None = no clock)
    pub move_time: Option<Duration>,
    /// Time controller for checking if search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Limits with only a depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Limits with only a time constraint (depth unbounded).
    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: u8::MAX,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Start the clock. Call when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(5)
    }
}

/// Thread-safe stop signal with a lazily started clock.
///
/// Cheap to clone and share; `is_stopped()` is a relaxed atomic load so it
/// can run on the hot path.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<std::sync::RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
    /// How often to consult the clock, in nodes.
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(std::sync::RwLock::new(None)),
            time_limit,
            check_interval: 1024,
        }
    }

    /// Start (or restart) the clock.
    pub fn start(&self) {
        *self.start_time.write().unwrap() = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Consult the clock and latch the stop flag if the budget is spent.
    /// Call every `check_interval` nodes, not on every node.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && let Some(start) = *self.start_time.read().unwrap()
            && start.elapsed() >= limit
        {
            self.stop();
            return true;
        }

        false
    }

    /// True every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(self.check_interval)
    }

    /// Elapsed time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .unwrap()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
