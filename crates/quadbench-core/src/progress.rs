//! Progress cadence and completion tracking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::constants::{PROGRESS_INCREMENT, PROGRESS_TICK};

/// Fixed-cadence animation: fractions `0, inc, 2·inc, …, 1` separated by `tick`.
///
/// The schedule knows nothing about the work it accompanies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSchedule {
    increment: f64,
    tick: Duration,
}

impl ProgressSchedule {
    /// Create a schedule. Increments outside `(0, 1]` are clamped into it.
    #[must_use]
    pub fn new(increment: f64, tick: Duration) -> Self {
        let increment = if increment.is_finite() && increment > 0.0 {
            increment.min(1.0)
        } else {
            1.0
        };
        Self { increment, tick }
    }

    #[must_use]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    #[must_use]
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Number of ticks needed to reach 100%.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn ticks(&self) -> u32 {
        (1.0 / self.increment - 1e-9).ceil().max(1.0) as u32
    }

    /// The fractions rendered by this schedule, ending at exactly 1.0.
    pub fn fractions(&self) -> impl Iterator<Item = f64> {
        let increment = self.increment;
        let ticks = self.ticks();
        (0..=ticks).map(move |i| (f64::from(i) * increment).min(1.0))
    }

    /// Total time the animation takes.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.tick * self.ticks()
    }
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        Self::new(PROGRESS_INCREMENT, PROGRESS_TICK)
    }
}

/// Shared count of finished work items.
///
/// Cheap to clone; all clones observe the same counter.
#[derive(Debug, Clone)]
pub struct CompletionCounter {
    done: Arc<AtomicU64>,
    total: u64,
}

impl CompletionCounter {
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self {
            done: Arc::new(AtomicU64::new(0)),
            total,
        }
    }

    /// Record one finished item.
    pub fn complete_one(&self) {
        self.done.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn completed(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Completed share in `[0, 1]`; an empty workload counts as finished.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.completed() as f64 / self.total as f64).min(1.0)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.completed() >= self.total
    }
}
