//! Error type shared by the quadrature engine, stopwatch, and driver.

use std::io;

/// Error type for configuration, measurement, and dispatch failures.
#[derive(Debug, thiserror::Error)]
pub enum QuadError {
    /// The step size was zero, so no step count can be derived.
    #[error("step size must be non-zero")]
    ZeroStep,

    /// The step count was zero, so no step size can be derived.
    #[error("step count must be non-zero")]
    ZeroStepCount,

    /// A configuration value is infinite or NaN.
    #[error("non-finite configuration value: {0}")]
    NonFinite(String),

    /// `stop` was called on a stopwatch that was never started.
    #[error("stopwatch stopped before it was started")]
    StopBeforeStart,

    /// A duration was requested before a start/stop pair completed.
    #[error("no completed measurement")]
    NotMeasured,

    /// A work item panicked during a timed run.
    #[error("a work item panicked during the timed run")]
    WorkerPanicked,

    /// The worker pool could not be built.
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Writing to the progress or report stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An unknown quadrature rule name was requested.
    #[error("unknown rule: {0}")]
    UnknownRule(String),

    /// An unknown accumulation strategy name was requested.
    #[error("unknown accumulation strategy: {0}")]
    UnknownAccumulation(String),
}

impl QuadError {
    /// Whether the error stems from an invalid configuration value.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::ZeroStep
                | Self::ZeroStepCount
                | Self::NonFinite(_)
                | Self::UnknownRule(_)
                | Self::UnknownAccumulation(_)
        )
    }

    /// Whether the error stems from reading or stopping a timer out of order.
    #[must_use]
    pub fn is_measurement(&self) -> bool {
        matches!(self, Self::StopBeforeStart | Self::NotMeasured)
    }
}
