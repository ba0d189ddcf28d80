//! Default scenario parameters, progress cadence, and exit codes.

use std::time::Duration;

/// Default quadratic coefficient `a` of the benchmark function.
pub const DEFAULT_A: f64 = -1.0;

/// Default linear coefficient `b` of the benchmark function.
pub const DEFAULT_B: f64 = -1.0;

/// Default constant term `c` of the benchmark function.
pub const DEFAULT_C: f64 = 10.0;

/// Default lower integration bound.
pub const DEFAULT_RANGE_BEGIN: f64 = -2.0;

/// Default upper integration bound.
pub const DEFAULT_RANGE_END: f64 = 1.0;

/// Default number of integration steps.
pub const DEFAULT_STEP_COUNT: f64 = 3.0;

/// Repetitions of the shorter benchmark run.
pub const DEFAULT_REPETITIONS_A: u64 = 9_999;

/// Repetitions of the longer benchmark run.
pub const DEFAULT_REPETITIONS_B: u64 = 9_999_999;

/// Default upper bound for the prime-counting workload.
pub const DEFAULT_PRIME_LIMIT: u64 = 2_000_000;

/// Fraction added to the progress bar on every tick of the fixed cadence.
pub const PROGRESS_INCREMENT: f64 = 0.05;

/// Delay between two ticks of the fixed cadence.
pub const PROGRESS_TICK: Duration = Duration::from_millis(50);

/// Progress line width used when the terminal size is unknown.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Tolerance used when checking `count * step == end - begin`.
pub const STEP_TOLERANCE: f64 = 1e-9;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid quadrature configuration or CLI argument.
    pub const ERROR_CONFIG: i32 = 4;
    /// A duration was read before it was measured.
    pub const ERROR_MEASUREMENT: i32 = 5;
}
