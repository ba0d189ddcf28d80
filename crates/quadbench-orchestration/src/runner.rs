//! Timed benchmark runs for the quadrature and prime-counting workloads.

use std::hint::black_box;
use std::io::Write;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use quadbench_core::primes::count_primes;
use quadbench_core::{Accumulation, QuadError, QuadratureConfig, Rule};

use crate::stopwatch::{RunOptions, Stopwatch};

/// Result of one timed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedRun {
    /// Caller-chosen label, also drawn on the progress line.
    pub label: String,
    /// Workload description, e.g. `Simpson/partial`.
    pub workload: String,
    pub repetitions: u64,
    /// Value produced by a single invocation of the workload.
    pub value: f64,
    pub duration: Duration,
}

/// Time `repetitions` integrations of `config` with `rule`.
///
/// Returns the stopwatch (for comparisons) together with the run summary.
pub fn time_rule<W: Write>(
    sink: W,
    options: &RunOptions,
    config: &QuadratureConfig,
    rule: Rule,
    accumulation: Accumulation,
    repetitions: u64,
) -> Result<(Stopwatch, TimedRun), QuadError> {
    let value = rule.integrate(config, accumulation);
    debug!(%rule, %accumulation, value, "reference value computed");

    let mut watch = Stopwatch::new();
    watch.run_with_progress_to(
        sink,
        options,
        || {
            black_box(rule.integrate(black_box(config), accumulation));
        },
        repetitions,
    )?;

    let run = TimedRun {
        label: options.label.clone(),
        workload: format!("{rule}/{accumulation}"),
        repetitions,
        value,
        duration: watch.result()?,
    };
    Ok((watch, run))
}

/// Time `repetitions` prime counts below `limit`.
#[allow(clippy::cast_precision_loss)]
pub fn time_primes<W: Write>(
    sink: W,
    options: &RunOptions,
    limit: u64,
    parallel: bool,
    repetitions: u64,
) -> Result<(Stopwatch, TimedRun), QuadError> {
    let mode = if parallel { "parallel" } else { "sequential" };
    let mut watch = Stopwatch::new();
    watch.run_with_progress_to(
        sink,
        options,
        || {
            black_box(count_primes(black_box(limit), parallel));
        },
        repetitions,
    )?;
    let value = count_primes(limit, parallel) as f64;

    let run = TimedRun {
        label: options.label.clone(),
        workload: format!("primes/{mode}"),
        repetitions,
        value,
        duration: watch.result()?,
    };
    Ok((watch, run))
}
