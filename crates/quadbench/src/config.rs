//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use quadbench_core::constants::{
    DEFAULT_A, DEFAULT_B, DEFAULT_C, DEFAULT_PRIME_LIMIT, DEFAULT_RANGE_BEGIN, DEFAULT_RANGE_END,
    DEFAULT_REPETITIONS_A, DEFAULT_REPETITIONS_B, DEFAULT_STEP_COUNT, PROGRESS_INCREMENT,
};
use quadbench_core::{Accumulation, ProgressSchedule, QuadError, QuadratureConfig};
use quadbench_orchestration::{ProgressMode, RunOptions};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Workload {
    /// Integrate the quadratic with each selected rule, twice, and compare.
    Integral,
    /// Count primes without and with parallelism, and compare.
    Primes,
}

/// What the progress bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Progress {
    /// Fixed-cadence animation.
    Fixed,
    /// Share of finished repetitions.
    Completion,
}

impl From<Progress> for ProgressMode {
    fn from(progress: Progress) -> Self {
        match progress {
            Progress::Fixed => Self::Fixed,
            Progress::Completion => Self::Completion,
        }
    }
}

/// quadbench: time parallel quadrature rules and compare the runs.
#[derive(Parser, Debug)]
#[command(name = "quadbench", version, about, allow_negative_numbers = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Quadratic coefficient of f(x) = a·x² + b·x + c.
    #[arg(long, default_value_t = DEFAULT_A, env = "QUADBENCH_A")]
    pub a: f64,

    /// Linear coefficient.
    #[arg(long, default_value_t = DEFAULT_B, env = "QUADBENCH_B")]
    pub b: f64,

    /// Constant term.
    #[arg(long, default_value_t = DEFAULT_C, env = "QUADBENCH_C")]
    pub c: f64,

    /// Lower integration bound.
    #[arg(long, default_value_t = DEFAULT_RANGE_BEGIN, env = "QUADBENCH_BEGIN")]
    pub begin: f64,

    /// Upper integration bound.
    #[arg(long, default_value_t = DEFAULT_RANGE_END, env = "QUADBENCH_END")]
    pub end: f64,

    /// Number of integration steps.
    #[arg(long, default_value_t = DEFAULT_STEP_COUNT, env = "QUADBENCH_STEPS")]
    pub steps: f64,

    /// Step size; overrides --steps.
    #[arg(long, conflicts_with = "steps")]
    pub step: Option<f64>,

    /// Rule to time: midpoint, trapezoidal, simpson, or all.
    #[arg(long, default_value = "midpoint", env = "QUADBENCH_RULE")]
    pub rule: String,

    /// How parallel partial results are combined: partial, atomic, locked, sequential.
    #[arg(long, default_value_t = Accumulation::PartialSums, env = "QUADBENCH_ACCUMULATION")]
    pub accumulation: Accumulation,

    /// Repetitions of the first run.
    #[arg(long, default_value_t = DEFAULT_REPETITIONS_A, env = "QUADBENCH_REPS_A")]
    pub reps_a: u64,

    /// Repetitions of the second run.
    #[arg(long, default_value_t = DEFAULT_REPETITIONS_B, env = "QUADBENCH_REPS_B")]
    pub reps_b: u64,

    /// Worker threads (default: all cores).
    #[arg(short = 'j', long, env = "QUADBENCH_THREADS")]
    pub threads: Option<usize>,

    /// Progress display.
    #[arg(long, value_enum, default_value = "fixed")]
    pub progress: Progress,

    /// Milliseconds between two progress frames.
    #[arg(long, default_value = "50", env = "QUADBENCH_TICK_MS")]
    pub tick_ms: u64,

    /// Progress line width (default: terminal width).
    #[arg(long)]
    pub width: Option<usize>,

    /// Benchmark scenario.
    #[arg(long, value_enum, default_value = "integral")]
    pub workload: Workload,

    /// Upper bound for the primes workload.
    #[arg(long, default_value_t = DEFAULT_PRIME_LIMIT, env = "QUADBENCH_PRIME_LIMIT")]
    pub prime_limit: u64,

    /// Repetitions of each primes run.
    #[arg(long, default_value = "1")]
    pub prime_reps: u64,

    /// Print one JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (durations and verdicts only, no progress bar).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build the integration settings from the flags.
    pub fn quadrature_config(&self) -> Result<QuadratureConfig, QuadError> {
        let builder = QuadratureConfig::builder()
            .function(self.a, self.b, self.c)
            .range(self.begin, self.end);
        match self.step {
            Some(step) => builder.step(step),
            None => builder.step_count(self.steps),
        }
        .build()
    }

    /// Run options for one labelled run.
    #[must_use]
    pub fn run_options(&self, label: &str, line_width: usize) -> RunOptions {
        RunOptions {
            line_width,
            schedule: ProgressSchedule::new(PROGRESS_INCREMENT, Duration::from_millis(self.tick_ms)),
            threads: self.threads,
            mode: self.progress.into(),
            ..RunOptions::default().with_label(label)
        }
    }
}
