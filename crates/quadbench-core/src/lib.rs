//! # quadbench-core
//!
//! Quadrature engine for the quadbench harness: a quadratic test function,
//! an immutable integration configuration, three quadrature rules, and the
//! sum reductions that let those rules run on many workers without a shared
//! mutable accumulator. Also hosts the prime-counting workload, the
//! progress cadence, and the in-place terminal progress bar.

pub mod config;
pub mod constants;
pub mod error;
pub mod function;
pub mod primes;
pub mod progress;
pub mod progress_bar;
pub mod reduction;
pub mod rules;

// Re-exports
pub use config::{QuadratureConfig, QuadratureConfigBuilder};
pub use constants::exit_codes;
pub use error::QuadError;
pub use function::Quadratic;
pub use progress::{CompletionCounter, ProgressSchedule};
pub use progress_bar::ProgressBar;
pub use reduction::Accumulation;
pub use rules::{integrate_midpoint, integrate_simpson, integrate_trapezoidal, Rule};

/// Integrate `config` with `rule` using per-worker partial sums.
///
/// # Example
/// ```
/// use quadbench_core::{integrate, QuadratureConfig, Rule};
///
/// let config = QuadratureConfig::default_scenario();
/// assert_eq!(integrate(&config, Rule::Midpoint), 28.0);
/// assert_eq!(integrate(&config, Rule::Simpson), 28.0);
/// ```
#[must_use]
pub fn integrate(config: &QuadratureConfig, rule: Rule) -> f64 {
    rule.integrate(config, Accumulation::default())
}
