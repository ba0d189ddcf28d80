//! Quadrature rules over a [`QuadratureConfig`].
//!
//! All rules take the configuration by shared reference and route their
//! running totals through [`Accumulation::sum`], so any number of rules may
//! run concurrently over the same configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::QuadratureConfig;
use crate::error::QuadError;
use crate::reduction::Accumulation;

/// Offset rectangle rule: `Σ_{i=1..n} f(begin + i·step) · step`.
///
/// Samples the right edge of each strip, not its midpoint.
pub fn integrate_midpoint(config: &QuadratureConfig, accumulation: Accumulation) -> f64 {
    let step = config.step();
    accumulation.sum(1..=config.whole_steps(), |i| config.eval(config.node(i)) * step)
}

/// Trapezoidal rule: `(Σ_{i=1..n-1} f(x_i) + (f(begin) + f(end)) / 2) · step`.
pub fn integrate_trapezoidal(config: &QuadratureConfig, accumulation: Accumulation) -> f64 {
    let interior = interior_sum(config, accumulation);
    let edges = (config.eval(config.begin()) + config.eval(config.end())) / 2.0;
    (interior + edges) * config.step()
}

/// Simpson's rule, truncated with `floor`.
///
/// `floor(step/6 · (f(begin) + f(end) + 2·interior + 4·midpoints))` where the
/// midpoints are `x_i - step/2` for `i = 1..n`.
pub fn integrate_simpson(config: &QuadratureConfig, accumulation: Accumulation) -> f64 {
    let step = config.step();
    let half = step / 2.0;
    let midpoints = accumulation.sum(1..=config.whole_steps(), |i| {
        config.eval(config.node(i) - half)
    });
    let interior = interior_sum(config, accumulation);
    let edges = config.eval(config.begin()) + config.eval(config.end());
    (step / 6.0 * (edges + 2.0 * interior + 4.0 * midpoints)).floor()
}

// Σ f(x_i) over the interior nodes i = 1..n-1.
fn interior_sum(config: &QuadratureConfig, accumulation: Accumulation) -> f64 {
    accumulation.sum(1..=config.whole_steps().saturating_sub(1), |i| {
        config.eval(config.node(i))
    })
}

/// The available quadrature rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    Midpoint,
    Trapezoidal,
    Simpson,
}

impl Rule {
    /// All rules, in display order.
    pub const ALL: [Self; 3] = [Self::Midpoint, Self::Trapezoidal, Self::Simpson];

    /// Apply this rule to `config`.
    pub fn integrate(self, config: &QuadratureConfig, accumulation: Accumulation) -> f64 {
        match self {
            Self::Midpoint => integrate_midpoint(config, accumulation),
            Self::Trapezoidal => integrate_trapezoidal(config, accumulation),
            Self::Simpson => integrate_simpson(config, accumulation),
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Midpoint => "Midpoint",
            Self::Trapezoidal => "Trapezoidal",
            Self::Simpson => "Simpson",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = QuadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "midpoint" | "rectangle" | "quadratic" => Ok(Self::Midpoint),
            "trapezoidal" | "trapezoid" => Ok(Self::Trapezoidal),
            "simpson" => Ok(Self::Simpson),
            other => Err(QuadError::UnknownRule(other.to_string())),
        }
    }
}
