//! Quadrature configuration and its builder.
//!
//! A [`QuadratureConfig`] is immutable once built, so integration rules can
//! share it across workers without synchronization. The builder keeps the
//! step size and the step count reconciled: whichever was set last wins and
//! the other is derived from the range when [`QuadratureConfigBuilder::build`]
//! runs, so `step_count * step == end - begin` always holds.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_A, DEFAULT_B, DEFAULT_C, DEFAULT_RANGE_BEGIN, DEFAULT_RANGE_END, DEFAULT_STEP_COUNT,
};
use crate::error::QuadError;
use crate::function::Quadratic;

/// Validated integration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigRepr")]
pub struct QuadratureConfig {
    function: Quadratic,
    begin: f64,
    end: f64,
    step: f64,
    step_count: f64,
}

impl QuadratureConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> QuadratureConfigBuilder {
        QuadratureConfigBuilder::new()
    }

    /// The benchmark scenario: `f(x) = -x² - x + 10` over `[-2, 1]` in 3 steps.
    #[must_use]
    pub fn default_scenario() -> Self {
        let range = DEFAULT_RANGE_END - DEFAULT_RANGE_BEGIN;
        Self {
            function: Quadratic::new(DEFAULT_A, DEFAULT_B, DEFAULT_C),
            begin: DEFAULT_RANGE_BEGIN,
            end: DEFAULT_RANGE_END,
            step: range / DEFAULT_STEP_COUNT,
            step_count: DEFAULT_STEP_COUNT,
        }
    }

    #[must_use]
    pub fn function(&self) -> Quadratic {
        self.function
    }

    #[must_use]
    pub fn begin(&self) -> f64 {
        self.begin
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Step count, possibly fractional when derived from a step size.
    #[must_use]
    pub fn step_count(&self) -> f64 {
        self.step_count
    }

    /// Number of whole steps the rules iterate over (`floor(step_count)`, at least 0).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn whole_steps(&self) -> u64 {
        if self.step_count > 0.0 {
            self.step_count.floor() as u64
        } else {
            0
        }
    }

    /// Sample point `x_i = begin + i·step`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn node(&self, i: u64) -> f64 {
        self.begin + i as f64 * self.step
    }

    /// Evaluate the configured function.
    #[inline]
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.function.eval(x)
    }
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self::default_scenario()
    }
}

/// Which of the two spacing parameters was set last.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Spacing {
    Step(f64),
    Count(f64),
}

/// Chained setter for [`QuadratureConfig`].
#[derive(Debug, Clone)]
pub struct QuadratureConfigBuilder {
    function: Quadratic,
    begin: f64,
    end: f64,
    spacing: Spacing,
}

impl QuadratureConfigBuilder {
    /// Zero function over `[0, 1]` in a single step.
    #[must_use]
    pub fn new() -> Self {
        Self {
            function: Quadratic::default(),
            begin: 0.0,
            end: 1.0,
            spacing: Spacing::Count(1.0),
        }
    }

    /// Set the coefficients of `a·x² + b·x + c`.
    #[must_use]
    pub fn function(mut self, a: f64, b: f64, c: f64) -> Self {
        self.function = Quadratic::new(a, b, c);
        self
    }

    /// Set the integration bounds. `begin > end` yields a signed result.
    #[must_use]
    pub fn range(mut self, begin: f64, end: f64) -> Self {
        self.begin = begin;
        self.end = end;
        self
    }

    /// Set the step size; the step count is derived from the range.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.spacing = Spacing::Step(step);
        self
    }

    /// Set the step count; the step size is derived from the range.
    #[must_use]
    pub fn step_count(mut self, count: f64) -> Self {
        self.spacing = Spacing::Count(count);
        self
    }

    /// Reconcile step size and count and validate every value.
    pub fn build(self) -> Result<QuadratureConfig, QuadError> {
        if !self.function.is_finite() {
            return Err(QuadError::NonFinite("function coefficients".into()));
        }
        if !self.begin.is_finite() || !self.end.is_finite() {
            return Err(QuadError::NonFinite("range bounds".into()));
        }

        let width = self.end - self.begin;
        let (step, step_count) = match self.spacing {
            Spacing::Step(step) => {
                if !step.is_finite() {
                    return Err(QuadError::NonFinite("step".into()));
                }
                if step == 0.0 {
                    return Err(QuadError::ZeroStep);
                }
                (step, width / step)
            }
            Spacing::Count(count) => {
                if !count.is_finite() {
                    return Err(QuadError::NonFinite("step count".into()));
                }
                if count == 0.0 {
                    return Err(QuadError::ZeroStepCount);
                }
                (width / count, count)
            }
        };

        if !step.is_finite() || !step_count.is_finite() {
            return Err(QuadError::NonFinite("derived spacing".into()));
        }

        tracing::debug!(
            begin = self.begin,
            end = self.end,
            step,
            step_count,
            "quadrature configuration built"
        );

        Ok(QuadratureConfig {
            function: self.function,
            begin: self.begin,
            end: self.end,
            step,
            step_count,
        })
    }
}

impl Default for QuadratureConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form; either spacing field may be given, `step_count` wins.
#[derive(Deserialize)]
struct ConfigRepr {
    function: Quadratic,
    begin: f64,
    end: f64,
    #[serde(default)]
    step: Option<f64>,
    #[serde(default)]
    step_count: Option<f64>,
}

impl TryFrom<ConfigRepr> for QuadratureConfig {
    type Error = QuadError;

    fn try_from(repr: ConfigRepr) -> Result<Self, Self::Error> {
        let builder = QuadratureConfig::builder()
            .function(repr.function.a, repr.function.b, repr.function.c)
            .range(repr.begin, repr.end);
        let builder = match (repr.step_count, repr.step) {
            (Some(count), _) => builder.step_count(count),
            (None, Some(step)) => builder.step(step),
            (None, None) => return Err(QuadError::ZeroStepCount),
        };
        builder.build()
    }
}
