//! The quadratic test function integrated by every rule.

use serde::{Deserialize, Serialize};

/// `f(x) = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// A constant function `f(x) = c`.
    #[must_use]
    pub const fn constant(c: f64) -> Self {
        Self::new(0.0, 0.0, c)
    }

    /// Evaluate the function at `x`.
    #[inline]
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.a * (x * x) + self.b * x + self.c
    }

    /// Whether all coefficients are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}
