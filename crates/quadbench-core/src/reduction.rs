//! Sum reductions over index ranges.
//!
//! Every running total in the quadrature rules goes through
//! [`Accumulation::sum`], which takes a pure term function and returns the
//! total by value. Workers never see a shared `+=` target: they either fold
//! into private partial sums merged afterwards, or go through an atomic or
//! locked accumulator owned by the reduction itself.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::QuadError;

/// How partial results from parallel workers are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accumulation {
    /// Per-worker partial sums merged in a final reduction.
    #[default]
    PartialSums,
    /// One shared accumulator updated with a compare-and-swap add.
    Atomic,
    /// One shared accumulator behind a mutex.
    Locked,
    /// Serial left-to-right loop on the calling thread.
    Sequential,
}

impl Accumulation {
    /// All strategies, in display order.
    pub const ALL: [Self; 4] = [
        Self::PartialSums,
        Self::Atomic,
        Self::Locked,
        Self::Sequential,
    ];

    /// Short name accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PartialSums => "partial",
            Self::Atomic => "atomic",
            Self::Locked => "locked",
            Self::Sequential => "sequential",
        }
    }

    /// Sum `term(i)` for every `i` in `range`.
    pub fn sum<F>(self, range: RangeInclusive<u64>, term: F) -> f64
    where
        F: Fn(u64) -> f64 + Sync + Send,
    {
        match self {
            Self::PartialSums => range
                .into_par_iter()
                .fold(|| 0.0_f64, |partial, i| partial + term(i))
                .reduce(|| 0.0_f64, |a, b| a + b),
            Self::Atomic => {
                let total = AtomicF64::new(0.0);
                range.into_par_iter().for_each(|i| {
                    total.fetch_add(term(i));
                });
                total.into_inner()
            }
            Self::Locked => {
                let total = Mutex::new(0.0_f64);
                range.into_par_iter().for_each(|i| {
                    let value = term(i);
                    *total.lock() += value;
                });
                total.into_inner()
            }
            Self::Sequential => range.fold(0.0, |acc, i| acc + term(i)),
        }
    }
}

impl fmt::Display for Accumulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Accumulation {
    type Err = QuadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "partial" | "partial-sums" | "partialsums" => Ok(Self::PartialSums),
            "atomic" => Ok(Self::Atomic),
            "locked" | "mutex" => Ok(Self::Locked),
            "sequential" | "serial" => Ok(Self::Sequential),
            other => Err(QuadError::UnknownAccumulation(other.to_string())),
        }
    }
}

/// An `f64` stored as its bit pattern in an `AtomicU64`.
#[derive(Debug, Default)]
pub struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    /// Add `value` and return the previous total.
    pub fn fetch_add(&self, value: f64) -> f64 {
        let mut current = self.bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(current) + value).to_bits();
            match self
                .bits
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(previous) => return f64::from_bits(previous),
                Err(actual) => current = actual,
            }
        }
    }

    #[must_use]
    pub fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    #[must_use]
    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.bits.into_inner())
    }
}
