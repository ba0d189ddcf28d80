//! # quadbench-orchestration
//!
//! Timed parallel dispatch, rule selection, and run comparison.

pub mod comparison;
pub mod interfaces;
pub mod runner;
pub mod selection;
pub mod stopwatch;

pub use comparison::{Comparison, Verdict};
pub use interfaces::ResultPresenter;
pub use runner::{time_primes, time_rule, TimedRun};
pub use selection::get_rules_to_run;
pub use stopwatch::{ProgressMode, RunOptions, Stopwatch};
