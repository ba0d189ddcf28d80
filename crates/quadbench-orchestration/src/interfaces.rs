//! Orchestration interfaces.

use std::io;

use crate::comparison::Comparison;
use crate::runner::TimedRun;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present one timed run.
    fn present_run(&mut self, run: &TimedRun) -> io::Result<()>;

    /// Present the comparison between two runs.
    fn present_comparison(&mut self, comparison: &Comparison) -> io::Result<()>;

    /// Present an error.
    fn present_error(&mut self, error: &str);
}
