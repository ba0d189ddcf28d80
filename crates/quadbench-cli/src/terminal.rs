//! Terminal sizing for the progress line.

use console::Term;
use tracing::debug;

use quadbench_core::constants::DEFAULT_LINE_WIDTH;

/// Width of the stderr terminal, or [`DEFAULT_LINE_WIDTH`] when it is not a tty.
#[must_use]
pub fn terminal_width() -> usize {
    resolve_width(Term::stderr().size_checked().map(|(_, cols)| usize::from(cols)))
}

/// Pick the progress line width: an explicit request wins, then the terminal.
#[must_use]
pub fn line_width(requested: Option<usize>) -> usize {
    requested.unwrap_or_else(terminal_width)
}

fn resolve_width(detected: Option<usize>) -> usize {
    match detected {
        Some(cols) if cols > 0 => cols,
        _ => {
            debug!(
                detected = ?detected,
                fallback = DEFAULT_LINE_WIDTH,
                "terminal width unavailable"
            );
            DEFAULT_LINE_WIDTH
        }
    }
}
