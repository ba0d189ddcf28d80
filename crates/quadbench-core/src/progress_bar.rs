//! Single-line progress bar rendered in place on a byte stream.
//!
//! Layout of one line of `line_width` columns:
//!
//! ```text
//! \r<label ><#####.....> [ 42%]
//!   |-------bar_width-------|--8--|
//! ```
//!
//! The bar owns its sink. Dropping it without calling [`ProgressBar::finish`]
//! still renders the 100% state and the trailing newline.

use std::fmt;
use std::io::{self, Write};

/// Width of the `" [100%] "` annotation.
pub const PERCENT_OVERHEAD: usize = 8;

/// Default glyph for the filled part of the bar.
pub const DEFAULT_FILL: char = '#';

/// Glyph for the empty part of the bar.
pub const EMPTY_GLYPH: char = '.';

/// In-place progress line. Not `Clone`: one bar, one writer.
pub struct ProgressBar<W: Write> {
    sink: Option<W>,
    bar_width: usize,
    label: String,
    fill: char,
}

impl<W: Write> ProgressBar<W> {
    /// Create a bar and render its 0% state.
    ///
    /// A label that contains a line break, or that does not fit in the bar
    /// together with its trailing space, is written on its own line and the
    /// bar is drawn without a label. An empty label writes nothing.
    pub fn new(mut sink: W, line_width: usize, label: &str, fill: Option<char>) -> io::Result<Self> {
        let bar_width = line_width.saturating_sub(PERCENT_OVERHEAD);
        let label_len = label.chars().count();
        let label = if label.is_empty() {
            String::new()
        } else if label.contains(['\n', '\r']) || label_len + 1 > bar_width {
            writeln!(sink, "{label}")?;
            String::new()
        } else {
            format!("{label} ")
        };

        let mut bar = Self {
            sink: Some(sink),
            bar_width,
            label,
            fill: fill.unwrap_or(DEFAULT_FILL),
        };
        if let Err(e) = bar.render(0.0) {
            // Nothing to finalize on a sink that rejected the first frame.
            bar.sink = None;
            return Err(e);
        }
        Ok(bar)
    }

    /// Width available to the label and the bar.
    #[must_use]
    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// The label as drawn, including its trailing space, or empty.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Redraw the line for `fraction`, clamped to `[0, 1]`.
    pub fn render(&mut self, fraction: f64) -> io::Result<()> {
        let fraction = clamp_fraction(fraction);
        let cells = self.bar_width.saturating_sub(self.label.chars().count());
        let filled = filled_cells(cells, fraction);
        let percent = percent(fraction);

        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let line = format!(
            "\r{}{}{} [{percent:>3}%] ",
            self.label,
            self.fill.to_string().repeat(filled),
            EMPTY_GLYPH.to_string().repeat(cells - filled),
        );
        sink.write_all(line.as_bytes())?;
        sink.flush()
    }

    /// Render 100%, end the line, and hand back the sink.
    ///
    /// On error the sink is dropped without a second finalization attempt.
    pub fn finish(mut self) -> io::Result<W> {
        let finalized = self.finalize();
        let sink = self.sink.take();
        finalized?;
        sink.ok_or_else(|| io::Error::other("progress bar already finished"))
    }

    fn finalize(&mut self) -> io::Result<()> {
        if self.sink.is_none() {
            return Ok(());
        }
        self.render(1.0)?;
        if let Some(sink) = self.sink.as_mut() {
            sink.write_all(b"\n")?;
            sink.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for ProgressBar<W> {
    fn drop(&mut self) {
        if let Err(e) = self.finalize() {
            tracing::warn!(error = %e, "failed to finalize progress bar");
        }
    }
}

impl<W: Write> fmt::Debug for ProgressBar<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("bar_width", &self.bar_width)
            .field("label", &self.label)
            .field("fill", &self.fill)
            .field("finished", &self.sink.is_none())
            .finish()
    }
}

fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

// Absorbs representation error so that e.g. 0.29 * 100 floors to 29, not 28.
const FLOOR_SLACK: f64 = 1e-9;

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn filled_cells(cells: usize, fraction: f64) -> usize {
    ((cells as f64 * fraction + FLOOR_SLACK).floor() as usize).min(cells)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(fraction: f64) -> u32 {
    ((fraction * 100.0 + FLOOR_SLACK).floor() as u32).min(100)
}
