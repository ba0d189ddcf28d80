//! Human-readable and JSON result presenters.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use quadbench_core::QuadratureConfig;
use quadbench_orchestration::interfaces::ResultPresenter;
use quadbench_orchestration::{Comparison, TimedRun};

use crate::output::{format_duration, format_number, format_report};
use crate::ui;

/// Line-oriented presenter.
pub struct CliResultPresenter<W: Write> {
    out: W,
    verbose: bool,
    quiet: bool,
    color: bool,
}

impl<W: Write> CliResultPresenter<W> {
    #[must_use]
    pub fn new(out: W, verbose: bool, quiet: bool) -> Self {
        Self {
            out,
            verbose,
            quiet,
            color: !ui::is_color_disabled(),
        }
    }

    /// Force colors on or off.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl CliResultPresenter<io::Stdout> {
    /// Presenter on stdout.
    #[must_use]
    pub fn stdout(verbose: bool, quiet: bool) -> Self {
        Self::new(io::stdout(), verbose, quiet)
    }
}

impl<W: Write> ResultPresenter for CliResultPresenter<W> {
    fn present_run(&mut self, run: &TimedRun) -> io::Result<()> {
        if self.quiet {
            return writeln!(self.out, "{}", format_report(run.duration));
        }

        writeln!(self.out, "{}", ui::header(&run.label, self.color))?;
        writeln!(self.out, "Workload: {}", run.workload)?;
        writeln!(self.out, "Repetitions: {}", format_number(run.repetitions))?;
        writeln!(self.out, "Value: {}", run.value)?;
        if self.verbose {
            if let Some(each) = per_repetition(run) {
                writeln!(self.out, "Per repetition: {}", format_duration(each))?;
            }
        }
        writeln!(self.out, "{}", format_report(run.duration))
    }

    fn present_comparison(&mut self, comparison: &Comparison) -> io::Result<()> {
        writeln!(self.out, "{}", ui::verdict(comparison, self.color))?;
        writeln!(self.out, "{}", format_report(comparison.difference))
    }

    fn present_error(&mut self, error: &str) {
        ui::print_error(error);
    }
}

#[allow(clippy::cast_precision_loss)]
fn per_repetition(run: &TimedRun) -> Option<Duration> {
    if run.repetitions == 0 {
        return None;
    }
    Some(Duration::from_secs_f64(
        run.duration.as_secs_f64() / run.repetitions as f64,
    ))
}

/// JSON document emitted by [`JsonResultPresenter::finish`].
#[derive(Debug, Default, Serialize)]
struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<QuadratureConfig>,
    runs: Vec<TimedRun>,
    comparisons: Vec<Comparison>,
    errors: Vec<String>,
}

/// Presenter that buffers results and writes one JSON document at the end.
pub struct JsonResultPresenter<W: Write> {
    out: W,
    report: JsonReport,
}

impl<W: Write> JsonResultPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: JsonReport::default(),
        }
    }

    /// Include the quadrature configuration in the report.
    #[must_use]
    pub fn with_config(mut self, config: QuadratureConfig) -> Self {
        self.report.config = Some(config);
        self
    }

    /// Write the report and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        Ok(self.out)
    }
}

impl<W: Write> ResultPresenter for JsonResultPresenter<W> {
    fn present_run(&mut self, run: &TimedRun) -> io::Result<()> {
        self.report.runs.push(run.clone());
        Ok(())
    }

    fn present_comparison(&mut self, comparison: &Comparison) -> io::Result<()> {
        self.report.comparisons.push(comparison.clone());
        Ok(())
    }

    fn present_error(&mut self, error: &str) {
        self.report.errors.push(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(label: &str, millis: u64) -> TimedRun {
        TimedRun {
            label: label.into(),
            workload: "Midpoint/partial".into(),
            repetitions: 9_999,
            value: 28.0,
            duration: Duration::from_millis(millis),
        }
    }

    fn text(presenter: CliResultPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn present_run_normal() {
        let mut presenter = CliResultPresenter::new(Vec::new(), false, false).with_color(false);
        presenter.present_run(&run("A", 1_250)).unwrap();
        let out = text(presenter);
        assert!(out.contains("=== A ==="));
        assert!(out.contains("Repetitions: 9,999"));
        assert!(out.contains("Value: 28"));
        assert!(out.contains("0 minutes 1 seconds 0.25 milliseconds"));
        assert!(!out.contains("Per repetition"));
    }

    #[test]
    fn present_run_verbose() {
        let mut presenter = CliResultPresenter::new(Vec::new(), true, false).with_color(false);
        // 2 s over 9,999 repetitions
        presenter.present_run(&run("A", 2_000)).unwrap();
        assert!(text(presenter).contains("Per repetition: 200.02µs"));
    }

    #[test]
    fn present_run_quiet() {
        let mut presenter = CliResultPresenter::new(Vec::new(), false, true).with_color(false);
        presenter.present_run(&run("A", 61_000)).unwrap();
        assert_eq!(
            text(presenter),
            "1 minutes 1 seconds 0 milliseconds\n"
        );
    }

    #[test]
    fn present_comparison_slower() {
        let cmp = Comparison::new("A", "B", Duration::from_secs(5), Duration::from_secs(3));
        let mut presenter = CliResultPresenter::new(Vec::new(), false, false).with_color(false);
        presenter.present_comparison(&cmp).unwrap();
        assert_eq!(
            text(presenter),
            "A is slower then B\n0 minutes 2 seconds 0 milliseconds\n"
        );
    }

    #[test]
    fn present_comparison_equal() {
        let d = Duration::from_secs(4);
        let cmp = Comparison::new("A", "B", d, d);
        let mut presenter = CliResultPresenter::new(Vec::new(), false, false).with_color(false);
        presenter.present_comparison(&cmp).unwrap();
        assert_eq!(
            text(presenter),
            "A is this same, value as B\n0 minutes 4 seconds 0 milliseconds\n"
        );
    }

    #[test]
    fn present_error_does_not_panic() {
        let mut presenter = CliResultPresenter::new(Vec::new(), false, false);
        presenter.present_error("test error message");
    }

    #[test]
    fn json_report_collects_everything() {
        let mut presenter =
            JsonResultPresenter::new(Vec::new()).with_config(QuadratureConfig::default_scenario());
        presenter.present_run(&run("A", 5)).unwrap();
        presenter.present_run(&run("B", 3)).unwrap();
        let cmp = Comparison::new("A", "B", Duration::from_millis(5), Duration::from_millis(3));
        presenter.present_comparison(&cmp).unwrap();
        presenter.present_error("late failure");

        let out = presenter.finish().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["runs"].as_array().unwrap().len(), 2);
        assert_eq!(json["comparisons"][0]["verdict"], "slower");
        assert_eq!(json["config"]["step_count"], 3.0);
        assert_eq!(json["errors"][0], "late failure");
    }

    #[test]
    fn empty_json_report() {
        let presenter = JsonResultPresenter::new(Vec::new());
        let out = presenter.finish().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(json.get("config").is_none());
        assert!(json["comparisons"].as_array().unwrap().is_empty());
        assert!(json["runs"].as_array().unwrap().is_empty());
    }
}
