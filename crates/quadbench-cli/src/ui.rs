//! UI helpers for CLI display.

use console::style;

use quadbench_orchestration::comparison::{Comparison, Verdict};

/// Check if color output is disabled via `NO_COLOR` env var or a non-tty stdout.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok() || !console::colors_enabled()
}

/// A section header.
#[must_use]
pub fn header(text: &str, color: bool) -> String {
    if color {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    } else {
        format!("=== {text} ===")
    }
}

/// The comparison sentence, colored by verdict.
#[must_use]
pub fn verdict(comparison: &Comparison, color: bool) -> String {
    let sentence = comparison.to_string();
    if !color {
        return sentence;
    }
    match comparison.verdict {
        Verdict::Slower => style(sentence).red().bold().to_string(),
        Verdict::Faster => style(sentence).green().bold().to_string(),
        Verdict::Equal => style(sentence).yellow().bold().to_string(),
    }
}

/// Print an error message on stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn plain_header() {
        assert_eq!(header("Midpoint", false), "=== Midpoint ===");
    }

    #[test]
    fn colored_header_keeps_text() {
        assert!(header("Midpoint", true).contains("=== Midpoint ==="));
    }

    #[test]
    fn plain_verdict_matches_display() {
        let cmp = Comparison::new("A", "B", Duration::from_secs(2), Duration::from_secs(1));
        assert_eq!(verdict(&cmp, false), "A is slower then B");
    }

    #[test]
    fn colored_verdict_keeps_text() {
        let cmp = Comparison::new("A", "B", Duration::from_secs(1), Duration::from_secs(1));
        assert!(verdict(&cmp, true).contains("A is this same, value as B"));
    }

    #[test]
    fn color_check_does_not_panic() {
        let _ = is_color_disabled();
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
        print_error("");
    }
}
