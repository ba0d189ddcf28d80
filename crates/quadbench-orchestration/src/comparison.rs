//! Verdicts between two completed measurements.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Outcome of comparing the first measurement against the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Slower,
    Faster,
    Equal,
}

/// Comparison of two durations, phrased from the first one's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub label: String,
    pub other_label: String,
    pub verdict: Verdict,
    /// Absolute difference, or the shared value when both are equal.
    pub difference: Duration,
}

impl Comparison {
    #[must_use]
    pub fn new(label: &str, other_label: &str, this: Duration, other: Duration) -> Self {
        let (verdict, difference) = match this.cmp(&other) {
            std::cmp::Ordering::Greater => (Verdict::Slower, this - other),
            std::cmp::Ordering::Less => (Verdict::Faster, other - this),
            std::cmp::Ordering::Equal => (Verdict::Equal, this),
        };
        Self {
            label: label.to_string(),
            other_label: other_label.to_string(),
            verdict,
            difference,
        }
    }
}

/// The verdict sentence, e.g. `A is slower then B`.
impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            label, other_label, ..
        } = self;
        match self.verdict {
            Verdict::Slower => write!(f, "{label} is slower then {other_label}"),
            Verdict::Faster => write!(f, "{label} is faster then {other_label}"),
            Verdict::Equal => write!(f, "{label} is this same, value as {other_label}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slower() {
        let cmp = Comparison::new("A", "B", Duration::from_secs(5), Duration::from_secs(3));
        assert_eq!(cmp.verdict, Verdict::Slower);
        assert_eq!(cmp.difference, Duration::from_secs(2));
        assert_eq!(cmp.to_string(), "A is slower then B");
    }

    #[test]
    fn faster() {
        let cmp = Comparison::new("A", "B", Duration::from_secs(3), Duration::from_secs(5));
        assert_eq!(cmp.verdict, Verdict::Faster);
        assert_eq!(cmp.difference, Duration::from_secs(2));
        assert_eq!(cmp.to_string(), "A is faster then B");
    }

    #[test]
    fn equal_reports_common_value() {
        let d = Duration::from_millis(1_500);
        let cmp = Comparison::new("A", "B", d, d);
        assert_eq!(cmp.verdict, Verdict::Equal);
        assert_eq!(cmp.difference, d);
        assert_eq!(cmp.to_string(), "A is this same, value as B");
    }

    #[test]
    fn serializes_verdict_lowercase() {
        let cmp = Comparison::new("A", "B", Duration::ZERO, Duration::from_secs(1));
        let json = serde_json::to_value(&cmp).unwrap();
        assert_eq!(json["verdict"], "faster");
        assert_eq!(json["label"], "A");
    }
}
