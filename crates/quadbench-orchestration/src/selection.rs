//! Rule selection logic.

use quadbench_core::{QuadError, Rule};

/// Get the rules to run for a `--rule` selection (`all` or a single name).
pub fn get_rules_to_run(selection: &str) -> Result<Vec<Rule>, QuadError> {
    match selection.trim() {
        "all" => Ok(Rule::ALL.to_vec()),
        name => Ok(vec![name.parse()?]),
    }
}
