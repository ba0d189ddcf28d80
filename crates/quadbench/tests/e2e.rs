//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

const VERDICT: &str = r"is (slower|faster) then|is this same, value as";

fn quadbench() -> Command {
    let mut cmd = Command::cargo_bin("quadbench").expect("binary not found");
    cmd.env("NO_COLOR", "1");
    cmd
}

// Small repetition counts and a fast progress cadence.
fn quick() -> Command {
    let mut cmd = quadbench();
    cmd.args(["--reps-a", "10", "--reps-b", "20", "--tick-ms", "1", "--width", "60"]);
    cmd
}

#[test]
fn help_flag() {
    quadbench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--reps-a"))
        .stdout(predicate::str::contains("--accumulation"));
}

#[test]
fn version_flag() {
    quadbench()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quadbench"));
}

#[test]
fn default_scenario_compares_two_runs() {
    quick()
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Midpoint (10 reps) ==="))
        .stdout(predicate::str::contains("=== Midpoint (20 reps) ==="))
        .stdout(predicate::str::contains("Value: 28"))
        .stdout(predicate::str::is_match(VERDICT).unwrap())
        .stdout(predicate::str::contains(" minutes ").count(3))
        .stderr(predicate::str::contains("[100%]"));
}

#[test]
fn all_rules() {
    quick()
        .args(["--rule", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Midpoint (10 reps)"))
        .stdout(predicate::str::contains("Trapezoidal (10 reps)"))
        .stdout(predicate::str::contains("Simpson (20 reps)"))
        .stdout(predicate::str::is_match(VERDICT).unwrap().count(3));
}

#[test]
fn every_accumulation_strategy() {
    for accumulation in ["partial", "atomic", "locked", "sequential"] {
        quick()
            .args(["--rule", "simpson", "--accumulation", accumulation, "-q"])
            .assert()
            .success()
            .stdout(predicate::str::is_match(VERDICT).unwrap());
    }
}

#[test]
fn completion_progress_mode() {
    quick()
        .args(["--progress", "completion", "-j", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[100%]"));
}

#[test]
fn quiet_mode_hides_progress() {
    quick()
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("===").not())
        .stderr(predicate::str::contains("[100%]").not());
}

#[test]
fn custom_function() {
    quick()
        .args([
            "--a", "0", "--b", "0", "--c", "7", "--begin", "0", "--end", "3", "--rule",
            "trapezoidal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Value: 21"));
}

#[test]
fn json_report() {
    let output = quick()
        .args(["--rule", "all", "--json"])
        .output()
        .expect("failed to run quadbench");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["runs"].as_array().unwrap().len(), 6);
    assert_eq!(report["comparisons"].as_array().unwrap().len(), 3);
    assert_eq!(report["runs"][0]["workload"], "Midpoint/partial");
    assert_eq!(report["runs"][0]["value"], 28.0);
    assert_eq!(report["config"]["step_count"], 3.0);
}

#[test]
fn primes_workload() {
    quick()
        .args(["--workload", "primes", "--prime-limit", "10000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Value: 1229"))
        .stdout(predicate::str::contains("Without parallel is"));
}

#[test]
fn zero_step_is_rejected() {
    quick()
        .args(["--step", "0"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("step"));
}

#[test]
fn zero_step_count_is_rejected() {
    quick().args(["--steps", "0"]).assert().code(4);
}

#[test]
fn unknown_rule_is_rejected() {
    quick()
        .args(["--rule", "boole"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("boole"));
}

#[test]
fn json_report_records_errors() {
    let output = quick()
        .args(["--rule", "boole", "--json"])
        .output()
        .expect("failed to run quadbench");
    assert_eq!(output.status.code(), Some(4));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["errors"].as_array().unwrap().len(), 1);
}

#[test]
fn invalid_accumulation_is_a_usage_error() {
    quadbench()
        .args(["--accumulation", "shared"])
        .assert()
        .failure();
}

#[test]
fn completion_bash() {
    quadbench()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quadbench"));
}

#[test]
fn env_fallback_for_repetitions() {
    quadbench()
        .env("QUADBENCH_REPS_A", "5")
        .env("QUADBENCH_REPS_B", "6")
        .args(["--tick-ms", "1", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(VERDICT).unwrap());
}
