//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use quadbench_cli::output::format_number;
use quadbench_cli::terminal::line_width;
use quadbench_cli::{CliResultPresenter, JsonResultPresenter};
use quadbench_orchestration::interfaces::ResultPresenter;
use quadbench_orchestration::{get_rules_to_run, time_primes, time_rule};

use crate::config::{AppConfig, Workload};

const SEQUENTIAL_LABEL: &str = "Without parallel";
const PARALLEL_LABEL: &str = "Parallel";

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        quadbench_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout())?;
        return Ok(());
    }

    if config.json {
        return run_json(config);
    }

    let mut presenter = CliResultPresenter::stdout(config.verbose, config.quiet);
    run_workload(config, &mut presenter)
}

fn run_json(config: &AppConfig) -> Result<()> {
    let mut presenter = JsonResultPresenter::new(io::stdout());
    if config.workload == Workload::Integral {
        if let Ok(quad) = config.quadrature_config() {
            presenter = presenter.with_config(quad);
        }
    }

    let outcome = run_workload(config, &mut presenter);
    if let Err(err) = &outcome {
        presenter.present_error(&format!("{err:#}"));
    }
    presenter.finish()?;
    outcome
}

fn run_workload(config: &AppConfig, presenter: &mut dyn ResultPresenter) -> Result<()> {
    match config.workload {
        Workload::Integral => run_integral(config, presenter),
        Workload::Primes => run_primes(config, presenter),
    }
}

// Each selected rule is timed at both repetition counts and the two runs compared.
fn run_integral(config: &AppConfig, presenter: &mut dyn ResultPresenter) -> Result<()> {
    let quad = config
        .quadrature_config()
        .context("invalid integration settings")?;
    let rules = get_rules_to_run(&config.rule)?;
    let width = line_width(config.width);
    info!(rules = rules.len(), accumulation = %config.accumulation, "integral workload");

    for rule in rules {
        let label_a = format!("{rule} ({} reps)", format_number(config.reps_a));
        let label_b = format!("{rule} ({} reps)", format_number(config.reps_b));

        let (watch_a, run_a) = time_rule(
            progress_sink(config),
            &config.run_options(&label_a, width),
            &quad,
            rule,
            config.accumulation,
            config.reps_a,
        )?;
        presenter.present_run(&run_a)?;

        let (watch_b, run_b) = time_rule(
            progress_sink(config),
            &config.run_options(&label_b, width),
            &quad,
            rule,
            config.accumulation,
            config.reps_b,
        )?;
        presenter.present_run(&run_b)?;

        presenter.present_comparison(&watch_a.compare(&label_a, &label_b, &watch_b)?)?;
    }
    Ok(())
}

// The parallel count runs on the same pool that dispatches the repetitions.
fn run_primes(config: &AppConfig, presenter: &mut dyn ResultPresenter) -> Result<()> {
    let width = line_width(config.width);
    info!(limit = config.prime_limit, "primes workload");

    let time = |label: &str, parallel: bool| {
        time_primes(
            progress_sink(config),
            &config.run_options(label, width),
            config.prime_limit,
            parallel,
            config.prime_reps,
        )
    };

    let (sequential, run) = time(SEQUENTIAL_LABEL, false)?;
    presenter.present_run(&run)?;
    let (parallel, run) = time(PARALLEL_LABEL, true)?;
    presenter.present_run(&run)?;

    let comparison = sequential.compare(SEQUENTIAL_LABEL, PARALLEL_LABEL, &parallel)?;
    presenter.present_comparison(&comparison)?;
    Ok(())
}

fn progress_sink(config: &AppConfig) -> Box<dyn Write> {
    if config.quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}
