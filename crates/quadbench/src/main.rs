//! quadbench: times quadrature rules under a live progress bar.

use std::process::ExitCode;

use quadbench_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    let result = app::run(&config);
    if let Err(err) = &result {
        quadbench_cli::ui::print_error(&format!("{err:#}"));
    }
    errors::process_exit_code(&result)
}
