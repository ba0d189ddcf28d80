//! Error handling and exit codes.

use std::process::ExitCode;

use quadbench_core::constants::exit_codes;
use quadbench_core::QuadError;

/// Exit code for a quadrature error.
#[must_use]
pub fn handle_error(err: &QuadError) -> i32 {
    if err.is_config() {
        exit_codes::ERROR_CONFIG
    } else if err.is_measurement() {
        exit_codes::ERROR_MEASUREMENT
    } else {
        exit_codes::ERROR_GENERIC
    }
}

/// Exit code for any error reaching `main`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<QuadError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

/// Exit code for the outcome of a whole run.
#[must_use]
pub fn outcome_code(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => exit_code(err),
    }
}

/// [`outcome_code`] as a process exit status.
#[must_use]
pub fn process_exit_code(result: &anyhow::Result<()>) -> ExitCode {
    u8::try_from(outcome_code(result)).map_or(ExitCode::FAILURE, ExitCode::from)
}
