//! Provides the main entry point to the program.
use human_panic::setup_panic;
use log::error;
use shift_report::cli::run_cli;
use shift_report::log::is_logger_initialised;
use std::process::ExitCode;

fn main() -> ExitCode {
    setup_panic!();

    if let Err(err) = run_cli() {
        // Errors raised before the logger exists still need to reach the user
        if is_logger_initialised() {
            error!("{err:?}");
        } else {
            eprintln!("Error: {err:?}");
        }

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
