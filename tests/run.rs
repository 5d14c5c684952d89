//! Integration tests for the `run` command.
#![cfg(unix)]
mod common;
use common::fake_solver_settings;
use shift_report::cli::{RunOpts, handle_run_command};
use shift_report::log::{LOG_LEVEL_ENV_VAR, is_logger_initialised};
use std::fs;
use tempfile::tempdir;

/// An integration test for the `run` command.
///
/// We also check that the logger is initialised after it is run.
#[test]
fn test_handle_run_command() {
    unsafe { std::env::set_var(LOG_LEVEL_ENV_VAR, "off") };
    assert!(!is_logger_initialised());

    // Save results to non-existent directory to check that directory creation works
    let dir = tempdir().unwrap();
    let opts = RunOpts {
        output_dir: Some(dir.path().join("results")),
    };
    let settings = fake_solver_settings(dir.path());

    let report_path = handle_run_command(&opts, Some(settings)).unwrap();
    assert!(is_logger_initialised());
    assert!(
        fs::read_to_string(report_path)
            .unwrap()
            .contains("Valor total de preferencia: 100")
    );
    assert!(dir.path().join("results/shift_report_info.log").is_file());

    // Second time will fail because the logging is already initialised
    let settings = fake_solver_settings(dir.path());
    assert_eq!(
        handle_run_command(&opts, Some(settings))
            .unwrap_err()
            .chain()
            .next()
            .unwrap()
            .to_string(),
        "Failed to initialise logging."
    );
}
