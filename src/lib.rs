//! Runs the shift-assignment models through MiniZinc and reports on the results.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod cli;
pub mod log;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod settings;
pub mod solver;
pub mod summary;
pub mod variant;

#[cfg(test)]
mod fixture;

/// Get the path to the directory holding the program's configuration files
pub fn get_config_dir() -> PathBuf {
    let Some(mut config_dir) = dirs::config_dir() else {
        panic!("Could not get path to config dir");
    };

    config_dir.push("shift-report");
    config_dir
}
