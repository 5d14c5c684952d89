//! Code for loading program settings.
use crate::get_config_dir;
use crate::log::DEFAULT_LOG_LEVEL;
use crate::solver::SolverOptions;
use crate::variant::Variant;
use anyhow::{Context, Result};
use documented::DocumentedFields;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

const DEFAULT_SETTINGS_FILE_HEADER: &str = "# This file contains the program settings for shift-report
# Every setting is optional; commented-out values are the defaults
";

/// Get the path to where the settings file will be read from
pub fn get_settings_file_path() -> PathBuf {
    let mut path = get_config_dir();
    path.push(SETTINGS_FILE_NAME);

    path
}

/// Program settings from config file
#[derive(Debug, DocumentedFields, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// The default program log level
    pub log_level: String,
    /// The MiniZinc executable to run
    pub minizinc_exe: PathBuf,
    /// The solver backend used by MiniZinc
    pub solver: String,
    /// Time limit for each solver run, in milliseconds
    pub time_limit_ms: u64,
    /// The dataset shared by both models
    pub data_file: PathBuf,
    /// The model maximising employee preference
    pub max_model: PathBuf,
    /// The model minimising penalties
    pub min_model: PathBuf,
    /// Directory for solver output and the report
    pub results_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            minizinc_exe: "minizinc".into(),
            solver: "CBC".into(),
            time_limit_ms: 60_000,
            data_file: "datos.dzn".into(),
            max_model: "max.mzn".into(),
            min_model: "min.mzn".into(),
            results_dir: "resultados".into(),
        }
    }
}

impl Settings {
    /// Read the contents of the settings file.
    ///
    /// If the file is not present, default values for settings will be used
    ///
    /// # Returns
    ///
    /// The program settings as a `Settings` struct or an error if the file is invalid
    pub fn load() -> Result<Settings> {
        Self::load_from_path(&get_settings_file_path())
    }

    /// Read from the specified path, falling back on defaults if there is no file
    fn load_from_path(file_path: &Path) -> Result<Settings> {
        if !file_path.is_file() {
            return Ok(Settings::default());
        }

        let toml_str = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("Could not parse settings file: {}", file_path.display()))
    }

    /// The model file for the given variant
    pub fn model_path(&self, variant: Variant) -> &Path {
        match variant {
            Variant::Maximisation => &self.max_model,
            Variant::Minimisation => &self.min_model,
        }
    }

    /// Options for invoking the solver
    pub fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            minizinc_exe: self.minizinc_exe.clone(),
            solver: self.solver.clone(),
            time_limit_ms: self.time_limit_ms,
            data_file: self.data_file.clone(),
        }
    }

    /// The contents of the default settings file
    pub fn default_file_contents() -> String {
        let settings_raw =
            toml::to_string(&Settings::default()).expect("Could not convert settings to TOML");

        // Iterate through the generated TOML, commenting out lines and adding docs
        let mut out = DEFAULT_SETTINGS_FILE_HEADER.to_string();
        for line in settings_raw.split('\n') {
            if let Some(last) = line.find('=') {
                let field = line[..last].trim();

                // All fields should have doc comments
                let docs = Settings::get_field_docs(field).expect("Missing doc comment for field");
                for line in docs.split('\n') {
                    write!(&mut out, "\n# # {}\n", line.trim()).unwrap();
                }

                writeln!(&mut out, "# {}", line.trim()).unwrap();
            }
        }

        out
    }
}
