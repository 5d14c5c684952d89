//! Running a model through MiniZinc.
//!
//! The solver is treated as an opaque producer of text: its standard output is captured to a file
//! for later summarising and its exit status does not decide whether a run succeeded.
use crate::output::create_output_directory;
use crate::variant::Variant;
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Options shared by every solver run
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions {
    /// The MiniZinc executable
    pub minizinc_exe: PathBuf,
    /// The solver backend MiniZinc should use
    pub solver: String,
    /// Time limit for the solver in milliseconds
    pub time_limit_ms: u64,
    /// Path to the dataset shared by both models
    pub data_file: PathBuf,
}

impl SolverOptions {
    /// Build the command which solves the model at `model_path`
    fn command(&self, model_path: &Path) -> Command {
        let mut cmd = Command::new(&self.minizinc_exe);
        cmd.args(["--solver", &self.solver]);
        cmd.arg("--time-limit").arg(self.time_limit_ms.to_string());
        cmd.arg(model_path);
        cmd.arg(&self.data_file);

        cmd
    }
}

/// Run one model variant through the solver, capturing its output to a file.
///
/// Blocks until the solver exits. A non-zero exit status is logged but otherwise treated like
/// success, as the output file still holds whatever the solver managed to print.
///
/// # Arguments
///
/// * `variant` - The model variant being run
/// * `model_path` - Path to the model file
/// * `output_dir` - Directory for the output file, created if necessary
/// * `output_file_name` - Name of the file standard output is written to
/// * `options` - Solver options
///
/// # Returns
///
/// The exit status of the solver process.
pub fn run_model(
    variant: Variant,
    model_path: &Path,
    output_dir: &Path,
    output_file_name: &str,
    options: &SolverOptions,
) -> Result<ExitStatus> {
    info!("▶ Ejecutando {}...", variant.to_string().to_uppercase());
    create_output_directory(output_dir)?;

    let output_path = output_dir.join(output_file_name);
    let output_file = File::create(&output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;

    let status = options
        .command(model_path)
        .stdout(output_file)
        .status()
        .with_context(|| {
            format!(
                "Failed to run solver: {}",
                options.minizinc_exe.display()
            )
        })?;

    if !status.success() {
        warn!(
            "Solver {status} for model {}; results may be incomplete",
            model_path.display()
        );
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn options() -> SolverOptions {
        SolverOptions {
            minizinc_exe: "minizinc".into(),
            solver: "CBC".into(),
            time_limit_ms: 60000,
            data_file: "datos.dzn".into(),
        }
    }

    #[rstest]
    fn test_command_args(options: SolverOptions) {
        let cmd = options.command(Path::new("max.mzn"));
        assert_eq!(cmd.get_program(), "minizinc");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(
            args,
            [
                "--solver",
                "CBC",
                "--time-limit",
                "60000",
                "max.mzn",
                "datos.dzn"
            ]
        );
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use crate::fixture::{assert_error, write_fake_solver};
        use std::fs;
        use tempfile::tempdir;

        #[rstest]
        fn test_run_model_captures_stdout(mut options: SolverOptions) {
            let dir = tempdir().unwrap();
            options.minizinc_exe = write_fake_solver(dir.path(), "#!/bin/sh\necho \"$@\"\n");
            let output_dir = dir.path().join("resultados");

            let status = run_model(
                Variant::Maximisation,
                Path::new("max.mzn"),
                &output_dir,
                "resultado_max.txt",
                &options,
            )
            .unwrap();
            assert!(status.success());
            assert_eq!(
                fs::read_to_string(output_dir.join("resultado_max.txt")).unwrap(),
                "--solver CBC --time-limit 60000 max.mzn datos.dzn\n"
            );
        }

        #[rstest]
        fn test_run_model_ignores_exit_status(mut options: SolverOptions) {
            let dir = tempdir().unwrap();
            options.minizinc_exe =
                write_fake_solver(dir.path(), "#!/bin/sh\necho partial\nexit 3\n");

            let status = run_model(
                Variant::Minimisation,
                Path::new("min.mzn"),
                dir.path(),
                "resultado_min.txt",
                &options,
            )
            .unwrap();
            assert_eq!(status.code(), Some(3));
            assert_eq!(
                fs::read_to_string(dir.path().join("resultado_min.txt")).unwrap(),
                "partial\n"
            );
        }

        #[rstest]
        fn test_run_model_truncates_previous_output(mut options: SolverOptions) {
            let dir = tempdir().unwrap();
            options.minizinc_exe = write_fake_solver(dir.path(), "#!/bin/sh\necho new\n");
            fs::write(dir.path().join("resultado_max.txt"), "old output, much longer").unwrap();

            run_model(
                Variant::Maximisation,
                Path::new("max.mzn"),
                dir.path(),
                "resultado_max.txt",
                &options,
            )
            .unwrap();
            assert_eq!(
                fs::read_to_string(dir.path().join("resultado_max.txt")).unwrap(),
                "new\n"
            );
        }

        #[rstest]
        fn test_run_model_missing_solver(mut options: SolverOptions) {
            let dir = tempdir().unwrap();
            options.minizinc_exe = dir.path().join("no-such-minizinc");

            assert_error!(
                run_model(
                    Variant::Maximisation,
                    Path::new("max.mzn"),
                    dir.path(),
                    "resultado_max.txt",
                    &options,
                ),
                format!(
                    "Failed to run solver: {}",
                    options.minizinc_exe.display()
                )
            );
        }
    }
}
