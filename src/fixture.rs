//! Fixtures for tests
#[cfg(unix)]
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
#[cfg(unix)]
use std::path::{Path, PathBuf};

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

/// Output of a successful run of the maximisation model
pub const MAX_OUTPUT: &str =
    "Valor total de preferencia = 42\nEmpleado 1:\n  Monday, Turno AM\n  Tuesday, Turno PM\n";

/// Write an executable shell script standing in for the solver
#[cfg(unix)]
pub fn write_fake_solver(dir: &Path, script: &str) -> PathBuf {
    let path = dir.join("minizinc");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
