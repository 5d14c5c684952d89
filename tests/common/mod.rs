//! Code shared between integration tests.
use shift_report::settings::Settings;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// A stand-in for MiniZinc which prints canned output for each model.
///
/// The model path is the fifth argument.
const FAKE_SOLVER_SCRIPT: &str = r#"#!/bin/sh
case "$5" in
    *max.mzn)
        printf 'Valor total de preferencia = 100\nEmpleado 1:\n  Lunes, Turno Mañana\n  (libre)\n  Martes, Turno Tarde\nEmpleado 2:\n  Miércoles, Turno Noche\n'
        ;;
    *min.mzn)
        printf 'Penalización total = 5\nEmpleado 1:\n  Jueves, Turno Noche\n'
        ;;
esac
"#;

/// Get settings which run the fake solver in `dir`, writing it if needed
pub fn fake_solver_settings(dir: &Path) -> Settings {
    let exe = dir.join("minizinc");
    fs::write(&exe, FAKE_SOLVER_SCRIPT).unwrap();
    fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

    Settings {
        minizinc_exe: exe,
        ..Settings::default()
    }
}
