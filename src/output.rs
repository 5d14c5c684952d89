//! The module responsible for writing output data to disk.
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The default file name for the combined report
pub const REPORT_FILE_NAME: &str = "informe_resultados.txt";

/// Create the output directory, along with any missing parents.
///
/// It is not an error for the directory to exist already.
pub fn create_output_directory(output_dir: &Path) -> Result<()> {
    if output_dir.is_dir() {
        // already exists
        return Ok(());
    }

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })
}

/// Write the report to a file in the output directory, replacing any previous contents.
///
/// # Arguments
///
/// * `output_dir` - The directory to write to, created if necessary
/// * `report` - The report text, written verbatim
/// * `file_name` - The file name to use, defaulting to [`REPORT_FILE_NAME`]
///
/// # Returns
///
/// The path of the file written.
pub fn write_report(output_dir: &Path, report: &str, file_name: Option<&str>) -> Result<PathBuf> {
    create_output_directory(output_dir)?;

    let file_path = output_dir.join(file_name.unwrap_or(REPORT_FILE_NAME));
    fs::write(&file_path, report)
        .with_context(|| format!("Failed to write report: {}", file_path.display()))?;

    Ok(file_path)
}
