//! Running both model variants and reporting on the results.
use crate::output::{REPORT_FILE_NAME, write_report};
use crate::report::compose_report;
use crate::settings::Settings;
use crate::solver::run_model;
use crate::summary::Summary;
use crate::variant::Variant;
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// Solve both models, summarise their output and write the report to `output_dir`.
///
/// Steps are run in order and the first error aborts the run, leaving any files already written
/// in place.
///
/// # Returns
///
/// The path to the report.
pub fn run(settings: &Settings, output_dir: &Path) -> Result<PathBuf> {
    let options = settings.solver_options();
    for variant in Variant::iter() {
        run_model(
            variant,
            settings.model_path(variant),
            output_dir,
            variant.output_file_name(),
            &options,
        )?;
    }

    let summarise = |variant: Variant| {
        Summary::from_path(&output_dir.join(variant.output_file_name()), variant)
    };
    let max_summary = summarise(Variant::Maximisation)?;
    let min_summary = summarise(Variant::Minimisation)?;

    let report = compose_report(&max_summary, &min_summary);
    let report_path = write_report(output_dir, &report, None)?;

    let absolute_dir = std::path::absolute(output_dir).with_context(|| {
        format!("Could not resolve path to {}", output_dir.display())
    })?;
    info!("✅ Resultados de modelos de maximización y minimización.");
    info!("✅ Informe completo generado y guardado como '{REPORT_FILE_NAME}'.");
    info!("✅ Ejecución finalizada.");
    info!("📂 Resultados guardados en el directorio: {}", absolute_dir.display());

    Ok(report_path)
}
