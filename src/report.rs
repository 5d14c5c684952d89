//! Composing the combined report from the summaries of both model variants.
use crate::summary::Summary;
use crate::variant::Variant;
use std::fmt::Write;

/// The title at the top of the report
const REPORT_TITLE: &str = "📊 INFORME DE RESULTADOS DEL PROYECTO DE ASIGNACIÓN DE TURNOS (RRHH)";

/// Width of the rule underlining the title
const TITLE_RULE_WIDTH: usize = 60;

/// Combine the summaries of the maximisation and minimisation runs into one report.
///
/// The summaries always appear in that order, each under the heading for its position.
pub fn compose_report(max_summary: &Summary, min_summary: &Summary) -> String {
    let mut report = format!("{REPORT_TITLE}\n{}\n\n", "=".repeat(TITLE_RULE_WIDTH));
    for (variant, summary) in [
        (Variant::Maximisation, max_summary),
        (Variant::Minimisation, min_summary),
    ] {
        write!(&mut report, "{}\n{summary}", variant.report_heading()).unwrap();
    }

    report
}
