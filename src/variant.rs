//! The two variants of the shift-assignment model.
//!
//! Each variant is solved separately and the solver prints a differently labelled objective
//! value for each, so everything which depends on the variant is collected here.
use clap::ValueEnum;
use regex::Regex;
use std::sync::LazyLock;
use strum::{Display, EnumIter};

/// Matches the objective line printed by the maximisation model
static PREFERENCE_TOTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Valor total de preferencia\s*=\s*(\d+)").expect("Invalid preference regex")
});

/// Matches the objective line printed by the minimisation model
static PENALTY_TOTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Penalización total\s*=\s*(\d+)").expect("Invalid penalty regex")
});

/// A variant of the model, determining the objective and how its output is labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, ValueEnum)]
pub enum Variant {
    /// Maximise the total preference of employees for their shifts
    #[strum(to_string = "maximización")]
    #[value(name = "max")]
    Maximisation,
    /// Minimise the total penalty of the assignment
    #[strum(to_string = "minimización")]
    #[value(name = "min")]
    Minimisation,
}

impl Variant {
    /// The name of the quantity reported as this variant's total
    pub fn total_label(self) -> &'static str {
        match self {
            Self::Maximisation => "preferencia",
            Self::Minimisation => "penalización",
        }
    }

    /// The pattern locating the total value in solver output.
    ///
    /// The first capture group holds the digits of the value.
    pub fn total_pattern(self) -> &'static Regex {
        match self {
            Self::Maximisation => &PREFERENCE_TOTAL_RE,
            Self::Minimisation => &PENALTY_TOTAL_RE,
        }
    }

    /// The name of the file the solver's raw output is written to
    pub fn output_file_name(self) -> &'static str {
        match self {
            Self::Maximisation => "resultado_max.txt",
            Self::Minimisation => "resultado_min.txt",
        }
    }

    /// The heading placed above this variant's summary in the report
    pub fn report_heading(self) -> &'static str {
        match self {
            Self::Maximisation => "MODELO DE MAXIMIZACIÓN:",
            Self::Minimisation => "MODELO DE MINIMIZACIÓN:",
        }
    }
}
