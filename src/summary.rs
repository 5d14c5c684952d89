//! Extracting a summary of the results from the solver's textual output.
//!
//! The solver output is not parsed structurally. Instead, the total value and the shifts assigned
//! to each employee are located with regular expressions and anything else is ignored. Output which
//! is truncated or malformed therefore yields a summary with missing entries rather than an error.
use crate::variant::Variant;
use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Shown in place of the total value when it is missing from the solver output
pub const UNKNOWN_TOTAL: &str = "unknown";

/// Matches an employee heading and the indented lines which follow it.
///
/// The last indented line may end the text without a newline.
static EMPLOYEE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Empleado (\d+):\n((?:  .+(?:\n|\z))+)").expect("Invalid employee regex")
});

/// Matches a single assigned shift, e.g. `Lunes, Turno Mañana`
static SHIFT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+), Turno (\w+)").expect("Invalid shift regex"));

/// A shift assigned to an employee on a given day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftAssignment {
    /// The day of the shift
    pub day: String,
    /// The name of the shift
    pub shift: String,
}

/// The shifts assigned to one employee, in the order the solver printed them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeShifts {
    /// The employee's identifier
    pub employee_id: String,
    /// Assigned shifts
    pub shifts: Vec<ShiftAssignment>,
}

/// A summary of one solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The file the solver output was read from
    pub source: PathBuf,
    /// Which model variant produced the output
    pub variant: Variant,
    /// The digits of the total value, if it was found
    pub total_value: Option<String>,
    /// Employees in order of first appearance
    pub employees: Vec<EmployeeShifts>,
}

impl Summary {
    /// Read the solver output at `path` and summarise it.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a file containing the solver's standard output
    /// * `variant` - The variant which produced it, selecting which total is looked for
    pub fn from_path(path: &Path, variant: Variant) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read solver output: {}", path.display()))?;

        // Employee blocks are delimited by bare newlines
        let text = text.replace("\r\n", "\n");

        Ok(Self::parse(path, &text, variant))
    }

    /// Summarise the solver output in `text`.
    ///
    /// `source` is only used to identify the output in the rendered summary.
    pub fn parse(source: impl Into<PathBuf>, text: &str, variant: Variant) -> Self {
        let total_value = variant
            .total_pattern()
            .captures(text)
            .map(|caps| caps[1].to_string());

        let employees = EMPLOYEE_BLOCK_RE
            .captures_iter(text)
            .map(|caps| EmployeeShifts {
                employee_id: caps[1].to_string(),
                shifts: parse_shift_lines(&caps[2]),
            })
            .collect();

        Self {
            source: source.into(),
            variant,
            total_value,
            employees,
        }
    }

    /// The total value as it appears in the report
    pub fn total_value_or_unknown(&self) -> &str {
        self.total_value.as_deref().unwrap_or(UNKNOWN_TOTAL)
    }
}

/// Get the shifts listed in the indented lines of an employee block.
///
/// Lines which do not look like a shift are skipped.
fn parse_shift_lines(block: &str) -> Vec<ShiftAssignment> {
    block
        .trim()
        .lines()
        .filter_map(|line| {
            let caps = SHIFT_RE.captures(line)?;
            Some(ShiftAssignment {
                day: caps[1].to_string(),
                shift: caps[2].to_string(),
            })
        })
        .collect()
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📄 Resultados de {}:", self.source.display())?;
        writeln!(
            f,
            "🔢 Valor total de {}: {}",
            self.variant.total_label(),
            self.total_value_or_unknown()
        )?;
        writeln!(f, "👥 Turnos asignados por empleado:")?;
        for employee in &self.employees {
            writeln!(f, "  - Empleado {}:", employee.employee_id)?;
            for assignment in &employee.shifts {
                writeln!(f, "    {}, Turno {}", assignment.day, assignment.shift)?;
            }
        }

        writeln!(f)
    }
}
