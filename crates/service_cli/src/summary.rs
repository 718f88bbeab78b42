//! Statistical summary of error sweeps.
//!
//! For every scenario and error column the summary records the row with the
//! smallest error (first occurrence on ties) together with the `h_rel` of
//! that row, and the smallest error of the column on its own. `NaN` values
//! never win a minimum.

use std::fmt;

use adapter_loader::{ErrorColumn, ErrorSweepTable, Greek};

use crate::scenario::Scenario;

const RULE_WIDTH: usize = 80;
const SUBRULE_WIDTH: usize = 40;
const ACCURACY_LABEL_WIDTH: usize = 14;
const MISSING: &str = "n/a";

/// Index of the first smallest non-NaN value.
///
/// Returns `None` for an empty or all-NaN input.
pub fn argmin<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, value) in values.into_iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if value >= current => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Smallest non-NaN value.
///
/// Returns `None` for an empty or all-NaN input.
pub fn column_min<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.min(v))))
}

/// Format a value in scientific notation with two decimals and a signed,
/// two-digit exponent (`5.00e-06`, `1.23e+14`).
pub fn format_sci(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let raw = format!("{:.2e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

/// Location of a column minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMinimum {
    /// Column the minimum was taken over
    pub column: ErrorColumn,
    /// Zero-based row index of the minimum
    pub row: usize,
    /// Minimum error value
    pub min_error: f64,
    /// `h_rel` of the same row
    pub h_rel: f64,
}

impl ColumnMinimum {
    /// Locate the minimum of `column` in `table`.
    ///
    /// Returns `None` if the column holds no non-NaN value.
    pub fn locate(table: &ErrorSweepTable, column: ErrorColumn) -> Option<Self> {
        let row_index = argmin(table.column(column))?;
        let row = table.row(row_index)?;
        Some(Self {
            column,
            row: row_index,
            min_error: row.error(column),
            h_rel: row.h_rel,
        })
    }
}

/// Summary of one error column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    /// Summarised column
    pub column: ErrorColumn,
    /// Row of the minimum error, if any
    pub minimum: Option<ColumnMinimum>,
    /// Best achievable accuracy over all step sizes
    pub best_accuracy: Option<f64>,
}

impl ColumnSummary {
    /// Summarise `column` of `table`
    pub fn from_table(table: &ErrorSweepTable, column: ErrorColumn) -> Self {
        Self {
            column,
            minimum: ColumnMinimum::locate(table, column),
            best_accuracy: column_min(table.column(column)),
        }
    }
}

/// Summary of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    /// Scenario label
    pub label: String,
    /// One entry per error column, in `ErrorColumn::ALL` order
    pub columns: Vec<ColumnSummary>,
}

impl ScenarioSummary {
    /// Summarise every error column of `table`
    pub fn from_table(label: impl Into<String>, table: &ErrorSweepTable) -> Self {
        Self {
            label: label.into(),
            columns: ErrorColumn::ALL
                .iter()
                .map(|&column| ColumnSummary::from_table(table, column))
                .collect(),
        }
    }

    /// Summary of `column`, if present
    pub fn column(&self, column: ErrorColumn) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.column == column)
    }

    fn write_methods(&self, f: &mut fmt::Formatter<'_>, greek: Greek) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{} Methods:", greek)?;

        let width = ErrorColumn::for_greek(greek)
            .map(|c| c.method_label().chars().count())
            .max()
            .unwrap_or(0)
            + 3;

        for summary in self.columns.iter().filter(|c| c.column.greek() == greek) {
            let label = format!("{}:", summary.column.method_label());
            match summary.minimum {
                Some(minimum) => writeln!(
                    f,
                    "  {:<width$}Min error = {} at h_rel = {}",
                    label,
                    format_sci(minimum.min_error),
                    format_sci(minimum.h_rel),
                    width = width
                )?,
                None => writeln!(f, "  {:<width$}Min error = {}", label, MISSING, width = width)?,
            }
        }
        Ok(())
    }
}

/// Full statistical summary across scenarios, rendered through `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticalSummary {
    /// Scenario summaries in report order
    pub scenarios: Vec<ScenarioSummary>,
}

impl StatisticalSummary {
    /// Summarise loaded scenarios, keeping their order
    pub fn from_scenarios(scenarios: &[Scenario]) -> Self {
        Self {
            scenarios: scenarios
                .iter()
                .map(|s| ScenarioSummary::from_table(s.label.clone(), &s.table))
                .collect(),
        }
    }
}

impl fmt::Display for StatisticalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "STATISTICAL SUMMARY")?;
        writeln!(f, "{}", rule)?;

        for (index, scenario) in self.scenarios.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "Scenario {}:", index + 1)?;
            writeln!(f, "{}", "-".repeat(SUBRULE_WIDTH))?;

            for greek in Greek::ALL {
                scenario.write_methods(f, greek)?;
            }

            writeln!(f)?;
            writeln!(f, "Best Achievable Accuracy:")?;
            for summary in &scenario.columns {
                let label = format!("{}:", summary.column.accuracy_label());
                let value = summary
                    .best_accuracy
                    .map(format_sci)
                    .unwrap_or_else(|| MISSING.to_string());
                writeln!(
                    f,
                    "  {:<width$}{}",
                    label,
                    value,
                    width = ACCURACY_LABEL_WIDTH
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", rule)
    }
}
