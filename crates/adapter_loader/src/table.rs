//! In-memory error sweep tables.

use serde::Deserialize;
use tracing::warn;

use crate::columns::{ErrorColumn, H_REL_HEADER};
use crate::error::LoaderError;

/// One row of an error sweep: a relative step size and the absolute error of
/// every method at that step.
///
/// Field names follow the CSV headers through `serde` renames; any other
/// columns in the file are ignored. Every required cell must hold a number:
/// an empty cell is a `LoaderError::Csv`, not a missing value. Write `NaN`
/// to mark a failed method.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SweepRow {
    /// Relative step size.
    pub h_rel: f64,
    /// Finite-difference Delta error.
    #[serde(rename = "err_D_fd")]
    pub err_delta_fd: f64,
    /// Complex-step Delta error.
    #[serde(rename = "err_D_cs")]
    pub err_delta_cs: f64,
    /// Finite-difference Gamma error.
    #[serde(rename = "err_G_fd")]
    pub err_gamma_fd: f64,
    /// Complex-step (real part) Gamma error.
    #[serde(rename = "err_G_cs_real")]
    pub err_gamma_cs_real: f64,
    /// Complex-step (45 degree) Gamma error.
    #[serde(rename = "err_G_cs_45")]
    pub err_gamma_cs_45: f64,
}

impl SweepRow {
    /// Error value of `column` in this row.
    #[inline]
    pub fn error(&self, column: ErrorColumn) -> f64 {
        match column {
            ErrorColumn::DeltaFd => self.err_delta_fd,
            ErrorColumn::DeltaCs => self.err_delta_cs,
            ErrorColumn::GammaFd => self.err_gamma_fd,
            ErrorColumn::GammaCsReal => self.err_gamma_cs_real,
            ErrorColumn::GammaCs45 => self.err_gamma_cs_45,
        }
    }
}

/// Immutable error sweep table.
///
/// Columns are aligned by row index: `h_rel()` and `column(c)` yield values
/// from the same rows in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSweepTable {
    rows: Vec<SweepRow>,
}

impl ErrorSweepTable {
    /// Build a table from rows, enforcing the column value domains.
    ///
    /// # Errors
    /// - `LoaderError::EmptyTable` if `rows` is empty
    /// - `LoaderError::InvalidValue` if an `h_rel` is not finite and strictly
    ///   positive, or an error value is negative
    ///
    /// `NaN` and infinite error values are kept: they mark a method that
    /// failed numerically at that step and are skipped downstream. Empty CSV
    /// cells never reach this point: the reader rejects them.
    /// A non-ascending `h_rel` column is logged, not rejected.
    pub fn from_rows(rows: Vec<SweepRow>) -> Result<Self, LoaderError> {
        if rows.is_empty() {
            return Err(LoaderError::EmptyTable);
        }
        for (index, row) in rows.iter().enumerate() {
            validate_row(index, row)?;
        }

        let table = Self { rows };
        if !table.is_h_rel_ascending() {
            warn!("h_rel column is not strictly ascending");
        }
        Ok(table)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in file order.
    pub fn rows(&self) -> &[SweepRow] {
        &self.rows
    }

    /// Row at `index`, if any.
    pub fn row(&self, index: usize) -> Option<&SweepRow> {
        self.rows.get(index)
    }

    /// Relative step sizes in file order.
    pub fn h_rel(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.h_rel)
    }

    /// Values of one error column in file order.
    pub fn column(&self, column: ErrorColumn) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |r| r.error(column))
    }

    /// `(h_rel, error)` pairs of one error column in file order.
    pub fn series(&self, column: ErrorColumn) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rows.iter().map(move |r| (r.h_rel, r.error(column)))
    }

    /// Whether `h_rel` is strictly increasing down the table.
    pub fn is_h_rel_ascending(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].h_rel < w[1].h_rel)
    }
}

fn validate_row(index: usize, row: &SweepRow) -> Result<(), LoaderError> {
    if !(row.h_rel.is_finite() && row.h_rel > 0.0) {
        return Err(LoaderError::InvalidValue {
            row: index,
            column: H_REL_HEADER,
            value: row.h_rel,
            reason: "must be finite and strictly positive",
        });
    }

    for column in ErrorColumn::ALL {
        let value = row.error(column);
        if value < 0.0 {
            return Err(LoaderError::InvalidValue {
                row: index,
                column: column.header(),
                value,
                reason: "must be non-negative",
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(h_rel: f64, base: f64) -> SweepRow {
        SweepRow {
            h_rel,
            err_delta_fd: base,
            err_delta_cs: base * 2.0,
            err_gamma_fd: base * 3.0,
            err_gamma_cs_real: base * 4.0,
            err_gamma_cs_45: base * 5.0,
        }
    }

    #[test]
    fn test_row_error_accessor() {
        let r = row(1e-3, 1.0);
        assert_eq!(r.error(ErrorColumn::DeltaFd), 1.0);
        assert_eq!(r.error(ErrorColumn::DeltaCs), 2.0);
        assert_eq!(r.error(ErrorColumn::GammaFd), 3.0);
        assert_eq!(r.error(ErrorColumn::GammaCsReal), 4.0);
        assert_eq!(r.error(ErrorColumn::GammaCs45), 5.0);
    }

    #[test]
    fn test_series_is_row_aligned() {
        let table = ErrorSweepTable::from_rows(vec![row(1e-5, 1.0), row(1e-3, 10.0)]).unwrap();
        let series: Vec<_> = table.series(ErrorColumn::GammaFd).collect();
        assert_eq!(series, vec![(1e-5, 3.0), (1e-3, 30.0)]);
        assert_eq!(table.h_rel().collect::<Vec<_>>(), vec![1e-5, 1e-3]);
    }

    #[test]
    fn test_h_rel_ascending() {
        let ascending = ErrorSweepTable::from_rows(vec![row(1e-5, 1.0), row(1e-3, 1.0)]).unwrap();
        let descending = ErrorSweepTable::from_rows(vec![row(1e-3, 1.0), row(1e-5, 1.0)]).unwrap();
        let single = ErrorSweepTable::from_rows(vec![row(1e-3, 1.0)]).unwrap();

        assert!(ascending.is_h_rel_ascending());
        assert!(!descending.is_h_rel_ascending());
        assert!(single.is_h_rel_ascending());
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(matches!(
            ErrorSweepTable::from_rows(Vec::new()),
            Err(LoaderError::EmptyTable)
        ));
    }

    #[test]
    fn test_from_rows_reports_offending_row() {
        let mut bad = row(1e-3, 1.0);
        bad.err_gamma_cs_45 = -1.0;
        let result = ErrorSweepTable::from_rows(vec![row(1e-5, 1.0), bad]);

        match result {
            Err(LoaderError::InvalidValue { row, column, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "err_G_cs_45");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }
}
