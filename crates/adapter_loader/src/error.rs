//! Error types for loading error sweep tables.

use std::path::PathBuf;
use thiserror::Error;

/// Error sweep loading errors.
///
/// Every variant is fatal for a report run; there is no partial load.
///
/// # Examples
/// ```
/// use adapter_loader::LoaderError;
///
/// let err = LoaderError::MissingColumn("err_D_fd".to_string());
/// assert!(err.to_string().contains("err_D_fd"));
/// ```
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Input file exists but could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV content (bad quoting, non-numeric cell, ragged row).
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The file has a header but no data rows.
    #[error("Error sweep table contains no rows")]
    EmptyTable,

    /// A cell violates the value domain of its column.
    #[error("Invalid value {value} in column '{column}' at row {row}: {reason}")]
    InvalidValue {
        /// Zero-based data row index
        row: usize,
        /// Column header
        column: &'static str,
        /// Offending value
        value: f64,
        /// Violated constraint
        reason: &'static str,
    },
}
