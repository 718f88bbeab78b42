//! CSV loading and schema validation for error sweep tables.
//!
//! The sweep generator writes one row per relative step size with a header
//! row and values in scientific notation. Only `h_rel` and the five error
//! columns are required; extra columns are ignored.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::columns::{ErrorColumn, H_REL_HEADER};
use crate::error::LoaderError;
use crate::table::{ErrorSweepTable, SweepRow};

/// Load and validate an error sweep table from a CSV file.
///
/// # Errors
/// - `LoaderError::FileNotFound` if `path` does not exist
/// - any error of [`read_error_sweep`]
pub fn load_error_sweep(path: &Path) -> Result<ErrorSweepTable, LoaderError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoaderError::FileNotFound(path.to_path_buf()),
        _ => LoaderError::Io(e),
    })?;

    let table = read_error_sweep(file)?;
    info!(
        path = %path.display(),
        rows = table.len(),
        "Loaded error sweep table"
    );
    Ok(table)
}

/// Parse and validate an error sweep table from any reader.
///
/// # Errors
/// - `LoaderError::MissingColumn` if a required header is absent
/// - `LoaderError::Csv` on malformed CSV or a non-numeric cell
/// - `LoaderError::EmptyTable` if there are no data rows
/// - `LoaderError::InvalidValue` if `h_rel` is not finite and positive, or an
///   error value is negative
pub fn read_error_sweep<R: Read>(reader: R) -> Result<ErrorSweepTable, LoaderError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    {
        let headers = csv_reader.headers()?;
        let required =
            std::iter::once(H_REL_HEADER).chain(ErrorColumn::ALL.iter().map(|c| c.header()));
        for name in required {
            if !headers.iter().any(|h| h == name) {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }
        debug!(columns = headers.len(), "Error sweep header validated");
    }

    let rows = csv_reader
        .deserialize::<SweepRow>()
        .collect::<Result<Vec<_>, _>>()?;

    ErrorSweepTable::from_rows(rows)
}
