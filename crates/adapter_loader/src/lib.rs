//! # adapter_loader: Error Sweep Input Adapter
//!
//! ## Adapter Layer Role
//!
//! adapter_loader is the input edge of the reporting pipeline. It turns the
//! CSV files written by the Greeks validation sweep into typed, validated,
//! in-memory tables:
//! - Column vocabulary: `Greek`, `ErrorColumn` (`columns`)
//! - Row and table types: `SweepRow`, `ErrorSweepTable` (`table`)
//! - CSV loading and schema validation: `load_error_sweep`, `read_error_sweep` (`loader`)
//! - Error types: `LoaderError` (`error`)
//!
//! Tables are read once and never mutated afterwards.
//!
//! ## Usage Examples
//!
//! ```rust
//! use adapter_loader::{read_error_sweep, ErrorColumn};
//!
//! let csv = "h_rel,err_D_fd,err_D_cs,err_G_fd,err_G_cs_real,err_G_cs_45\n\
//!            1e-1,2.0e-3,1e-9,1e-2,1e-8,1e-8\n\
//!            1e-3,5.0e-6,1e-12,1e-4,1e-10,1e-10\n";
//! let table = read_error_sweep(csv.as_bytes()).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! let deltas: Vec<f64> = table.column(ErrorColumn::DeltaFd).collect();
//! assert_eq!(deltas, vec![2.0e-3, 5.0e-6]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod columns;
pub mod error;
pub mod loader;
pub mod table;

pub use columns::{ErrorColumn, Greek, H_REL_HEADER};
pub use error::LoaderError;
pub use loader::{load_error_sweep, read_error_sweep};
pub use table::{ErrorSweepTable, SweepRow};
