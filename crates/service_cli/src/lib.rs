//! # Service CLI: Greeks Error Report
//!
//! Reads the finite-difference and complex-step error sweeps of two
//! Black-Scholes scenarios, renders them as a 2x2 grid of log-log charts and
//! prints, for every method, the smallest error reached and the step size
//! that reached it.
//!
//! ## Service Layer Role
//!
//! As part of the **S**ervice layer in the A-I-P-S architecture, this crate
//! orchestrates the other layers:
//! - [`adapter_loader`] parses and validates the sweep CSVs
//! - [`infra_config`] supplies scenario paths and figure settings
//! - [`plot`] and [`summary`] produce the two report outputs
//!
//! ## Usage
//!
//! ```no_run
//! use infra_config::ReportConfig;
//! use service_cli::report::run_report;
//!
//! let config = ReportConfig::default();
//! let stdout = std::io::stdout();
//! let summary = run_report(&config, &mut stdout.lock())?;
//! assert_eq!(summary.scenarios.len(), 2);
//! # Ok::<(), service_cli::CliError>(())
//! ```

pub mod error;
pub mod plot;
pub mod report;
pub mod scenario;
pub mod summary;

pub use error::{CliError, Result};
pub use report::run_report;
pub use scenario::{load_scenarios, Scenario};
pub use summary::StatisticalSummary;
