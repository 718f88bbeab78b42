//! # infra_config: Report Configuration
//!
//! ## Infra Layer Role
//!
//! Holds everything a report run needs to know that is not data:
//! - Scenario inputs: label and CSV path per scenario (`ScenarioSource`)
//! - Figure output: path, size, resolution and title (`FigureConfig`)
//! - Log level for the tracing subscriber
//!
//! Defaults reproduce the fixed file names of the Greeks validation sweep, so
//! a run without any configuration file reads
//! `bs_fd_vs_complex_scenario{1,2}.csv` and writes
//! `greeks_error_analysis.png`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use infra_config::ReportConfig;
//!
//! let config = ReportConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.figure.pixel_size(), (4200, 3000));
//! ```

#![deny(missing_docs)]

mod report;

pub use report::{
    ConfigError, FigureConfig, ReportConfig, ScenarioSource, MAX_PIXEL_SIDE, SCENARIO_COUNT,
};
