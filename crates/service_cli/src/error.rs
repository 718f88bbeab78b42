//! Error types for the report CLI.

use adapter_loader::LoaderError;
use infra_config::ConfigError;
use thiserror::Error;

use crate::plot::PlotError;

/// CLI error type
///
/// Every variant aborts the run; nothing is retried.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scenario table could not be loaded
    #[error("Failed to load {scenario}: {source}")]
    Load {
        /// Scenario label
        scenario: String,
        /// Underlying loader error
        #[source]
        source: LoaderError,
    },

    /// Figure could not be rendered or saved
    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    /// IO error (writing the report)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a load error for `scenario`
    pub fn load(scenario: impl Into<String>, source: LoaderError) -> Self {
        Self::Load {
            scenario: scenario.into(),
            source,
        }
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::load("Scenario 1 (ATM)", LoaderError::EmptyTable);
        let display = err.to_string();
        assert!(display.contains("Scenario 1 (ATM)"));
        assert!(display.contains("no rows"));
    }
}
