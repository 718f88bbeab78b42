//! Loaded scenarios: a label paired with its error sweep table.

use adapter_loader::{load_error_sweep, ErrorSweepTable};
use infra_config::ScenarioSource;
use tracing::debug;

use crate::{CliError, Result};

/// One scenario ready for plotting and aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Display label, e.g. `Scenario 1 (ATM)`
    pub label: String,
    /// Error sweep of this scenario
    pub table: ErrorSweepTable,
}

impl Scenario {
    /// Pair a label with a table
    pub fn new(label: impl Into<String>, table: ErrorSweepTable) -> Self {
        Self {
            label: label.into(),
            table,
        }
    }
}

/// Load every configured scenario, in order.
///
/// Fails on the first scenario that cannot be loaded.
pub fn load_scenarios(sources: &[ScenarioSource]) -> Result<Vec<Scenario>> {
    sources
        .iter()
        .map(|source| {
            debug!(scenario = %source.label, path = %source.path.display(), "Loading scenario");
            load_error_sweep(&source.path)
                .map(|table| Scenario::new(source.label.clone(), table))
                .map_err(|e| CliError::load(source.label.clone(), e))
        })
        .collect()
}
