//! End-to-end report run: load, plot, summarise.

use std::io::Write;

use infra_config::ReportConfig;
use tracing::info;

use crate::plot::render_error_grid;
use crate::scenario::load_scenarios;
use crate::summary::StatisticalSummary;
use crate::Result;

/// Run the full report for `config`, writing the console output to `out`.
///
/// The figure is saved before anything is printed; the summary follows the
/// `Plot saved as ...` line. Any load or render failure aborts the run
/// without printing a partial summary.
pub fn run_report<W: Write>(config: &ReportConfig, out: &mut W) -> Result<StatisticalSummary> {
    let scenarios = load_scenarios(&config.scenarios)?;

    render_error_grid(&scenarios, &config.figure)?;
    writeln!(out, "Plot saved as {}", config.figure.output_path.display())?;

    let summary = StatisticalSummary::from_scenarios(&scenarios);
    write!(out, "{}", summary)?;
    out.flush()?;

    info!(
        scenarios = scenarios.len(),
        output = %config.figure.output_path.display(),
        "Report complete"
    );
    Ok(summary)
}
