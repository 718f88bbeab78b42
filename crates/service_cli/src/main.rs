//! greeks-report - Greeks step-size error report
//!
//! Renders the FD/CS error sweeps of both scenarios to a PNG grid and prints
//! the statistical summary to stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! greeks-report [--config greeks_report.toml] [--output grid.png] [--verbose]
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use infra_config::ReportConfig;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Greeks FD vs complex-step error report
#[derive(Parser)]
#[command(name = "greeks-report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path (defaults are used when the file is absent)
    #[arg(short, long, default_value = "greeks_report.toml")]
    config: PathBuf,

    /// Override the figure output path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ReportConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(output) = cli.output {
        config.figure.output_path = output;
    }
    config.validate()?;

    // Initialise tracing; RUST_LOG wins over the configured level
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = ?config, "Resolved configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    service_cli::run_report(&config, &mut out)?;
    out.flush()?;

    Ok(())
}
