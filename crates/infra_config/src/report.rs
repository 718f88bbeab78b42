//! Report configuration management.
//!
//! Handles loading of the report configuration from an optional TOML file.
//! Every field has a default, so a partial file only overrides what it names.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of scenarios the 2x2 error grid is laid out for.
pub const SCENARIO_COUNT: usize = 2;

const MAX_DPI: u32 = 1200;

/// Largest figure side in pixels accepted by `validate`.
pub const MAX_PIXEL_SIDE: u32 = 20_000;

/// One scenario input: a display label and the CSV file holding its sweep.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioSource {
    /// Label used in panel titles, e.g. `Scenario 1 (ATM)`
    pub label: String,

    /// Path of the error sweep CSV
    pub path: PathBuf,
}

impl ScenarioSource {
    /// Create a scenario source
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Output figure settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FigureConfig {
    /// PNG output path, overwritten on every run
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Figure width in inches
    #[serde(default = "default_width_in")]
    pub width_in: f64,

    /// Figure height in inches
    #[serde(default = "default_height_in")]
    pub height_in: f64,

    /// Resolution in dots per inch
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Figure title drawn above the grid
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("greeks_error_analysis.png")
}

fn default_width_in() -> f64 {
    14.0
}

fn default_height_in() -> f64 {
    10.0
}

fn default_dpi() -> u32 {
    300
}

fn default_title() -> String {
    "Black-Scholes Greeks: Error Analysis vs Step Size".to_string()
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            width_in: default_width_in(),
            height_in: default_height_in(),
            dpi: default_dpi(),
            title: default_title(),
        }
    }
}

impl FigureConfig {
    /// Figure size in pixels (`inches * dpi`, rounded)
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    /// Convert a typographic size in points (1/72 inch) to pixels at this dpi
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportConfig {
    /// Scenario inputs in report order
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<ScenarioSource>,

    /// Figure output settings
    #[serde(default)]
    pub figure: FigureConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_scenarios() -> Vec<ScenarioSource> {
    vec![
        ScenarioSource::new("Scenario 1 (ATM)", "bs_fd_vs_complex_scenario1.csv"),
        ScenarioSource::new(
            "Scenario 2 (Near-expiry, low-vol)",
            "bs_fd_vs_complex_scenario2.csv",
        ),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            scenarios: default_scenarios(),
            figure: FigureConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path` if it exists, defaults otherwise.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.scenarios.len() != SCENARIO_COUNT {
            errors.push(format!(
                "Expected {} scenarios, found {}",
                SCENARIO_COUNT,
                self.scenarios.len()
            ));
        }

        for (index, scenario) in self.scenarios.iter().enumerate() {
            if scenario.label.trim().is_empty() {
                errors.push(format!("scenarios[{}].label cannot be empty", index));
            }
            if scenario.path.as_os_str().is_empty() {
                errors.push(format!("scenarios[{}].path cannot be empty", index));
            }
        }

        let figure = &self.figure;
        if figure.output_path.as_os_str().is_empty() {
            errors.push("figure.output_path cannot be empty".to_string());
        }
        if !(figure.width_in.is_finite() && figure.width_in > 0.0) {
            errors.push(format!(
                "figure.width_in must be positive, got {}",
                figure.width_in
            ));
        }
        if !(figure.height_in.is_finite() && figure.height_in > 0.0) {
            errors.push(format!(
                "figure.height_in must be positive, got {}",
                figure.height_in
            ));
        }
        if figure.dpi == 0 || figure.dpi > MAX_DPI {
            errors.push(format!(
                "figure.dpi {} outside allowed range 1..={}",
                figure.dpi, MAX_DPI
            ));
        }
        // Checked in floating point: `pixel_size` saturates.
        let dpi = f64::from(figure.dpi);
        for (name, inches) in [("width", figure.width_in), ("height", figure.height_in)] {
            let pixels = inches * dpi;
            if pixels.is_finite() && pixels.round() > f64::from(MAX_PIXEL_SIDE) {
                errors.push(format!(
                    "figure {} of {} px exceeds the maximum of {} px",
                    name, pixels, MAX_PIXEL_SIDE
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load configuration (or defaults) and validate
    pub fn load_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
