//! Integration tests for the report pipeline over on-disk sweep files.

use std::fs;
use std::path::Path;

use adapter_loader::ErrorColumn;
use approx::assert_relative_eq;
use infra_config::{ReportConfig, ScenarioSource};
use service_cli::{load_scenarios, run_report, CliError, StatisticalSummary};

const HEADER: &str = "h_rel,err_D_fd,err_D_cs,err_G_fd,err_G_cs_real,err_G_cs_45\n";

fn write_sweep(dir: &Path, name: &str, rows: &[&str]) -> ScenarioSource {
    let path = dir.join(name);
    let mut content = HEADER.to_string();
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).expect("Should write sweep CSV");
    ScenarioSource::new(name.trim_end_matches(".csv"), path)
}

fn two_scenarios(dir: &Path) -> Vec<ScenarioSource> {
    vec![
        write_sweep(
            dir,
            "atm.csv",
            &[
                "1e-12,1e-4,1e-16,1e+2,1e+3,1e+4",
                "1e-8,1e-8,2e-16,1e-2,1e-3,1e-4",
                "1e-4,1e-6,1e-16,1e-6,1e-8,1e-10",
            ],
        ),
        write_sweep(
            dir,
            "near_expiry.csv",
            &[
                "1e-12,3e-2,5e-15,7e+5,2e+6,8e+6",
                "1e-6,4e-5,5e-15,2e-1,3e-1,4e-1",
                "1e-2,9e-1,5e-15,6e-1,6e-3,6e-5",
            ],
        ),
    ]
}

#[test]
fn test_load_scenarios_in_order() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let scenarios = load_scenarios(&two_scenarios(dir.path())).expect("Should load");

    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].label, "atm");
    assert_eq!(scenarios[1].label, "near_expiry");
    assert_eq!(scenarios[1].table.len(), 3);
}

#[test]
fn test_scenarios_are_summarised_independently() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let scenarios = load_scenarios(&two_scenarios(dir.path())).expect("Should load");
    let summary = StatisticalSummary::from_scenarios(&scenarios);

    let atm = summary.scenarios[0]
        .column(ErrorColumn::DeltaFd)
        .and_then(|c| c.minimum)
        .expect("Should have a minimum");
    assert_relative_eq!(atm.min_error, 1e-8);
    assert_relative_eq!(atm.h_rel, 1e-8);

    let near = summary.scenarios[1]
        .column(ErrorColumn::DeltaFd)
        .and_then(|c| c.minimum)
        .expect("Should have a minimum");
    assert_relative_eq!(near.min_error, 4e-5);
    assert_relative_eq!(near.h_rel, 1e-6);

    // Constant column: first row wins
    let cs = summary.scenarios[1]
        .column(ErrorColumn::DeltaCs)
        .and_then(|c| c.minimum)
        .expect("Should have a minimum");
    assert_eq!(cs.row, 0);
    assert_relative_eq!(cs.h_rel, 1e-12);
}

#[test]
fn test_summary_is_repeatable() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let sources = two_scenarios(dir.path());

    let first = StatisticalSummary::from_scenarios(&load_scenarios(&sources).unwrap()).to_string();
    let second = StatisticalSummary::from_scenarios(&load_scenarios(&sources).unwrap()).to_string();

    assert_eq!(first, second);
    assert!(first.contains("Scenario 1:"));
    assert!(first.contains("Scenario 2:"));
    assert!(first.contains("  Gamma CS-45°: 1.00e-10\n"));
    assert!(first.contains("  FD:  Min error = 1.00e-08 at h_rel = 1.00e-08\n"));
}

#[test]
fn test_second_scenario_failure_names_it() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let mut sources = two_scenarios(dir.path());
    fs::write(&sources[1].path, "h_rel,err_D_fd\n1e-4,1e-6\n").unwrap();
    sources[1].label = "Scenario 2 (Near-expiry, low-vol)".to_string();

    match load_scenarios(&sources) {
        Err(CliError::Load { scenario, .. }) => {
            assert_eq!(scenario, "Scenario 2 (Near-expiry, low-vol)")
        }
        other => panic!("Expected load error, got {:?}", other),
    }
}

#[test]
#[ignore = "Requires system fonts"]
fn test_run_report_end_to_end() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let mut config = ReportConfig::default();
    config.scenarios = two_scenarios(dir.path());
    config.figure.output_path = dir.path().join("greeks_error_analysis.png");
    config.figure.dpi = 50;

    let mut out = Vec::new();
    let summary = run_report(&config, &mut out).expect("Should run report");
    let printed = String::from_utf8(out).unwrap();

    assert!(config.figure.output_path.exists());
    assert!(printed.starts_with(&format!(
        "Plot saved as {}\n",
        config.figure.output_path.display()
    )));
    assert!(printed.ends_with(&summary.to_string()));
}

#[test]
#[ignore = "Requires system fonts"]
fn test_run_report_with_all_zero_delta_columns() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let mut config = ReportConfig::default();
    config.scenarios = two_scenarios(dir.path());
    config.scenarios[0] = write_sweep(
        dir.path(),
        "exact_delta.csv",
        &["1e-8,0,0,1e-2,1e-3,1e-4", "1e-4,0,0,1e-6,1e-8,1e-10"],
    );
    config.figure.output_path = dir.path().join("greeks_error_analysis.png");
    config.figure.dpi = 50;

    let mut out = Vec::new();
    run_report(&config, &mut out).expect("Empty panels should still render");
    let printed = String::from_utf8(out).unwrap();

    assert!(config.figure.output_path.exists());
    assert!(printed.contains("STATISTICAL SUMMARY"));
    assert!(printed.contains("  FD:  Min error = 0.00e+00 at h_rel = 1.00e-08\n"));
    assert!(printed.contains("  Delta CS:     0.00e+00\n"));
}
