//! Integration tests for loading error sweep tables from disk.

use std::io::Write;

use adapter_loader::{load_error_sweep, ErrorColumn, LoaderError};
use approx::assert_relative_eq;
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes()).expect("Should write CSV");
    file.flush().expect("Should flush CSV");
    file
}

#[test]
fn test_load_sweep_file() {
    let file = write_csv(
        "h_rel,err_D_fd,err_D_cs,err_G_fd,err_G_cs_real,err_G_cs_45\n\
         1.0000000000000000e-16,3.1e-01,2.0e-16,4.0e+14,9.9e+15,1.1e+16\n\
         1.0000000000000000e-10,1.2e-06,1.1e-16,2.3e+02,5.6e+02,1.0e+04\n\
         1.0000000000000000e-04,5.6e-05,1.1e-16,3.0e-05,2.7e-07,1.4e-12\n",
    );

    let table = load_error_sweep(file.path()).expect("Should load table");

    assert_eq!(table.len(), 3);
    assert!(table.is_h_rel_ascending());

    let h_rel: Vec<f64> = table.h_rel().collect();
    assert_relative_eq!(h_rel[0], 1e-16);
    assert_relative_eq!(h_rel[2], 1e-4);

    let gamma_45: Vec<f64> = table.column(ErrorColumn::GammaCs45).collect();
    assert_relative_eq!(gamma_45[2], 1.4e-12);
}

#[test]
fn test_missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("bs_fd_vs_complex_scenario1.csv");

    match load_error_sweep(&path) {
        Err(LoaderError::FileNotFound(reported)) => assert_eq!(reported, path),
        other => panic!("Expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_header_only_file_is_rejected() {
    let file = write_csv("h_rel,err_D_fd,err_D_cs,err_G_fd,err_G_cs_real,err_G_cs_45\n");
    assert!(matches!(
        load_error_sweep(file.path()),
        Err(LoaderError::EmptyTable)
    ));
}

#[test]
fn test_file_without_header_row_is_rejected() {
    let file = write_csv("1e-3,1,1,1,1,1\n1e-2,1,1,1,1,1\n");
    assert!(matches!(
        load_error_sweep(file.path()),
        Err(LoaderError::MissingColumn(_))
    ));
}
