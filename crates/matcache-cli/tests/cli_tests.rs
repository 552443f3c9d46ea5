//! End-to-end tests for the matcache binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn write_matrix(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write matrix");
    file
}

#[test]
fn test_inverts_diagonal_matrix() {
    let input = write_matrix("[[2.0, 0.0], [0.0, 4.0]]");

    Command::cargo_bin("matcache")
        .unwrap()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Inverse"))
        .stdout(predicate::str::contains("Cache:"));
}

#[test]
fn test_json_output_reports_inverse_and_stats() {
    let input = write_matrix("[[2.0, 0.0], [0.0, 4.0]]");

    let output = Command::cargo_bin("matcache")
        .unwrap()
        .arg(input.path())
        .args(["--repeat", "3", "--json"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid JSON report");
    assert_eq!(report["inverse"][0][0], 0.5);
    assert_eq!(report["inverse"][1][1], 0.25);
    assert_eq!(report["stats"]["misses"], 1);
    assert_eq!(report["stats"]["hits"], 2);
}

#[test]
fn test_verify_reports_deviation() {
    let input = write_matrix("[[4.0, 7.0], [2.0, 6.0]]");

    let output = Command::cargo_bin("matcache")
        .unwrap()
        .arg(input.path())
        .args(["--verify", "--json"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("valid JSON report");
    let deviation = report["max_identity_deviation"]
        .as_f64()
        .expect("deviation present");
    assert!(deviation < 1e-9);
}

#[test]
fn test_reads_matrix_from_stdin() {
    Command::cargo_bin("matcache")
        .unwrap()
        .arg("-")
        .write_stdin("[[1.0]]")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inverse"));
}

#[test]
fn test_singular_matrix_fails_with_error() {
    let input = write_matrix("[[1.0, 2.0], [2.0, 4.0]]");

    Command::cargo_bin("matcache")
        .unwrap()
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVERT_SINGULAR"));
}

#[test]
fn test_non_square_matrix_fails_with_error() {
    let input = write_matrix("[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]");

    Command::cargo_bin("matcache")
        .unwrap()
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVERT_NON_SQUARE"));
}

#[test]
fn test_malformed_input_fails_cleanly() {
    let input = write_matrix("not json");

    Command::cargo_bin("matcache")
        .unwrap()
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse matrix"));
}
