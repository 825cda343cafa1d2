//! End-to-end tests running the hellwig binary

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "common/mod.rs"]
mod common;

use common::*;

fn hellwig() -> Command {
    Command::cargo_bin("hellwig").unwrap()
}

#[test]
fn test_min_zero_fails_before_reading_dataset() {
    hellwig()
        .args(["does_not_exist.csv", "y", "--min", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min cannot be smaller than 1"));
}

#[test]
fn test_quiet_run_prints_selection() {
    let mut df = create_test_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    hellwig()
        .arg(&csv_path)
        .args(["y", "-s", ".", "--max", "1", "--quiet", "--no-confirm"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[x3] "));
}

#[test]
fn test_explicit_independent_variables() {
    let mut df = create_test_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    hellwig()
        .arg(&csv_path)
        .args(["y", "-s", ".", "-i", "x2", "x4", "--max", "1", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[x2] "));
}

#[test]
fn test_unknown_dependent_variable() {
    let mut df = create_test_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    hellwig()
        .arg(&csv_path)
        .args(["target", "-s", ".", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Column 'target' not found"));
}

#[test]
fn test_max_exceeding_pool_fails() {
    let mut df = create_test_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    hellwig()
        .arg(&csv_path)
        .args(["y", "-s", ".", "--max", "9", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the number of independent variables"));
}

#[test]
fn test_json_output() {
    let mut df = create_test_dataframe();
    let (temp_dir, csv_path) = create_temp_csv(&mut df);
    let output = temp_dir.path().join("result.json");

    hellwig()
        .arg(&csv_path)
        .args(["y", "-s", ".", "--quiet", "--sequential", "-o"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["metadata"]["dependent_variable"], "y");
    assert_eq!(json["per_size"].as_array().unwrap().len(), 4);
    assert!(json["capacity"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_confirmation_required_without_terminal() {
    let mut df = create_test_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    hellwig()
        .arg(&csv_path)
        .args(["y", "-s", ".", "--quiet", "--confirm-threshold", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-confirm"));
}
