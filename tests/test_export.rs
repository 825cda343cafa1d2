//! Tests for result presentation and JSON export

use hellwig::pipeline::{run_search, CapacityFormula, SearchConfig};
use hellwig::report::{
    build_export, build_member_table, build_size_table, export_selection, format_plain,
    ExportParams,
};
use indicatif::ProgressBar;

#[path = "common/mod.rs"]
mod common;

use common::*;

fn scenario_selection() -> (
    hellwig::pipeline::CorrelationMatrix,
    hellwig::pipeline::DependentCorrelations,
    hellwig::pipeline::Selection,
    hellwig::pipeline::SizeBounds,
) {
    let (matrix, dependent) = two_variable_scenario();
    let config = SearchConfig::default();
    let bounds = config.bounds(matrix.len()).unwrap();
    let selection =
        run_search(&matrix, &dependent, &config, bounds, &ProgressBar::hidden()).unwrap();
    (matrix, dependent, selection, bounds)
}

#[test]
fn test_format_plain() {
    let (_, _, selection, _) = scenario_selection();
    let line = format_plain(&selection);

    assert!(line.starts_with("[A, B] 0.666"), "Unexpected output: {}", line);
}

#[test]
fn test_size_table_has_row_per_size() {
    let (matrix, _, selection, _) = scenario_selection();
    let rendered = build_size_table(&selection, &matrix).to_string();

    assert!(rendered.contains("0.640000"));
    assert!(rendered.contains("0.666667"));
    assert!(rendered.contains("A, B"));
}

#[test]
fn test_member_table_lists_individual_capacities() {
    let (_, dependent, selection, _) = scenario_selection();
    let rendered = build_member_table(&selection, &dependent).to_string();

    assert!(rendered.contains("r(Y)"));
    assert!(rendered.contains("+0.8000"));
    assert!(rendered.contains("0.426667"));
    assert!(rendered.contains("0.240000"));
}

#[test]
fn test_build_export_contents() {
    let (matrix, dependent, selection, bounds) = scenario_selection();
    let export = build_export(
        &selection,
        &matrix,
        &dependent,
        &ExportParams {
            input_file: "data.csv",
            formula: CapacityFormula::Reference,
            bounds,
        },
    );

    let json = serde_json::to_value(&export).unwrap();

    assert_eq!(json["metadata"]["dependent_variable"], "Y");
    assert_eq!(json["metadata"]["formula"], "reference");
    assert_eq!(json["metadata"]["min_size"], 1);
    assert_eq!(json["metadata"]["max_size"], 2);
    assert_eq!(json["variables"][0]["name"], "A");
    assert_eq!(json["variables"][1]["name"], "B");
    assert_eq!(json["per_size"].as_array().unwrap().len(), 2);
    assert_eq!(json["per_size"][0]["variables"][0], "A");
    assert_close(json["capacity"].as_f64().unwrap(), 1.0 / 1.5, 1e-12);
}

#[test]
fn test_export_selection_writes_file() {
    let (matrix, dependent, selection, bounds) = scenario_selection();
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("result.json");

    export_selection(
        &selection,
        &matrix,
        &dependent,
        &path,
        &ExportParams {
            input_file: "data.csv",
            formula: CapacityFormula::Reference,
            bounds,
        },
    )
    .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["metadata"]["input_file"], "data.csv");
    assert!(json["metadata"]["timestamp"].is_string());
}
