//! Shared test utilities and fixture generators
#![allow(dead_code)]

use hellwig::pipeline::{
    compute_correlations, CorrelationMatrix, DependentCorrelations, NumericColumn,
};
use indicatif::ProgressBar;
use polars::prelude::*;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tempfile::TempDir;

/// Two-variable pool with known correlations:
/// `corr(A,B) = 0.5`, `corr(Y,A) = 0.8`, `corr(Y,B) = 0.6`.
pub fn two_variable_scenario() -> (CorrelationMatrix, DependentCorrelations) {
    let matrix = CorrelationMatrix::from_rows(
        vec!["A".to_string(), "B".to_string()],
        &[vec![1.0, 0.5], vec![0.5, 1.0]],
    )
    .unwrap();
    let dependent = DependentCorrelations::new("Y", vec![0.8, 0.6]);
    (matrix, dependent)
}

/// Build correlation inputs directly from rows of a matrix.
pub fn inputs_from(
    names: &[&str],
    rows: &[Vec<f64>],
    dependent: &[f64],
) -> (CorrelationMatrix, DependentCorrelations) {
    let matrix = CorrelationMatrix::from_rows(
        names.iter().map(|s| s.to_string()).collect(),
        rows,
    )
    .unwrap();
    (matrix, DependentCorrelations::new("y", dependent.to_vec()))
}

/// A DataFrame with a dependent column `y` and four predictors.
///
/// - `x1`: y plus small noise (strong predictor)
/// - `x2`: exactly 2 * x1 (collinear with x1)
/// - `x3`: decreasing sequence (negative association)
/// - `x4`: shuffled values (weak association)
pub fn create_test_dataframe() -> DataFrame {
    df! {
        "y" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "x1" => [1.1f64, 1.9, 3.2, 3.9, 5.1, 6.0, 6.8, 8.2, 9.1, 9.9],
        "x2" => [2.2f64, 3.8, 6.4, 7.8, 10.2, 12.0, 13.6, 16.4, 18.2, 19.8],
        "x3" => [10.0f64, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
        "x4" => [5.0f64, 1.0, 8.0, 2.0, 9.0, 3.0, 7.0, 4.0, 6.0, 0.0],
    }
    .unwrap()
}

/// Random numeric columns: a dependent `y` and `n` predictors, each a noisy
/// mix of `y` so correlations vary.
pub fn random_columns(rows: usize, n: usize, seed: u64) -> (NumericColumn, Vec<NumericColumn>) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let y: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>() * 10.0).collect();
    let xs = (0..n)
        .map(|i| {
            let weight = rng.gen::<f64>();
            let values: Vec<f64> = y
                .iter()
                .map(|v| weight * v + (1.0 - weight) * rng.gen::<f64>() * 10.0)
                .collect();
            NumericColumn::from_values(format!("x{}", i + 1), &values)
        })
        .collect();
    (NumericColumn::from_values("y", &y), xs)
}

/// Correlation inputs computed from [`random_columns`].
pub fn random_inputs(rows: usize, n: usize, seed: u64) -> (CorrelationMatrix, DependentCorrelations) {
    let (y, xs) = random_columns(rows, n, seed);
    compute_correlations(&y, &xs, &ProgressBar::hidden()).unwrap()
}

/// Create a temporary directory with a CSV file written from raw text
pub fn create_raw_csv(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// Create a temporary directory with a `;`-separated CSV file using `.` decimals
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file)
        .with_separator(b';')
        .finish(df)
        .unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert two floats agree to within `tol`
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "Expected {} (±{}), got {}",
        expected,
        tol,
        actual
    );
}
