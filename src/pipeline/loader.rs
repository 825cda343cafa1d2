//! Dataset loader for CSV and Parquet files
//!
//! Every column is coerced to `f64`; cells that are missing or cannot be read
//! as numbers become `None`. CSV columns are always read as text so that a
//! stray non-numeric cell anywhere in the file never fails the scan.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use super::correlation::NumericColumn;
use super::error::{HellwigError, HellwigResult};
use crate::utils::{create_spinner, finish_with_success};

/// CSV parsing options. Defaults follow the European convention
/// (`;` between fields, `,` as decimal separator).
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub decimal_comma: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            decimal_comma: true,
        }
    }
}

impl CsvOptions {
    /// Build options from single-character delimiter and decimal separator.
    pub fn new(delimiter: char, decimal: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            anyhow::bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
        }
        let decimal_comma = match decimal {
            '.' => false,
            ',' => true,
            other => anyhow::bail!(
                "Unsupported decimal separator '{}'. Use '.' or ','",
                other
            ),
        };
        if decimal_comma && delimiter == ',' {
            anyhow::bail!("Decimal separator ',' cannot be used with ',' as the delimiter");
        }
        Ok(Self {
            delimiter: delimiter as u8,
            decimal_comma,
        })
    }

    fn decimal(&self) -> char {
        if self.decimal_comma {
            ','
        } else {
            '.'
        }
    }
}

fn scan(path: &Path, options: &CsvOptions) -> Result<LazyFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        "csv" | "txt" => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_separator(options.delimiter)
            .with_decimal_comma(options.decimal_comma)
            // No inference: every column stays String for `parse_cell`
            .with_infer_schema_length(Some(0))
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => return Err(HellwigError::UnsupportedFormat(extension).into()),
    };

    Ok(lf)
}

/// Read only the column names of a dataset.
pub fn get_column_names(path: &Path, options: &CsvOptions) -> Result<Vec<String>> {
    let schema = scan(path, options)?
        .collect_schema()
        .with_context(|| format!("Failed to read schema of {}", path.display()))?;
    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}

/// Load a dataset into memory.
pub fn load_dataset(path: &Path, options: &CsvOptions) -> Result<DataFrame> {
    scan(path, options)?
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))
}

/// Load a dataset with a spinner, returning the frame, row count, column
/// count and estimated memory in MB.
pub fn load_dataset_with_progress(
    path: &Path,
    options: &CsvOptions,
) -> Result<(DataFrame, usize, usize, f64)> {
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(path, options)?;
    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    finish_with_success(&spinner, &format!("Loaded {} rows", rows));
    Ok((df, rows, cols, memory_mb))
}

/// Parse a textual cell, accepting the configured decimal separator.
fn parse_cell(raw: &str, decimal: char) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = if decimal == ',' {
        trimmed.replace(',', ".").parse::<f64>().ok()
    } else {
        trimmed.parse::<f64>().ok()
    };
    value.filter(|v| v.is_finite())
}

/// Coerce one DataFrame column to numeric values.
pub fn numeric_column(df: &DataFrame, name: &str, decimal: char) -> HellwigResult<NumericColumn> {
    let column = df.column(name).map_err(|_| HellwigError::ColumnNotFound {
        column: name.to_string(),
        available: df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })?;

    let values: Vec<Option<f64>> = if column.dtype() == &DataType::String {
        column
            .as_materialized_series()
            .str()?
            .iter()
            .map(|cell| cell.and_then(|s| parse_cell(s, decimal)))
            .collect()
    } else {
        let float_col = column.cast(&DataType::Float64)?;
        float_col
            .f64()?
            .iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect()
    };

    Ok(NumericColumn::new(name, values))
}

/// Extract the dependent series and the candidate pool as numeric columns.
pub fn extract_numeric_columns(
    df: &DataFrame,
    dependent: &str,
    pool: &[String],
    options: &CsvOptions,
) -> HellwigResult<(NumericColumn, Vec<NumericColumn>)> {
    let decimal = options.decimal();
    let y = numeric_column(df, dependent, decimal)?;
    let xs = pool
        .iter()
        .map(|name| numeric_column(df, name, decimal))
        .collect::<HellwigResult<Vec<_>>>()?;
    Ok((y, xs))
}
