//! JSON export of selection results

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{
    CapacityFormula, CorrelationMatrix, DependentCorrelations, Selection, SizeBounds,
};

/// Metadata about the selection run
#[derive(Debug, Serialize)]
pub struct SelectionMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Hellwig version
    pub hellwig_version: String,
    /// Input file path
    pub input_file: String,
    /// Dependent variable name
    pub dependent_variable: String,
    /// Capacity formula used for scoring
    pub formula: CapacityFormula,
    /// Smallest evaluated combination size
    pub min_size: usize,
    /// Largest evaluated combination size
    pub max_size: usize,
    /// Candidate independent variables, in pool order
    pub candidates: Vec<String>,
}

/// A member of the selected combination
#[derive(Debug, Serialize)]
pub struct SelectedVariable {
    pub name: String,
    /// Correlation with the dependent variable
    pub dependent_correlation: f64,
    /// Individual information capacity within the combination
    pub capacity: f64,
}

/// Best combination of one size
#[derive(Debug, Serialize)]
pub struct SizeEntry {
    pub size: usize,
    /// `None` when every combination of this size was degenerate
    pub variables: Option<Vec<String>>,
    pub capacity: Option<f64>,
    pub evaluated: u64,
    pub degenerate: u64,
}

/// Complete export document
#[derive(Debug, Serialize)]
pub struct SelectionExport {
    pub metadata: SelectionMetadata,
    pub variables: Vec<SelectedVariable>,
    pub capacity: f64,
    pub per_size: Vec<SizeEntry>,
}

/// Parameters recorded in the export metadata
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub formula: CapacityFormula,
    pub bounds: SizeBounds,
}

/// Assemble the export document.
pub fn build_export(
    selection: &Selection,
    matrix: &CorrelationMatrix,
    dependent: &DependentCorrelations,
    params: &ExportParams,
) -> SelectionExport {
    let variables = selection
        .variables
        .iter()
        .zip(selection.best.indices.iter())
        .zip(selection.best.individual.iter())
        .map(|((name, &index), &capacity)| SelectedVariable {
            name: name.clone(),
            dependent_correlation: dependent.get(index),
            capacity,
        })
        .collect();

    let per_size = selection
        .per_size
        .iter()
        .map(|outcome| SizeEntry {
            size: outcome.size,
            variables: outcome.best.as_ref().map(|b| b.names(matrix)),
            capacity: outcome.best.as_ref().map(|b| b.capacity),
            evaluated: outcome.evaluated,
            degenerate: outcome.degenerate,
        })
        .collect();

    SelectionExport {
        metadata: SelectionMetadata {
            timestamp: Utc::now().to_rfc3339(),
            hellwig_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            dependent_variable: dependent.dependent().to_string(),
            formula: params.formula,
            min_size: params.bounds.min,
            max_size: params.bounds.max,
            candidates: matrix.names().to_vec(),
        },
        variables,
        capacity: selection.capacity(),
        per_size,
    }
}

/// Write the selection result to a JSON file.
pub fn export_selection(
    selection: &Selection,
    matrix: &CorrelationMatrix,
    dependent: &DependentCorrelations,
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let export = build_export(selection, matrix, dependent, params);

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize selection result to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write selection result to {}",
            output_path.display()
        )
    })?;

    Ok(())
}
