//! Error types for the Hellwig selection pipeline.
//!
//! Configuration and data errors abort a run. `DegenerateCombination` is a
//! local condition: the search excludes the offending combination and keeps
//! going, failing with `NoValidCombination` only when nothing eligible is left.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while selecting variables with Hellwig's method.
#[derive(Debug, Error)]
pub enum HellwigError {
    /// Invalid size bounds or candidate list.
    ///
    /// Raised before any correlation is computed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A series has fewer than two valid observations.
    #[error(
        "Insufficient data: variable '{variable}' has {observations} valid observation(s), at least 2 are required"
    )]
    InsufficientData {
        /// Name of the offending variable
        variable: String,
        /// Number of non-missing values found
        observations: usize,
    },

    /// Two series overlap on fewer than two rows.
    #[error(
        "Insufficient data: variables '{first}' and '{second}' share {observations} complete row(s), at least 2 are required"
    )]
    InsufficientPairData {
        first: String,
        second: String,
        observations: usize,
    },

    /// The reference denominator of a combination is zero.
    #[error("Degenerate combination {combination:?}: capacity denominator is zero")]
    DegenerateCombination {
        /// Variable names of the combination, in order
        combination: Vec<String>,
    },

    /// Every combination of every requested size was degenerate.
    #[error("No valid combination: every evaluated combination had a zero capacity denominator")]
    NoValidCombination,

    /// A requested column does not exist in the dataset.
    #[error("Column '{column}' not found in dataset. Available columns: {available:?}")]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// Input file extension is not supported.
    #[error("Unsupported file format: {0}. Supported formats: csv, parquet")]
    UnsupportedFormat(String),

    /// Passthrough for polars failures.
    #[error(transparent)]
    Data(#[from] PolarsError),
}

/// Result alias used across the pipeline.
pub type HellwigResult<T> = Result<T, HellwigError>;

impl HellwigError {
    /// Shorthand for building a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        HellwigError::Configuration(message.into())
    }

    /// True for errors that only disqualify a single combination.
    pub fn is_local(&self) -> bool {
        matches!(self, HellwigError::DegenerateCombination { .. })
    }
}
