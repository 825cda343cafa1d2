//! Search configuration and boundary validation

use std::collections::HashSet;
use std::ops::RangeInclusive;

use super::error::{HellwigError, HellwigResult};
use super::executor::Parallelism;
use super::scorer::CapacityFormula;

/// Parameters of one Hellwig search, as supplied by the operator.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Smallest number of variables in a combination
    pub min: usize,
    /// Largest number of variables in a combination (`None` = pool size)
    pub max: Option<usize>,
    /// Candidate independent variables (empty = every non-dependent column)
    pub candidates: Vec<String>,
    /// Capacity formula used to score combinations
    pub formula: CapacityFormula,
    /// How scoring work is distributed
    pub parallelism: Parallelism,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: None,
            candidates: Vec::new(),
            formula: CapacityFormula::Reference,
            parallelism: Parallelism::Auto,
        }
    }
}

impl SearchConfig {
    /// Checks that do not need the dataset. Run before the input is opened.
    pub fn validate(&self) -> HellwigResult<()> {
        if self.min < 1 {
            return Err(HellwigError::config("min cannot be smaller than 1"));
        }
        if let Some(max) = self.max {
            if max < self.min {
                return Err(HellwigError::config(format!(
                    "max ({}) cannot be smaller than min ({})",
                    max, self.min
                )));
            }
        }
        Ok(())
    }

    /// Resolve the candidate pool against the dataset's columns.
    ///
    /// The dependent variable must exist and is never part of the pool.
    /// Explicit candidates keep the order they were given in.
    pub fn resolve_pool(&self, columns: &[String], dependent: &str) -> HellwigResult<Vec<String>> {
        if !columns.iter().any(|c| c == dependent) {
            return Err(HellwigError::ColumnNotFound {
                column: dependent.to_string(),
                available: columns.to_vec(),
            });
        }

        if self.candidates.is_empty() {
            return Ok(columns
                .iter()
                .filter(|c| c.as_str() != dependent)
                .cloned()
                .collect());
        }

        let mut seen = HashSet::new();
        for candidate in &self.candidates {
            if candidate == dependent {
                return Err(HellwigError::config(format!(
                    "dependent variable '{}' cannot also be an independent variable",
                    dependent
                )));
            }
            if !columns.contains(candidate) {
                return Err(HellwigError::ColumnNotFound {
                    column: candidate.clone(),
                    available: columns.to_vec(),
                });
            }
            if !seen.insert(candidate.as_str()) {
                return Err(HellwigError::config(format!(
                    "independent variable '{}' listed more than once",
                    candidate
                )));
            }
        }

        Ok(self.candidates.clone())
    }

    /// Turn the configured bounds into concrete sizes for a pool.
    pub fn bounds(&self, pool_size: usize) -> HellwigResult<SizeBounds> {
        SizeBounds::new(self.min, self.max, pool_size)
    }
}

/// Inclusive range of combination sizes to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min: usize,
    pub max: usize,
}

impl SizeBounds {
    /// Validate `1 <= min <= max <= pool_size`, defaulting `max` to the pool size.
    pub fn new(min: usize, max: Option<usize>, pool_size: usize) -> HellwigResult<Self> {
        if min < 1 {
            return Err(HellwigError::config("min cannot be smaller than 1"));
        }
        if pool_size == 0 {
            return Err(HellwigError::config("no independent variables to evaluate"));
        }
        let max = max.unwrap_or(pool_size);
        if min > max {
            return Err(HellwigError::config(format!(
                "max ({}) cannot be smaller than min ({})",
                max, min
            )));
        }
        if max > pool_size {
            return Err(HellwigError::config(format!(
                "max ({}) exceeds the number of independent variables ({})",
                max, pool_size
            )));
        }
        Ok(Self { min, max })
    }

    /// Sizes in ascending order.
    pub fn sizes(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}
