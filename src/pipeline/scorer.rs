//! Hellwig information capacity scoring
//!
//! For a combination `C = {v_1, ..., v_k}` the individual capacity of a member
//! is its squared correlation with the dependent variable divided by a
//! correlation-based denominator, and the total capacity `H(C)` is the sum of
//! individual capacities.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::correlation::{CorrelationMatrix, DependentCorrelations};
use super::error::{HellwigError, HellwigResult};

/// Denominator used for individual capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityFormula {
    /// `D = Σ |corr(v_1, v)|`, anchored on the first member and shared by all
    #[default]
    Reference,
    /// `D_j = Σ |corr(v_j, v)|`, recomputed for each member
    Classical,
}

impl fmt::Display for CapacityFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityFormula::Reference => write!(f, "reference"),
            CapacityFormula::Classical => write!(f, "classical"),
        }
    }
}

impl FromStr for CapacityFormula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reference" | "ref" => Ok(CapacityFormula::Reference),
            "classical" | "classic" => Ok(CapacityFormula::Classical),
            _ => Err(format!(
                "Invalid capacity formula '{}'. Use 'reference' or 'classical'",
                s
            )),
        }
    }
}

/// A combination together with its capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCombination {
    /// Pool indices, in combination order
    pub indices: Vec<usize>,
    /// Individual capacity of each member, aligned with `indices`
    pub individual: Vec<f64>,
    /// Total capacity `H(C)`
    pub capacity: f64,
}

impl ScoredCombination {
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// Resolve member indices to variable names.
    pub fn names(&self, matrix: &CorrelationMatrix) -> Vec<String> {
        self.indices
            .iter()
            .map(|&i| matrix.names()[i].clone())
            .collect()
    }
}

/// Scores combinations against shared, read-only correlation inputs.
#[derive(Debug, Clone, Copy)]
pub struct HellwigScorer<'a> {
    matrix: &'a CorrelationMatrix,
    dependent: &'a DependentCorrelations,
    formula: CapacityFormula,
}

impl<'a> HellwigScorer<'a> {
    pub fn new(
        matrix: &'a CorrelationMatrix,
        dependent: &'a DependentCorrelations,
        formula: CapacityFormula,
    ) -> Self {
        Self {
            matrix,
            dependent,
            formula,
        }
    }

    pub fn matrix(&self) -> &'a CorrelationMatrix {
        self.matrix
    }

    /// Sum of absolute correlations between `anchor` and every member.
    fn denominator(&self, anchor: usize, combination: &[usize]) -> f64 {
        combination
            .iter()
            .map(|&v| self.matrix.get(anchor, v).abs())
            .sum()
    }

    fn degenerate(&self, combination: &[usize]) -> HellwigError {
        HellwigError::DegenerateCombination {
            combination: combination
                .iter()
                .map(|&i| self.matrix.names()[i].clone())
                .collect(),
        }
    }

    /// Compute individual and total capacity of one combination.
    ///
    /// Fails with `DegenerateCombination` when a denominator is not strictly
    /// positive (zero, or NaN from undefined correlations).
    pub fn score(&self, combination: &[usize]) -> HellwigResult<ScoredCombination> {
        let Some(&reference) = combination.first() else {
            return Err(HellwigError::config("cannot score an empty combination"));
        };

        let individual: Vec<f64> = match self.formula {
            CapacityFormula::Reference => {
                let d = self.denominator(reference, combination);
                if !(d > 0.0) {
                    return Err(self.degenerate(combination));
                }
                combination
                    .iter()
                    .map(|&v| self.dependent.get(v).powi(2) / d)
                    .collect()
            }
            CapacityFormula::Classical => combination
                .iter()
                .map(|&v| {
                    let d = self.denominator(v, combination);
                    if d > 0.0 {
                        Ok(self.dependent.get(v).powi(2) / d)
                    } else {
                        Err(self.degenerate(combination))
                    }
                })
                .collect::<HellwigResult<_>>()?,
        };

        let capacity = individual.iter().sum();
        Ok(ScoredCombination {
            indices: combination.to_vec(),
            individual,
            capacity,
        })
    }
}
