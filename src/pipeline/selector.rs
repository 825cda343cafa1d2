//! Global selection across subset sizes

use indicatif::ProgressBar;

use super::config::{SearchConfig, SizeBounds};
use super::correlation::{CorrelationMatrix, DependentCorrelations};
use super::error::{HellwigError, HellwigResult};
use super::executor::Executor;
use super::optimizer::{best_for_size, SizeOutcome};
use super::scorer::{HellwigScorer, ScoredCombination};

/// Final output of a Hellwig search.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Winning combination
    pub best: ScoredCombination,
    /// Variable names of the winning combination, in order
    pub variables: Vec<String>,
    /// Per-size outcomes in ascending size order
    pub per_size: Vec<SizeOutcome>,
}

impl Selection {
    pub fn capacity(&self) -> f64 {
        self.best.capacity
    }

    pub fn total_evaluated(&self) -> u64 {
        self.per_size.iter().map(|o| o.evaluated).sum()
    }

    pub fn total_degenerate(&self) -> u64 {
        self.per_size.iter().map(|o| o.degenerate).sum()
    }
}

/// Pick the overall best from per-size outcomes given in ascending size order.
///
/// A later size replaces the incumbent only with strictly greater capacity,
/// so ties go to the smallest size.
pub fn select_global(outcomes: &[SizeOutcome]) -> HellwigResult<&ScoredCombination> {
    outcomes
        .iter()
        .filter_map(|o| o.best.as_ref())
        .fold(None, |best: Option<&ScoredCombination>, candidate| match best {
            Some(b) if candidate.capacity <= b.capacity => Some(b),
            _ => Some(candidate),
        })
        .ok_or(HellwigError::NoValidCombination)
}

/// Evaluate every size in `bounds` and return the global optimum.
///
/// `pb` is advanced once per scored combination.
pub fn run_search(
    matrix: &CorrelationMatrix,
    dependent: &DependentCorrelations,
    config: &SearchConfig,
    bounds: SizeBounds,
    pb: &ProgressBar,
) -> HellwigResult<Selection> {
    if dependent.is_empty() || dependent.len() != matrix.len() {
        return Err(HellwigError::config(format!(
            "{} dependent correlations for {} independent variables",
            dependent.len(),
            matrix.len()
        )));
    }
    if bounds.max > matrix.len() {
        return Err(HellwigError::config(format!(
            "max ({}) exceeds the number of independent variables ({})",
            bounds.max,
            matrix.len()
        )));
    }

    let scorer = HellwigScorer::new(matrix, dependent, config.formula);
    let executor = Executor::new(config.parallelism)?;

    let per_size = bounds
        .sizes()
        .map(|k| best_for_size(&scorer, k, &executor, pb))
        .collect::<HellwigResult<Vec<_>>>()?;

    let best = select_global(&per_size)?.clone();
    let variables = best.names(matrix);

    Ok(Selection {
        best,
        variables,
        per_size,
    })
}
