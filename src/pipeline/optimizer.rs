//! Best combination for a single subset size

use indicatif::ProgressBar;
use rayon::prelude::*;

use super::combinations::Combinations;
use super::error::HellwigResult;
use super::executor::Executor;
use super::scorer::{HellwigScorer, ScoredCombination};

/// Result of scanning every combination of one size.
#[derive(Debug, Clone)]
pub struct SizeOutcome {
    pub size: usize,
    /// Highest-capacity eligible combination, if any
    pub best: Option<ScoredCombination>,
    /// Combinations scored (degenerate ones included)
    pub evaluated: u64,
    /// Combinations excluded for a zero denominator
    pub degenerate: u64,
}

/// Partial reduction state. Carries the enumeration order of the incumbent
/// so that merging in any grouping keeps the first-seen winner on ties.
#[derive(Debug, Default)]
struct Accumulator {
    best: Option<(u64, ScoredCombination)>,
    evaluated: u64,
    degenerate: u64,
}

impl Accumulator {
    fn single(order: u64, scored: HellwigResult<ScoredCombination>) -> HellwigResult<Self> {
        let mut acc = Accumulator {
            evaluated: 1,
            ..Default::default()
        };
        match scored {
            Ok(s) if s.capacity.is_finite() => acc.best = Some((order, s)),
            Ok(_) => acc.degenerate = 1,
            Err(e) if e.is_local() => acc.degenerate = 1,
            Err(e) => return Err(e),
        }
        Ok(acc)
    }

    fn merge(self, other: Self) -> Self {
        let best = match (self.best, other.best) {
            (Some(a), Some(b)) => Some(better(a, b)),
            (a, b) => a.or(b),
        };
        Accumulator {
            best,
            evaluated: self.evaluated + other.evaluated,
            degenerate: self.degenerate + other.degenerate,
        }
    }
}

/// Strictly higher capacity wins; equal capacity goes to the earlier order.
fn better(
    a: (u64, ScoredCombination),
    b: (u64, ScoredCombination),
) -> (u64, ScoredCombination) {
    let b_wins = b.1.capacity > a.1.capacity || (b.1.capacity == a.1.capacity && b.0 < a.0);
    if b_wins {
        b
    } else {
        a
    }
}

/// Evaluate all `k`-combinations of the scorer's pool and keep the best.
///
/// The result is identical whether `executor` is parallel or sequential.
pub fn best_for_size(
    scorer: &HellwigScorer<'_>,
    k: usize,
    executor: &Executor,
    pb: &ProgressBar,
) -> HellwigResult<SizeOutcome> {
    let n = scorer.matrix().len();
    let combinations = Combinations::new(n, k).enumerate();

    let evaluate = |(order, combination): (usize, Vec<usize>)| {
        let scored = scorer.score(&combination);
        pb.inc(1);
        Accumulator::single(order as u64, scored)
    };

    let acc = if executor.is_parallel() {
        executor.install(|| {
            combinations
                .par_bridge()
                .map(evaluate)
                .try_reduce(Accumulator::default, |a, b| Ok(a.merge(b)))
        })?
    } else {
        combinations
            .map(evaluate)
            .try_fold(Accumulator::default(), |a, b| b.map(|b| a.merge(b)))?
    };

    Ok(SizeOutcome {
        size: k,
        best: acc.best.map(|(_, scored)| scored),
        evaluated: acc.evaluated,
        degenerate: acc.degenerate,
    })
}
