//! Lazy enumeration of fixed-size index combinations
//!
//! Combinations are produced in lexicographic order of pool indices, so
//! `{0, 1}` comes before `{0, 2}` before `{1, 2}`. Downstream tie-breaking
//! relies on this order being deterministic.

/// Number of `k`-subsets of an `n`-set, saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
        if result > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    result as u64
}

/// Total number of combinations over every size in `sizes`.
pub fn search_space(n: usize, sizes: impl IntoIterator<Item = usize>) -> u64 {
    sizes
        .into_iter()
        .fold(0u64, |acc, k| acc.saturating_add(binomial(n, k)))
}

/// Iterator over every `k`-subset of `0..n`.
///
/// Cloning yields an independent iterator from the same position; calling
/// [`Combinations::new`] again restarts the sequence.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    remaining: u64,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        let remaining = if k == 0 { 0 } else { binomial(n, k) };
        Self {
            n,
            indices: (0..k).collect(),
            remaining,
        }
    }

    /// Advance `indices` to the next subset in lexicographic order.
    fn step(&mut self) {
        let k = self.indices.len();
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + self.n - k) else {
            return;
        };
        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.indices.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.step();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Combinations {}
