//! Correlation engine: inter-predictor matrix and dependent correlations

use faer::Mat;
use indicatif::ProgressBar;
use rayon::prelude::*;

use super::error::{HellwigError, HellwigResult};

/// A named numeric series. Missing or non-numeric cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl NumericColumn {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Build a column with no missing values.
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, values.iter().copied().map(Some).collect())
    }

    /// Number of present, finite observations.
    pub fn valid_count(&self) -> usize {
        self.values
            .iter()
            .filter(|v| matches!(v, Some(x) if x.is_finite()))
            .count()
    }
}

/// Outcome of a pairwise Pearson computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pearson {
    /// Rows where both series had a finite value
    pub observations: usize,
    /// `None` when either side has zero variance over those rows
    pub coefficient: Option<f64>,
}

/// Pearson correlation over rows where both values are present.
///
/// Single-pass Welford update for numerical stability.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Pearson {
    let mut n = 0usize;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (a, b) in x.iter().zip(y.iter()) {
        let (Some(a), Some(b)) = (*a, *b) else {
            continue;
        };
        if !a.is_finite() || !b.is_finite() {
            continue;
        }
        n += 1;
        let dx = a - mean_x;
        let dy = b - mean_y;
        mean_x += dx / n as f64;
        mean_y += dy / n as f64;
        var_x += dx * (a - mean_x);
        var_y += dy * (b - mean_y);
        cov_xy += dx * (b - mean_y);
    }

    if n < 2 || var_x <= 0.0 || var_y <= 0.0 {
        return Pearson {
            observations: n,
            coefficient: None,
        };
    }

    let r = cov_xy / (var_x.sqrt() * var_y.sqrt());
    Pearson {
        observations: n,
        coefficient: Some(r.clamp(-1.0, 1.0)),
    }
}

/// Symmetric correlation matrix over the candidate pool.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Mat<f64>,
}

impl CorrelationMatrix {
    /// Build from explicit rows. Rows must form a square matrix matching `names`.
    pub fn from_rows(names: Vec<String>, rows: &[Vec<f64>]) -> HellwigResult<Self> {
        let n = names.len();
        if rows.len() != n || rows.iter().any(|row| row.len() != n) {
            return Err(HellwigError::config(format!(
                "correlation matrix must be {}x{} to match its variable names",
                n, n
            )));
        }
        let values = Mat::from_fn(n, n, |i, j| rows[i][j]);
        Ok(Self { names, values })
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Correlation between two pool indices.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    /// Position of a variable in the pool.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Correlation looked up by variable names.
    pub fn by_name(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.get(self.index_of(a)?, self.index_of(b)?))
    }
}

/// Correlation of each pool variable with the dependent variable.
#[derive(Debug, Clone)]
pub struct DependentCorrelations {
    dependent: String,
    values: Vec<f64>,
}

impl DependentCorrelations {
    pub fn new(dependent: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            dependent: dependent.into(),
            values,
        }
    }

    pub fn dependent(&self) -> &str {
        &self.dependent
    }

    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.values[i]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn require_observations(column: &NumericColumn) -> HellwigResult<()> {
    let observations = column.valid_count();
    if observations < 2 {
        return Err(HellwigError::InsufficientData {
            variable: column.name.clone(),
            observations,
        });
    }
    Ok(())
}

fn pair_correlation(a: &NumericColumn, b: &NumericColumn) -> HellwigResult<f64> {
    let result = pearson(&a.values, &b.values);
    if result.observations < 2 {
        return Err(HellwigError::InsufficientPairData {
            first: a.name.clone(),
            second: b.name.clone(),
            observations: result.observations,
        });
    }
    // Zero variance over the shared rows means no linear association
    Ok(result.coefficient.unwrap_or(0.0))
}

/// Compute the correlation matrix over `independent` and each variable's
/// correlation with `dependent`.
///
/// Pairs are evaluated in parallel over the upper triangle; `pb` is advanced
/// once per pair.
pub fn compute_correlations(
    dependent: &NumericColumn,
    independent: &[NumericColumn],
    pb: &ProgressBar,
) -> HellwigResult<(CorrelationMatrix, DependentCorrelations)> {
    require_observations(dependent)?;
    for column in independent {
        require_observations(column)?;
    }

    let dependent_values: Vec<f64> = independent
        .par_iter()
        .map(|column| pair_correlation(dependent, column))
        .collect::<HellwigResult<_>>()?;

    let n = independent.len();
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let upper: Vec<((usize, usize), f64)> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let r = pair_correlation(&independent[i], &independent[j]);
            pb.inc(1);
            r.map(|r| ((i, j), r))
        })
        .collect::<HellwigResult<_>>()?;

    let mut values = Mat::<f64>::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 });
    for ((i, j), r) in upper {
        values[(i, j)] = r;
        values[(j, i)] = r;
    }

    let names = independent.iter().map(|c| c.name.clone()).collect();
    Ok((
        CorrelationMatrix { names, values },
        DependentCorrelations::new(dependent.name.clone(), dependent_values),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_perfect_positive() {
        let x: Vec<Option<f64>> = (1..=5).map(|v| Some(v as f64)).collect();
        let y: Vec<Option<f64>> = (1..=5).map(|v| Some(2.0 * v as f64 + 1.0)).collect();
        let result = pearson(&x, &y);
        assert_eq!(result.observations, 5);
        assert!((result.coefficient.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_skips_incomplete_rows() {
        let x = vec![Some(1.0), None, Some(3.0), Some(4.0)];
        let y = vec![Some(2.0), Some(100.0), None, Some(8.0)];
        let result = pearson(&x, &y);
        assert_eq!(result.observations, 2);
        assert!((result.coefficient.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_constant_is_undefined() {
        let x = vec![Some(1.0), Some(2.0), Some(3.0)];
        let y = vec![Some(5.0), Some(5.0), Some(5.0)];
        assert_eq!(pearson(&x, &y).coefficient, None);
    }
}
