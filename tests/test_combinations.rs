//! Unit tests for combination enumeration

use std::collections::HashSet;

use hellwig::pipeline::{binomial, search_space, Combinations};

#[test]
fn test_yields_exactly_n_choose_k_distinct_subsets() {
    for n in 1..=8 {
        for k in 1..=n {
            let combos: Vec<Vec<usize>> = Combinations::new(n, k).collect();
            assert_eq!(
                combos.len() as u64,
                binomial(n, k),
                "C({}, {}) mismatch",
                n,
                k
            );

            let unique: HashSet<Vec<usize>> = combos.iter().cloned().collect();
            assert_eq!(unique.len(), combos.len(), "Duplicate subset for n={}, k={}", n, k);

            for combo in &combos {
                assert_eq!(combo.len(), k);
                assert!(
                    combo.windows(2).all(|w| w[0] < w[1]),
                    "Subset {:?} must be strictly increasing (no repeats)",
                    combo
                );
                assert!(combo.iter().all(|&i| i < n));
            }
        }
    }
}

#[test]
fn test_enumeration_is_sorted_lexicographically() {
    let combos: Vec<Vec<usize>> = Combinations::new(6, 3).collect();
    let mut sorted = combos.clone();
    sorted.sort();
    assert_eq!(combos, sorted);
}

#[test]
fn test_enumeration_is_restartable() {
    let first: Vec<Vec<usize>> = Combinations::new(7, 4).collect();
    let second: Vec<Vec<usize>> = Combinations::new(7, 4).collect();
    assert_eq!(first, second);
}

#[test]
fn test_clone_continues_from_same_position() {
    let mut combos = Combinations::new(5, 2);
    combos.next();
    combos.next();

    let rest: Vec<Vec<usize>> = combos.clone().collect();
    let rest_again: Vec<Vec<usize>> = combos.collect();
    assert_eq!(rest, rest_again);
    assert_eq!(rest.len(), 8);
    assert_eq!(rest[0], vec![0, 3]);
}

#[test]
fn test_size_hint_is_exact() {
    let mut combos = Combinations::new(10, 3);
    assert_eq!(combos.size_hint(), (120, Some(120)));
    combos.next();
    assert_eq!(combos.size_hint(), (119, Some(119)));
}

#[test]
fn test_single_variable_subsets() {
    let combos: Vec<Vec<usize>> = Combinations::new(3, 1).collect();
    assert_eq!(combos, vec![vec![0], vec![1], vec![2]]);
}

#[test]
fn test_k_larger_than_pool_is_empty() {
    assert_eq!(Combinations::new(3, 5).next(), None);
}

#[test]
fn test_search_space_sums_sizes() {
    // C(5,2) + C(5,3) = 10 + 10
    assert_eq!(search_space(5, 2..=3), 20);
    assert_eq!(search_space(200, 1..=200), u64::MAX);
}
