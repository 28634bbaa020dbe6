//! Exhaustive enumeration for small instances.
//!
//! Used to measure the optimality gap of annealing runs and as a test
//! oracle. Cost is O(2^N * N).

use super::problem::KnapsackProblem;
use super::solution::{Energy, Solution};
use crate::error::{Error, Result};

/// Largest catalog [`brute_force`] accepts. 2^24 subsets still finish in
/// seconds; every further item doubles the work.
pub const MAX_EXACT_ITEMS: usize = 24;

/// Enumerates every subset and returns a feasible one of maximum value.
///
/// Among equally valued optima the subset with the smallest bitmask
/// (item 0 as the lowest bit) wins.
pub fn brute_force(problem: &KnapsackProblem<'_>) -> Result<(Solution, Energy)> {
    let n = problem.len();
    if n > MAX_EXACT_ITEMS {
        return Err(Error::InvalidProblem(format!(
            "exhaustive search limited to {MAX_EXACT_ITEMS} items, got {n}"
        )));
    }

    tracing::debug!(items = n, subsets = 1u64 << n, "enumerating all subsets");

    let catalog = problem.catalog();
    let mut best_mask = 0u64;
    let mut best = Energy::default();

    for mask in 1u64..(1u64 << n) {
        let mut energy = Energy::default();
        for (i, item) in catalog.iter().enumerate() {
            if mask & (1 << i) != 0 {
                energy.value += item.value;
                energy.weight += item.weight;
            }
        }
        if problem.is_feasible(&energy) && energy.value > best.value {
            best = energy;
            best_mask = mask;
        }
    }

    let solution = Solution::new((0..n).map(|i| best_mask & (1 << i) != 0).collect());
    Ok((solution, best))
}
