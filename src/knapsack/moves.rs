//! Random solution sampling and the single-bit-flip neighborhood.

use super::solution::Solution;
use rand::Rng;

/// Draws `n` independent fair flags, one `0..2` draw per item in index order.
pub fn random_solution<R: Rng>(n: usize, rng: &mut R) -> Solution {
    Solution::new((0..n).map(|_| rng.random_range(0..2u8) == 1).collect())
}

/// Returns a copy of `solution` with one uniformly chosen flag inverted.
///
/// Consumes exactly one `0..n` draw from `rng`.
///
/// # Panics
///
/// Panics if `solution` is empty; there is nothing to flip.
pub fn flip_candidate<R: Rng>(solution: &Solution, rng: &mut R) -> Solution {
    let mut candidate = solution.clone();
    let index = rng.random_range(0..solution.len());
    candidate.flip(index);
    candidate
}
