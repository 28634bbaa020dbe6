//! The 0/1 knapsack model.
//!
//! A [`Catalog`] holds the items, a [`Solution`] flags which of them are
//! packed, and [`evaluate`] turns the pair into an [`Energy`] (total value
//! and total weight). [`KnapsackProblem`] adds the weight cap that decides
//! feasibility. The [`moves`] functions supply the random starting points
//! and single-bit-flip neighbors that the annealer explores.

mod catalog;
pub mod exact;
pub mod moves;
mod problem;
mod solution;

pub use catalog::{Catalog, Item};
pub use moves::{flip_candidate, random_solution};
pub use problem::KnapsackProblem;
pub use solution::{evaluate, Energy, Solution};
