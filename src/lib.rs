//! 0/1 knapsack solving by simulated annealing.
//!
//! Chooses a subset of weighted, valued items that maximizes total value
//! without exceeding a weight cap. The search is an anytime heuristic:
//! fast and usually near-optimal, never proven optimal.
//!
//! - **Knapsack model** ([`knapsack`]): items, catalogs, inclusion vectors,
//!   energy evaluation, random starts, single-flip neighbors, and an
//!   exhaustive reference solver for small instances.
//! - **Simulated Annealing** ([`sa`]): Metropolis acceptance, geometric
//!   cooling applied only on feasible moves, best-solution tracking and
//!   independent restarts.
//!
//! # Examples
//!
//! ```
//! use u_knapsack::{AnnealConfig, Catalog, Item, KnapsackProblem, SaRunner};
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("A", 2.0, 3),
//!     Item::new("B", 3.0, 4),
//!     Item::new("C", 4.0, 5),
//!     Item::new("D", 5.0, 6),
//! ])
//! .unwrap();
//! let problem = KnapsackProblem::new(&catalog, 5.0).unwrap();
//! let config = AnnealConfig::default().with_seed(42);
//!
//! let result = SaRunner::run(&problem, &config).unwrap();
//! assert!(result.best_weight <= 5.0);
//! ```
//!
//! # Randomness
//!
//! Every random draw comes from an explicit rng. Fix
//! [`AnnealConfig::seed`] or pass your own rng to
//! [`SaRunner::run_with_rng`] for reproducible runs.

pub mod error;
pub mod knapsack;
pub mod sa;

pub use error::{Error, Result};
pub use knapsack::{evaluate, Catalog, Energy, Item, KnapsackProblem, Solution};
pub use sa::{run_search, AnnealConfig, SaResult, SaRunner, StopReason};
