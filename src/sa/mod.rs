//! Simulated Annealing (SA) over single-bit-flip knapsack moves.
//!
//! Starts from a random feasible packing and repeatedly proposes flipping
//! one item in or out. Over-weight proposals are discarded without cooling.
//! Feasible proposals are accepted by the Metropolis criterion, which
//! admits worse packings with a probability that shrinks as the temperature
//! decays geometrically. The best feasible packing ever proposed is kept.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod acceptance;
mod config;
mod runner;

pub use acceptance::{acceptance_probability, accepts};
pub use config::AnnealConfig;
pub use runner::{run_search, SaResult, SaRunner, StopReason};
