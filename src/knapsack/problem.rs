//! A catalog paired with a weight cap.

use super::catalog::Catalog;
use super::solution::{evaluate, Energy, Solution};
use crate::error::{Error, Result};

/// A 0/1 knapsack instance. Borrows its catalog; items are never copied.
#[derive(Debug, Clone, Copy)]
pub struct KnapsackProblem<'a> {
    catalog: &'a Catalog,
    capacity: f64,
}

impl<'a> KnapsackProblem<'a> {
    /// Pairs `catalog` with a weight cap, which must be finite and non-negative.
    pub fn new(catalog: &'a Catalog, capacity: f64) -> Result<Self> {
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(Error::InvalidProblem(format!(
                "weight cap must be finite and non-negative, got {capacity}"
            )));
        }
        Ok(Self { catalog, capacity })
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of items, i.e. the length of every solution.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn evaluate(&self, solution: &Solution) -> Energy {
        evaluate(solution, self.catalog)
    }

    pub fn is_feasible(&self, energy: &Energy) -> bool {
        energy.weight <= self.capacity
    }
}
