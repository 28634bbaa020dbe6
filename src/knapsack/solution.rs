//! Inclusion vectors and their energy.

use super::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One inclusion flag per catalog item, index-aligned with the catalog.
///
/// Every solution owns its flags; clones never share storage, so the
/// current, candidate and best solutions of a run evolve independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    flags: Vec<bool>,
}

impl Solution {
    pub fn new(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// A solution of length `n` with nothing packed.
    pub fn empty(n: usize) -> Self {
        Self {
            flags: vec![false; n],
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn is_included(&self, index: usize) -> bool {
        self.flags[index]
    }

    /// Inverts the flag at `index`.
    pub fn flip(&mut self, index: usize) {
        self.flags[index] = !self.flags[index];
    }

    /// Indices of packed items, ascending.
    pub fn included(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &included)| included.then_some(i))
    }

    pub fn count_included(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }
}

/// Renders as `[0 1 1 0]`.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, &flag) in self.flags.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", u8::from(flag))?;
        }
        write!(f, "]")
    }
}

/// Total value and weight of a solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    pub value: u64,
    pub weight: f64,
}

/// Sums value and weight over the packed items.
///
/// # Panics
///
/// Panics if `solution` and `catalog` differ in length. That is a caller
/// bug, not a recoverable condition.
pub fn evaluate(solution: &Solution, catalog: &Catalog) -> Energy {
    assert_eq!(
        solution.len(),
        catalog.len(),
        "solution has {} flags but catalog has {} items",
        solution.len(),
        catalog.len()
    );

    let mut energy = Energy::default();
    for i in solution.included() {
        let item = &catalog[i];
        energy.value += item.value;
        energy.weight += item.weight;
    }
    energy
}
