use serde::{Deserialize, Serialize};

use crate::solver::grid::Cell;

/// A strict ordering requirement between two cells: in any solved grid,
/// `value(low) < value(high)`.
///
/// Inequalities are immutable for the lifetime of a solve and are shared by
/// reference across every branch state, so the type stays plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inequality {
    pub low: Cell,
    pub high: Cell,
}

impl Inequality {
    pub fn new(low: Cell, high: Cell) -> Self {
        Self { low, high }
    }
}

impl std::fmt::Display for Inequality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} < {}", self.low, self.high)
    }
}
