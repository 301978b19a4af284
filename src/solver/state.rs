use std::sync::Arc;

use crate::{
    notation::{CellToken, ParsedLevel},
    solver::{domain::Domain, grid::Grid, inequality::Inequality},
};

/// A single state in the search space: the mutable grid of domains plus the
/// problem's inequality list.
///
/// Cloning a state clones the grid (cheaply, through `im`'s structural
/// sharing) and shares the inequality list by reference. Failed branches are
/// discarded simply by dropping the clone; the winning branch's grid is
/// adopted back into its ancestor by the search driver.
#[derive(Debug, Clone)]
pub struct SolveState {
    pub grid: Grid,
    pub inequalities: Arc<[Inequality]>,
}

impl SolveState {
    pub fn new(grid: Grid, inequalities: Arc<[Inequality]>) -> Self {
        Self { grid, inequalities }
    }

    /// Builds the initial state from a parsed puzzle: blank cells get the
    /// full domain `1..=N`, given cells a singleton domain.
    pub fn from_parsed(level: &ParsedLevel) -> Self {
        let size = level.size();
        let rows = level
            .tokens()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|token| match token {
                        CellToken::Blank => Domain::full(size),
                        CellToken::Given(value) => Domain::singleton(*value),
                    })
                    .collect()
            })
            .collect();
        Self::new(Grid::from_rows(rows), level.inequalities().into())
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }
}
