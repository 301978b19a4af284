use im::Vector;
use serde::{Deserialize, Serialize};

use crate::solver::domain::Domain;

/// A row-major grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// An N×N matrix of [`Domain`]s.
///
/// Stored as a flat `im::Vector`, so cloning a grid for a speculative branch
/// is cheap: unchanged domains are shared between the clone and its ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vector<Domain>,
}

impl Grid {
    /// Builds a grid from row-major rows of domains.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square matrix. Structural validation
    /// of puzzle input happens in the notation layer; this constructor is for
    /// callers that already hold a well-formed matrix.
    pub fn from_rows(rows: Vec<Vec<Domain>>) -> Self {
        let size = rows.len();
        assert!(size >= 1, "grid must have at least one row");
        let mut cells = Vector::new();
        for row in rows {
            assert_eq!(row.len(), size, "grid rows must all have {size} cells");
            cells.extend(row);
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn domain(&self, cell: Cell) -> &Domain {
        &self.cells[cell.row * self.size + cell.col]
    }

    pub fn domain_mut(&mut self, cell: Cell) -> &mut Domain {
        &mut self.cells[cell.row * self.size + cell.col]
    }

    /// Enumerates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }

    /// Enumerates every line of the grid: all rows first, then all columns.
    ///
    /// Rows and columns are treated uniformly by the line-wide rules, and the
    /// row-then-column order here fixes their tie-break behaviour.
    pub fn lines(&self) -> impl Iterator<Item = Vec<Cell>> {
        let size = self.size;
        let rows = (0..size).map(move |row| (0..size).map(|col| Cell::new(row, col)).collect());
        let cols = (0..size).map(move |col| (0..size).map(|row| Cell::new(row, col)).collect());
        rows.chain(cols)
    }

    /// `true` once every cell is determined.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|domain| domain.is_singleton())
    }
}
