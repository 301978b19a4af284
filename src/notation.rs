//! Decoding of the "fufen" textual puzzle notation.
//!
//! A fufen string lists the grid row by row: `.` is a blank cell, a digit is
//! a given value, and `/` ends a row. An inequality marker sits between the
//! two cells it relates: `<` and `>` compare the cell just written with the
//! next cell in the same row, `^` and `V` compare the cell just written with
//! the cell directly above it. Any other character is ignored.
//!
//! For example, `".<./.."` is a blank 2×2 grid whose top-left cell must be
//! less than its top-right cell.
//!
//! This layer owns all structural input validation; the solving core assumes
//! a square grid and in-bounds inequalities.

use serde::{Deserialize, Serialize};

use crate::{
    error::{NotationError, Result},
    solver::{
        domain::Value,
        grid::Cell,
        inequality::Inequality,
    },
};

/// One cell of the puzzle as written: blank, or a given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellToken {
    Blank,
    Given(Value),
}

/// A structurally validated puzzle: a square token matrix plus a list of
/// in-bounds inequalities. The only constructor input the solver accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLevel {
    tokens: Vec<Vec<CellToken>>,
    inequalities: Vec<Inequality>,
}

impl ParsedLevel {
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &[Vec<CellToken>] {
        &self.tokens
    }

    pub fn inequalities(&self) -> &[Inequality] {
        &self.inequalities
    }
}

// Marker coordinates are recorded as written, before the grid dimensions are
// known; a marker at the start of a row or in the first row can produce a
// negative coordinate, rejected during validation.
#[derive(Debug, Clone, Copy)]
struct RawInequality {
    low: (isize, isize),
    high: (isize, isize),
}

/// The largest grid the notation supports. Values are single digits and the
/// candidate renderer lays each cell out as a 3×3 block, so 9 is the ceiling.
pub const MAX_GRID_SIZE: usize = 9;

/// Parses a fufen string into a validated [`ParsedLevel`].
pub fn parse_fufen(fufen: &str) -> Result<ParsedLevel> {
    let mut rows: Vec<Vec<CellToken>> = Vec::new();
    let mut current: Vec<CellToken> = Vec::new();
    let mut raw: Vec<RawInequality> = Vec::new();

    for ch in fufen.chars() {
        let row = rows.len() as isize;
        let col = current.len() as isize;
        match ch {
            '/' => rows.push(std::mem::take(&mut current)),
            '.' => current.push(CellToken::Blank),
            '0'..='9' => current.push(CellToken::Given(ch as Value - b'0')),
            // The cell just written is greater than the cell above it.
            '^' => raw.push(RawInequality {
                low: (row - 1, col - 1),
                high: (row, col - 1),
            }),
            // The cell just written is less than the cell below it.
            'V' => raw.push(RawInequality {
                low: (row, col - 1),
                high: (row - 1, col - 1),
            }),
            // The cell just written is less than the next cell.
            '<' => raw.push(RawInequality {
                low: (row, col - 1),
                high: (row, col),
            }),
            // The cell just written is greater than the next cell.
            '>' => raw.push(RawInequality {
                low: (row, col),
                high: (row, col - 1),
            }),
            _ => {}
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }

    let height = rows.len();
    if height == 0 {
        return Err(NotationError::EmptyGrid.into());
    }
    let width = rows[0].len();
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != width {
            return Err(NotationError::JaggedGrid {
                row,
                found: cells.len(),
                expected: width,
            }
            .into());
        }
    }
    if width != height {
        return Err(NotationError::NonSquareGrid { width, height }.into());
    }
    if height > MAX_GRID_SIZE {
        return Err(NotationError::GridTooLarge {
            size: height,
            max: MAX_GRID_SIZE,
        }
        .into());
    }

    let in_bounds = |(row, col): (isize, isize)| {
        (0..height as isize).contains(&row) && (0..width as isize).contains(&col)
    };
    let mut inequalities = Vec::with_capacity(raw.len());
    for ineq in raw {
        if !in_bounds(ineq.low) || !in_bounds(ineq.high) {
            return Err(NotationError::InequalityOutsideGrid {
                low_row: ineq.low.0,
                low_col: ineq.low.1,
                high_row: ineq.high.0,
                high_col: ineq.high.1,
            }
            .into());
        }
        inequalities.push(Inequality::new(
            Cell::new(ineq.low.0 as usize, ineq.low.1 as usize),
            Cell::new(ineq.high.0 as usize, ineq.high.1 as usize),
        ));
    }

    for row in &rows {
        for token in row {
            if let CellToken::Given(value) = token {
                if *value < 1 || *value as usize > height {
                    return Err(NotationError::GivenOutOfRange {
                        value: *value,
                        size: height,
                    }
                    .into());
                }
            }
        }
    }

    Ok(ParsedLevel {
        tokens: rows,
        inequalities,
    })
}
