//! Textual rendering of grids and in-progress solve states.

use crate::solver::{grid::Cell, grid::Grid, state::SolveState};

/// Renders a grid as one digit row per line. Cells still holding more than
/// one candidate render as `.`, so only a [`Solved`](crate::solver::engine::Outcome::Solved)
/// grid renders without holes.
pub fn render_solved(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            match grid.domain(Cell::new(row, col)).singleton_value() {
                Some(value) => out.push((b'0' + value) as char),
                None => out.push('.'),
            }
        }
        out.push('\n');
    }
    out
}

/// Renders the full candidate picture: a box-drawn grid with every live
/// value laid out in a 3×3 block per cell (so grids up to 9×9), and the
/// inequality markers drawn on the borders between their cells.
pub fn render_candidates(state: &SolveState) -> String {
    let size = state.size();
    let char_dim = size * 4 + 1;
    let mut canvas = vec![vec![' '; char_dim]; char_dim];

    for row in 0..=size {
        let (left, mid, right) = match row {
            0 => ('┌', '┬', '┐'),
            r if r == size => ('└', '┴', '┘'),
            _ => ('├', '┼', '┤'),
        };
        canvas[row * 4] = separator_row(size, left, mid, right);
    }
    for row in 0..size {
        for sub_row in 1..=3 {
            for col in 0..=size {
                canvas[row * 4 + sub_row][col * 4] = '│';
            }
        }
    }

    for row in 0..size {
        for col in 0..size {
            for value in state.grid.domain(Cell::new(row, col)).iter() {
                let offset = (value - 1) as usize;
                canvas[row * 4 + 1 + offset / 3][col * 4 + 1 + offset % 3] =
                    (b'0' + value) as char;
            }
        }
    }

    for inequality in state.inequalities.iter() {
        let (low, high) = (inequality.low, inequality.high);
        let marker = if high.row > low.row {
            '^'
        } else if high.row < low.row {
            'v'
        } else if high.col > low.col {
            '<'
        } else {
            '>'
        };
        // The marker sits on the border midway between the two cells.
        let row = (high.row + low.row) * 2 + 2;
        let col = (high.col + low.col) * 2 + 2;
        canvas[row][col] = marker;
    }

    let mut out = String::new();
    for line in canvas {
        out.extend(line);
        out.push('\n');
    }
    out
}

fn separator_row(size: usize, left: char, mid: char, right: char) -> Vec<char> {
    let mut line = vec![left];
    for col in 0..size {
        line.extend(['─'; 3]);
        line.push(if col + 1 == size { right } else { mid });
    }
    line
}
