//! The mutation generator: a lazy stream of speculative branch states.
//!
//! A candidate is a *negative* guess — a clone of the current state with one
//! value removed from one cell's domain ("assume this cell is NOT this
//! value"), never a positive assignment. That keeps every candidate a strict
//! narrowing, so a failed branch is discarded by dropping the clone.

use crate::solver::{
    domain::Value,
    grid::Cell,
    state::SolveState,
    validity::is_valid,
};

/// Enumerates candidate states for guessing: row-major over cells, ascending
/// over each cell's remaining values. Candidates the validity checker rejects
/// outright are skipped rather than yielded.
///
/// The enumeration order fixes the search's tie-breaks, so it is part of the
/// observable behaviour. The sequence is finite, single-pass, and not
/// restartable.
pub struct Mutations<'a> {
    state: &'a SolveState,
    coords: Box<dyn Iterator<Item = Cell>>,
    current: Option<(Cell, std::vec::IntoIter<Value>)>,
}

/// Starts the candidate sequence for `state`.
pub fn valid_mutations(state: &SolveState) -> Mutations<'_> {
    Mutations {
        state,
        coords: Box::new(state.grid.coords()),
        current: None,
    }
}

impl Iterator for Mutations<'_> {
    type Item = SolveState;

    fn next(&mut self) -> Option<SolveState> {
        loop {
            if let Some((cell, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    let mut candidate = self.state.clone();
                    candidate.grid.domain_mut(*cell).remove(value);
                    if is_valid(&candidate) {
                        return Some(candidate);
                    }
                    continue;
                }
            }
            let cell = self.coords.next()?;
            let values: Vec<Value> = self.state.grid.domain(cell).iter().collect();
            self.current = Some((cell, values.into_iter()));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{domain::Domain, grid::Grid};

    fn blank(size: usize) -> SolveState {
        SolveState::new(
            Grid::from_rows(vec![vec![Domain::full(size); size]; size]),
            Vec::new().into(),
        )
    }

    #[test]
    fn candidates_come_row_major_and_value_ascending() {
        let state = blank(3);
        let first = valid_mutations(&state).next().unwrap();
        // The first candidate removes the smallest value of the first cell.
        assert_eq!(
            first.grid.domain(Cell::new(0, 0)).iter().collect::<Vec<_>>(),
            vec![2, 3]
        );
        let second = valid_mutations(&state).nth(1).unwrap();
        assert_eq!(
            second.grid.domain(Cell::new(0, 0)).iter().collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn every_candidate_differs_by_exactly_one_removal() {
        let state = blank(3);
        for candidate in valid_mutations(&state) {
            let removed: usize = state
                .grid
                .coords()
                .map(|cell| {
                    state.grid.domain(cell).len() - candidate.grid.domain(cell).len()
                })
                .sum();
            assert_eq!(removed, 1);
        }
    }

    #[test]
    fn invalid_candidates_are_filtered_out() {
        // In a blank 2x2 grid, removing any value leaves a singleton whose
        // value is still live in its line partners, so nothing survives the
        // validity filter.
        let state = blank(2);
        assert_eq!(valid_mutations(&state).count(), 0);
    }

    #[test]
    fn all_yielded_candidates_pass_the_validity_checker() {
        let state = blank(3);
        assert!(valid_mutations(&state).all(|candidate| is_valid(&candidate)));
    }

    #[test]
    fn the_base_state_is_never_touched() {
        let state = blank(3);
        let snapshot = state.grid.clone();
        let _ = valid_mutations(&state).count();
        assert_eq!(state.grid, snapshot);
    }

    #[test]
    fn singleton_cells_yield_no_candidates() {
        // Removing a singleton's only value empties the domain, which the
        // checker rejects, so determined cells contribute nothing.
        let state = SolveState::new(
            Grid::from_rows(vec![
                vec![Domain::singleton(1), Domain::singleton(2)],
                vec![Domain::singleton(2), Domain::singleton(1)],
            ]),
            Vec::new().into(),
        );
        assert_eq!(valid_mutations(&state).count(), 0);
    }
}
