//! The pure consistency predicate over a solve state.

use crate::solver::{domain::Value, state::SolveState};

/// Checks whether a state is still consistent. Never mutates.
///
/// For every line (row or column):
/// - no cell's domain may be empty;
/// - every value `1..=N` must still be possible somewhere in the line;
/// - a value held by a determined cell must not remain a live candidate in
///   any other cell of the line.
///
/// For every inequality whose endpoints are both determined, the ordering
/// must hold strictly. Inequalities with an undetermined endpoint are left to
/// the bound rules.
///
/// Note the third line condition: a freshly constructed state whose givens
/// have not yet been excluded from their neighbours fails this check. The
/// checker is only consulted after propagation has run, and on mutation
/// candidates derived from propagated states, where the condition is exactly
/// the contradiction signal the search prunes on.
pub fn is_valid(state: &SolveState) -> bool {
    let size = state.grid.size();
    for line in state.grid.lines() {
        let mut determined: Vec<Value> = Vec::new();
        let mut occurrences = vec![0usize; size + 1];
        for &cell in &line {
            let domain = state.grid.domain(cell);
            if domain.is_empty() {
                return false;
            }
            if let Some(value) = domain.singleton_value() {
                determined.push(value);
            }
            for value in domain.iter() {
                occurrences[value as usize] += 1;
            }
        }
        for value in 1..=size {
            let count = occurrences[value];
            if count == 0 {
                return false;
            }
            if count > 1 && determined.contains(&(value as Value)) {
                return false;
            }
        }
    }

    for inequality in state.inequalities.iter() {
        let low = state.grid.domain(inequality.low).singleton_value();
        let high = state.grid.domain(inequality.high).singleton_value();
        if let (Some(low), Some(high)) = (low, high) {
            if low >= high {
                return false;
            }
        }
    }

    true
}
