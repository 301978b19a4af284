//! The four local inference rules and the round driver that sequences them.
//!
//! Every rule mutates the state in place and reports whether it removed or
//! collapsed anything. Domains only ever shrink; the search driver loops
//! [`apply_rules`] until a full round reports no change (a fixpoint).

use std::time::Instant;

use serde::Serialize;

use crate::solver::{domain::Value, state::SolveState, stats::SearchStats};

/// Identifies one of the inference rules, for stats bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rule {
    Exclusion,
    LowerBound,
    UpperBound,
    Selection,
}

impl Rule {
    /// All rules, in the order a round runs them. The order is part of the
    /// observable behaviour: a round stops at the first rule that changes
    /// anything, so reordering changes which states the search visits.
    pub const ALL: [Rule; 4] = [
        Rule::Exclusion,
        Rule::LowerBound,
        Rule::UpperBound,
        Rule::Selection,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Exclusion => "exclusion",
            Rule::LowerBound => "lower-bound",
            Rule::UpperBound => "upper-bound",
            Rule::Selection => "selection",
        }
    }
}

/// No line may contain a duplicate: a value held by a determined cell is
/// removed from every other cell of that line.
pub fn apply_exclusion(state: &mut SolveState) -> bool {
    let mut changed = false;
    for line in state.grid.lines() {
        let determined: Vec<Value> = line
            .iter()
            .filter_map(|&cell| state.grid.domain(cell).singleton_value())
            .collect();
        for cell in line {
            if state.grid.domain(cell).is_singleton() {
                continue;
            }
            for &value in &determined {
                if state.grid.domain_mut(cell).remove(value) {
                    changed = true;
                }
            }
        }
    }
    changed
}

/// Every line must place every value somewhere: if only one cell of a line
/// can still hold a value, that cell's domain collapses to it.
pub fn apply_selection(state: &mut SolveState) -> bool {
    let mut changed = false;
    let size = state.grid.size();
    for line in state.grid.lines() {
        let mut occurrences = vec![0usize; size + 1];
        for &cell in &line {
            for value in state.grid.domain(cell).iter() {
                occurrences[value as usize] += 1;
            }
        }
        for value in 1..=size as Value {
            if occurrences[value as usize] != 1 {
                continue;
            }
            for &cell in &line {
                let domain = state.grid.domain(cell);
                if domain.contains(value) && domain.len() > 1 {
                    state.grid.domain_mut(cell).collapse_to(value);
                    changed = true;
                }
            }
        }
    }
    changed
}

/// The high side of an inequality must exceed the smallest value the low
/// side could still take: everything up to that minimum leaves the high
/// domain. Skips inequalities whose low domain is already empty.
pub fn apply_lower_bound(state: &mut SolveState) -> bool {
    let mut changed = false;
    let inequalities = state.inequalities.clone();
    for inequality in inequalities.iter() {
        let Some(min_low) = state.grid.domain(inequality.low).min_value() else {
            continue;
        };
        for value in 1..=min_low {
            if state.grid.domain_mut(inequality.high).remove(value) {
                changed = true;
            }
        }
    }
    changed
}

/// Symmetric to [`apply_lower_bound`]: the low side must stay below the
/// largest value the high side could still take, so everything from that
/// maximum up leaves the low domain.
pub fn apply_upper_bound(state: &mut SolveState) -> bool {
    let mut changed = false;
    let size = state.grid.size() as Value;
    let inequalities = state.inequalities.clone();
    for inequality in inequalities.iter() {
        let Some(max_high) = state.grid.domain(inequality.high).max_value() else {
            continue;
        };
        for value in max_high..=size {
            if state.grid.domain_mut(inequality.low).remove(value) {
                changed = true;
            }
        }
    }
    changed
}

/// Runs one round of rules, stopping at the first that reports a change.
///
/// Returns whether anything changed; the caller loops until a full round is
/// quiet. Each rule invocation is counted and timed into `stats`.
pub fn apply_rules(state: &mut SolveState, stats: &mut SearchStats) -> bool {
    for rule in Rule::ALL {
        let start = Instant::now();
        let changed = match rule {
            Rule::Exclusion => apply_exclusion(state),
            Rule::LowerBound => apply_lower_bound(state),
            Rule::UpperBound => apply_upper_bound(state),
            Rule::Selection => apply_selection(state),
        };
        stats.record_rule(rule, changed, start.elapsed());
        if changed {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::solver::{
        domain::Domain,
        grid::{Cell, Grid},
        inequality::Inequality,
        stats::SearchStats,
        validity::is_valid,
    };

    fn state(rows: Vec<Vec<Domain>>, inequalities: Vec<Inequality>) -> SolveState {
        SolveState::new(Grid::from_rows(rows), inequalities.into())
    }

    fn set(values: &[Value]) -> Domain {
        values.iter().copied().collect()
    }

    fn values(state: &SolveState, row: usize, col: usize) -> Vec<Value> {
        state.grid.domain(Cell::new(row, col)).iter().collect()
    }

    #[test]
    fn exclusion_removes_determined_values_from_the_rest_of_the_line() {
        let mut state = state(
            vec![
                vec![Domain::singleton(1), Domain::full(2)],
                vec![Domain::full(2), Domain::full(2)],
            ],
            vec![],
        );
        assert!(apply_exclusion(&mut state));
        // One call sweeps rows then columns, so the single given cascades
        // through the whole 2x2 grid.
        assert_eq!(values(&state, 0, 1), vec![2]);
        assert_eq!(values(&state, 1, 0), vec![2]);
        assert_eq!(values(&state, 1, 1), vec![1]);
        assert!(!apply_exclusion(&mut state));
    }

    #[test]
    fn selection_collapses_the_only_cell_that_can_hold_a_value() {
        let mut state = state(
            vec![
                vec![set(&[2, 3]), set(&[1, 2]), set(&[2, 3])],
                vec![Domain::full(3), Domain::full(3), Domain::full(3)],
                vec![Domain::full(3), Domain::full(3), Domain::full(3)],
            ],
            vec![],
        );
        assert!(apply_selection(&mut state));
        // Value 1 fits only in (0,1) within the top row.
        assert_eq!(values(&state, 0, 1), vec![1]);
    }

    #[test]
    fn lower_bound_strips_the_low_minimum_from_the_high_side() {
        let mut state = state(
            vec![vec![Domain::full(2); 2]; 2],
            vec![Inequality::new(Cell::new(0, 0), Cell::new(0, 1))],
        );
        assert!(apply_lower_bound(&mut state));
        assert_eq!(values(&state, 0, 1), vec![2]);
        // The low side is untouched by this rule.
        assert_eq!(values(&state, 0, 0), vec![1, 2]);
    }

    #[test]
    fn upper_bound_strips_the_high_maximum_from_the_low_side() {
        let mut state = state(
            vec![vec![Domain::full(2); 2]; 2],
            vec![Inequality::new(Cell::new(0, 0), Cell::new(0, 1))],
        );
        assert!(apply_upper_bound(&mut state));
        assert_eq!(values(&state, 0, 0), vec![1]);
        assert_eq!(values(&state, 0, 1), vec![1, 2]);
    }

    #[test]
    fn bound_rules_skip_inequalities_with_an_empty_source_domain() {
        let mut state = state(
            vec![
                vec![set(&[]), Domain::full(2)],
                vec![Domain::full(2), Domain::full(2)],
            ],
            vec![Inequality::new(Cell::new(0, 0), Cell::new(0, 1))],
        );
        assert!(!apply_lower_bound(&mut state));
        assert_eq!(values(&state, 0, 1), vec![1, 2]);
    }

    #[test]
    fn bound_rules_can_expose_a_latent_contradiction() {
        // The checker accepts this state: every line is duplicate-free with a
        // home for every value, and the inequality has an undetermined
        // endpoint. The low side's minimum of 3 nevertheless leaves nothing
        // for the high side, which the lower-bound rule surfaces as an empty
        // domain for the checker to catch on the next look.
        let mut state = state(
            vec![
                vec![set(&[3]), set(&[1, 2]), set(&[1, 2])],
                vec![set(&[1, 2]), set(&[3]), set(&[1, 2])],
                vec![set(&[1, 2]), set(&[1, 2]), set(&[3])],
            ],
            vec![Inequality::new(Cell::new(0, 0), Cell::new(0, 1))],
        );
        assert!(is_valid(&state));
        assert!(apply_lower_bound(&mut state));
        assert!(state.grid.domain(Cell::new(0, 1)).is_empty());
        assert!(!is_valid(&state));
    }

    #[test]
    fn a_round_stops_at_the_first_rule_that_fires() {
        // Exclusion has work to do, so the selection collapse that value 3
        // would allow in the top row must not happen in the same round.
        let mut state = state(
            vec![
                vec![Domain::singleton(1), set(&[1, 2]), set(&[1, 2, 3])],
                vec![Domain::full(3), Domain::full(3), Domain::full(3)],
                vec![Domain::full(3), Domain::full(3), Domain::full(3)],
            ],
            vec![],
        );
        let mut stats = SearchStats::default();
        assert!(apply_rules(&mut state, &mut stats));
        assert_eq!(values(&state, 0, 2), vec![2, 3]);
    }

    #[test]
    fn a_quiet_round_reports_no_change() {
        let mut state = state(vec![vec![Domain::full(3); 3]; 3], vec![]);
        let mut stats = SearchStats::default();
        assert!(!apply_rules(&mut state, &mut stats));
    }

    // Random states for the rule properties: every cell gets a non-empty
    // subset of 1..=size, and inequalities connect arbitrary cell pairs.
    fn arbitrary_state() -> impl Strategy<Value = SolveState> {
        (2usize..=4).prop_flat_map(|size| {
            let domain = proptest::collection::btree_set(1..=size as Value, 1..=size)
                .prop_map(|values| values.into_iter().collect::<Domain>());
            let rows = proptest::collection::vec(
                proptest::collection::vec(domain, size..=size),
                size..=size,
            );
            let cell = (0..size, 0..size).prop_map(|(row, col)| Cell::new(row, col));
            let inequalities = proptest::collection::vec(
                (cell.clone(), cell).prop_map(|(low, high)| Inequality::new(low, high)),
                0..=3,
            );
            (rows, inequalities)
                .prop_map(|(rows, inequalities)| state(rows, inequalities))
        })
    }

    proptest! {
        // Rules only ever narrow: afterwards every domain is a subset of
        // what it was before.
        #[test]
        fn rules_are_monotonic(mut state in arbitrary_state()) {
            let before = state.grid.clone();
            for rule in Rule::ALL {
                match rule {
                    Rule::Exclusion => apply_exclusion(&mut state),
                    Rule::LowerBound => apply_lower_bound(&mut state),
                    Rule::UpperBound => apply_upper_bound(&mut state),
                    Rule::Selection => apply_selection(&mut state),
                };
                for cell in state.grid.coords() {
                    prop_assert!(state.grid.domain(cell).is_subset_of(before.domain(cell)));
                }
            }
        }

        // On a state the checker accepts, a determined value still live
        // elsewhere in its line would already have failed the check, so
        // exclusion has nothing left to remove and cannot invalidate. The
        // bound rules carry no such guarantee (see the latent-contradiction
        // test above).
        #[test]
        fn exclusion_never_invalidates_a_valid_state(mut state in arbitrary_state()) {
            if is_valid(&state) {
                apply_exclusion(&mut state);
                prop_assert!(is_valid(&state));
            }
        }

        // Once a round is quiet, every individual rule is quiet too, and the
        // state no longer moves.
        #[test]
        fn a_fixpoint_is_idempotent(mut state in arbitrary_state()) {
            let mut stats = SearchStats::default();
            while apply_rules(&mut state, &mut stats) {}
            let fixpoint = state.grid.clone();
            prop_assert!(!apply_exclusion(&mut state));
            prop_assert!(!apply_lower_bound(&mut state));
            prop_assert!(!apply_upper_bound(&mut state));
            prop_assert!(!apply_selection(&mut state));
            prop_assert_eq!(&state.grid, &fixpoint);
        }
    }
}
