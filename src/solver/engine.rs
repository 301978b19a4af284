use serde::Serialize;
use tracing::debug;

use crate::solver::{
    mutation::valid_mutations,
    rules::apply_rules,
    state::SolveState,
    stats::SearchStats,
    validity::is_valid,
};

/// Default ceiling for the iterative-deepening guess budget.
pub const DEFAULT_DEPTH_CAP: usize = 19;

/// Final verdict of a solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every cell is determined and the grid satisfies every constraint.
    Solved,
    /// The depth cap was reached without completing the grid; the state
    /// holds whatever narrowing propagation achieved.
    Exhausted,
    /// The search proved the puzzle inconsistent.
    Contradiction,
}

/// The iterative-deepening backtracking search driver.
///
/// Each attempt alternates propagation-to-fixpoint with bounded guessing;
/// the outer loop escalates the guess budget from 1 up to the depth cap,
/// reusing the same grid across attempts. Propagation is monotonic, so
/// narrowing achieved by a failed attempt legitimately carries into the
/// next one.
pub struct SolverEngine {
    depth_cap: usize,
}

impl SolverEngine {
    pub fn new() -> Self {
        Self {
            depth_cap: DEFAULT_DEPTH_CAP,
        }
    }

    /// An engine with a custom guess-budget ceiling (clamped to at least 1).
    pub fn with_depth_cap(depth_cap: usize) -> Self {
        Self {
            depth_cap: depth_cap.max(1),
        }
    }

    /// Runs the full search on `state`, mutating it in place.
    ///
    /// On [`Outcome::Solved`] the grid is complete; otherwise it holds the
    /// furthest narrowing reached, which callers may still want to render.
    pub fn solve(&self, state: &mut SolveState) -> (Outcome, SearchStats) {
        let mut stats = SearchStats::default();
        for max_depth in 1..=self.depth_cap {
            stats.deepest_attempt = max_depth;
            debug!(max_depth, "starting attempt");
            if self.attempt(state, max_depth, 1, &mut stats) {
                return (Outcome::Solved, stats);
            }
        }
        // Attempts leave the state at a propagation fixpoint, where the
        // validity checker separates genuinely contradictory input from a
        // consistent puzzle the budget could not finish.
        if is_valid(state) {
            (Outcome::Exhausted, stats)
        } else {
            (Outcome::Contradiction, stats)
        }
    }

    /// One bounded attempt. Returns whether this branch reached a solved
    /// grid; failure is an ordinary value, never an error.
    fn attempt(
        &self,
        state: &mut SolveState,
        max_depth: usize,
        depth: usize,
        stats: &mut SearchStats,
    ) -> bool {
        stats.nodes_visited += 1;
        while apply_rules(state, stats) {
            stats.rounds_applied += 1;
        }
        if !is_valid(state) {
            return false;
        }
        if state.grid.is_complete() {
            return true;
        }

        // Inference is stuck; spend guess budget if any remains.
        if depth < max_depth {
            let mut winner = None;
            for mut candidate in valid_mutations(state) {
                stats.guesses += 1;
                if self.attempt(&mut candidate, max_depth, depth + 1, stats) {
                    winner = Some(candidate.grid);
                    break;
                }
                stats.backtracks += 1;
            }
            if let Some(grid) = winner {
                state.grid = grid;
                return true;
            }
        }
        false
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new()
    }
}
