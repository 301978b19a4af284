//! A solver for Futoshiki-style logic puzzles.
//!
//! A puzzle is an N×N grid where every row and column must contain each value
//! `1..=N` exactly once (a Latin square), plus strict ordering constraints
//! between pairs of cells. The solver keeps a *domain* — the set of values
//! still possible — for every cell and narrows those domains with two
//! interleaved mechanisms:
//!
//! - **Propagation**: four local inference rules ([`solver::rules`]) run to a
//!   fixpoint, shrinking domains without guessing.
//! - **Search**: when inference is stuck, an iterative-deepening backtracking
//!   search ([`solver::engine`]) speculatively removes single candidate
//!   values ([`solver::mutation`]), recursing on cheap copy-on-write clones
//!   of the grid and escalating its guess budget until the puzzle completes
//!   or the budget cap is reached.
//!
//! Puzzles are written in the "fufen" textual notation ([`notation`]), and
//! [`render`] produces human-readable output for both finished grids and
//! in-progress candidate states.
//!
//! # Example
//!
//! A blank 2×2 grid with one constraint — the top-left cell must be less
//! than the top-right cell — is fully determined by propagation:
//!
//! ```
//! use futoshiki::notation::parse_fufen;
//! use futoshiki::solver::engine::{Outcome, SolverEngine};
//! use futoshiki::solver::grid::Cell;
//! use futoshiki::solver::state::SolveState;
//!
//! let level = parse_fufen(".<./..").unwrap();
//! let mut state = SolveState::from_parsed(&level);
//!
//! let (outcome, _stats) = SolverEngine::new().solve(&mut state);
//! assert_eq!(outcome, Outcome::Solved);
//! assert_eq!(state.grid.domain(Cell::new(0, 0)).singleton_value(), Some(1));
//! assert_eq!(state.grid.domain(Cell::new(0, 1)).singleton_value(), Some(2));
//! ```
pub mod error;
pub mod notation;
pub mod render;
pub mod solver;
