#![warn(missing_docs)]

//! # `warnsdorff`
//!
//! A solver for the [Knight's Tour](https://en.wikipedia.org/wiki/Knight%27s_tour): move a knight across an N×N board so it lands on every square exactly once.
//! Create a [`KnightsTour`] for a board size, call [`solve_open`](KnightsTour::solve_open) or [`solve_closed`](KnightsTour::solve_closed) with a start square,
//! and read the visit order of every cell off [`KnightsTour::board`].
//!
//! Open tours may end anywhere; closed tours must end one knight move from where they began, so the path closes into a cycle.
//!
//! # Internals
//! The search is a plain depth-first backtracking search over the board.
//! From the current square, every unvisited square a knight can reach is ranked by [Warnsdorff's rule](heuristic):
//! the square with the fewest onward moves goes first, since it is the one most likely to be stranded otherwise.
//! Each candidate is placed, the search recurses, and on failure the placement is undone before the next candidate is tried.
//!
//! Degrees are frozen for one expansion step: all candidates are ranked against the board as it stood before any of them was tried.
//! Ties are broken by the declaration order of [`KnightStep`](step::KnightStep), so the search is fully deterministic.
//!
//! The worst case is exponential, but on the usual board sizes the heuristic finds a tour with almost no backtracking.
//! Where square colors make a tour impossible (closed tours on odd boards, open tours from a minority-colored square) the search is skipped outright.
//! Callers wanting a hard bound can set [`SearchLimits::max_nodes`].

pub use board::Board;
pub use cell::Cell;
pub use location::{Dimension, Location};
pub use solver::{KnightsTour, SearchLimits, SearchState, TourError, TourMode};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod location;
pub mod heuristic;
pub mod step;
pub(crate) mod solver;
pub mod tour;
#[cfg(feature = "wasm")]
pub mod wasm;
