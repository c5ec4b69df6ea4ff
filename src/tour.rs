//! Checking a finished board independently of the search that produced it.

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::board::Board;
use crate::location::Location;
use crate::solver::TourMode;
use crate::step::{KnightStep, Leaper};

/// Ways a board can fail to hold a tour.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TourViolation {
    /// Some cell is unvisited.
    Incomplete {
        /// Cells carrying a visit order.
        visited: usize,
        /// Cells on the board.
        area: usize,
    },
    /// A visit order appears on more than one cell, or lies outside `0..area`.
    DuplicateOrder,
    /// Consecutive orders are not a knight move apart.
    IllegalMove {
        /// Cell carrying order `i`.
        from: Location,
        /// Cell carrying order `i + 1`.
        to: Location,
    },
    /// A closed tour whose last cell cannot reach the start.
    NotReentrant {
        /// Cell carrying order `0`.
        first: Location,
        /// Cell carrying the last order.
        last: Location,
    },
}

impl Display for TourViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TourViolation::Incomplete { visited, area } => write!(f, "only {visited} of {area} cells visited"),
            TourViolation::DuplicateOrder => write!(f, "visit orders are not a permutation"),
            TourViolation::IllegalMove { from, to } => write!(f, "{from} to {to} is not a knight move"),
            TourViolation::NotReentrant { first, last } => write!(f, "tour ends at {last}, not a knight move from {first}"),
        }
    }
}

impl std::error::Error for TourViolation {}

/// Check that `board` holds a complete tour valid under `mode`.
pub fn verify(board: &Board, mode: TourMode) -> Result<(), TourViolation> {
    let visited = board.cells().iter().filter(|cell| !cell.is_unvisited()).count();
    if visited != board.area() {
        return Err(TourViolation::Incomplete { visited, area: board.area() });
    }

    let path = board.tour().ok_or(TourViolation::DuplicateOrder)?;

    if let Some((from, to)) = path.iter()
        .tuple_windows()
        .find(|(from, to)| KnightStep::direction_to(**from, **to).is_none()) {
        return Err(TourViolation::IllegalMove { from: *from, to: *to });
    }

    if mode == TourMode::Closed {
        // every board has at least one cell
        let (first, last) = (path[0], path[path.len() - 1]);
        if KnightStep::direction_to(last, first).is_none() {
            return Err(TourViolation::NotReentrant { first, last });
        }
    }

    Ok(())
}
