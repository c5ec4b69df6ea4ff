use std::fmt::{Display, Formatter};

use strum::VariantArray;
use tracing::{debug, trace};

use crate::board::Board;
use crate::heuristic::ranked_candidates;
use crate::location::{Dimension, Location};
use crate::step::{KnightStep, Leaper};

/// Which tours count as solutions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, VariantArray, strum::Display)]
pub enum TourMode {
    /// Every cell visited exactly once; the tour may end anywhere.
    Open,
    /// An open tour whose last cell is one knight move from the start, so the path closes into a cycle.
    Closed,
}

/// Where the most recent search stands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SearchState {
    /// A search is underway, has not run yet, or was abandoned by a [`TourError::LimitExceeded`].
    Exploring,
    /// The board holds a complete tour.
    Solved,
    /// Every candidate from the start was tried and none completed a tour.
    Exhausted,
}

/// Budgets a caller may impose on a search, which otherwise runs until it succeeds or exhausts the board.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchLimits {
    /// Maximum number of search nodes (cells placed on the path, including those later undone).
    pub max_nodes: Option<u64>,
}

/// Reasons a solve may fail without producing a yes or no answer.
///
/// Not finding a tour is not one of them; that is `Ok(false)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TourError {
    /// The start square is not on the board.
    StartOutOfBounds {
        /// The requested start.
        start: Location,
        /// Side length of the board.
        size: Dimension,
    },
    /// The node budget in [`SearchLimits`] ran out before the search finished.
    LimitExceeded {
        /// The configured budget.
        limit: u64,
        /// Nodes expanded when the search stopped.
        observed: u64,
    },
}

impl Display for TourError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TourError::StartOutOfBounds { start, size } => write!(f, "start {start} is outside a {size}x{size} board"),
            TourError::LimitExceeded { limit, observed } => write!(f, "node limit exceeded (limit={limit}, observed={observed})"),
        }
    }
}

impl std::error::Error for TourError {}

/// A depth-first backtracking Knight's Tour solver ordered by Warnsdorff's rule.
///
/// Each call to [`solve`](Self::solve) (or [`solve_open`](Self::solve_open) / [`solve_closed`](Self::solve_closed)) starts from a fresh board.
/// On success the board holds the tour; on failure every cell has been unmarked again.
/// The search is deterministic: the same size, start and mode always produce the same tour.
pub struct KnightsTour {
    board: Board,
    limits: SearchLimits,
    state: SearchState,
    nodes: u64,
}

impl KnightsTour {
    /// A solver for a `size`x`size` board with no search budget.
    pub fn new(size: Dimension) -> Self {
        Self::with_limits(size, SearchLimits::default())
    }

    /// A solver for a `size`x`size` board that gives up with [`TourError::LimitExceeded`] once `limits` run out.
    pub fn with_limits(size: Dimension, limits: SearchLimits) -> Self {
        Self {
            board: Board::new(size),
            limits,
            state: SearchState::Exploring,
            nodes: 0,
        }
    }

    /// The board left by the most recent search.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the solver, keeping the board.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// State of the most recent search.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Cells placed on the path by the most recent search, counting every attempt that was later undone.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Look for a tour from `start` that may end anywhere.
    pub fn solve_open(&mut self, start: Location) -> Result<bool, TourError> {
        self.solve(start, TourMode::Open)
    }

    /// Look for a tour from `start` whose last cell is a knight move away from `start`.
    pub fn solve_closed(&mut self, start: Location) -> Result<bool, TourError> {
        self.solve(start, TourMode::Closed)
    }

    /// Look for a tour from `start` under `mode`.
    ///
    /// Returns `Ok(true)` with the tour on [`board`](Self::board), `Ok(false)` if none exists from this start,
    /// or [`Err`] if `start` is off the board or the search budget ran out.
    pub fn solve(&mut self, start: Location, mode: TourMode) -> Result<bool, TourError> {
        let size = self.board.size();
        if !start.within(size) {
            return Err(TourError::StartOutOfBounds { start, size });
        }

        self.board.reset();
        self.nodes = 0;
        self.state = SearchState::Exploring;
        debug!(%size, %start, %mode, "searching for knight's tour");

        if parity_forbids(size, start, mode) {
            self.state = SearchState::Exhausted;
            debug!(%size, %start, %mode, "no tour can exist by square color parity");
            return Ok(false);
        }

        let found = match self.extend(start, 0, start, mode) {
            Ok(found) => found,
            Err(err) => {
                self.board.reset();
                debug!(%size, %start, %mode, nodes = self.nodes, "search abandoned: {err}");
                return Err(err);
            }
        };

        self.state = if found { SearchState::Solved } else { SearchState::Exhausted };
        debug!(%size, %start, %mode, found, nodes = self.nodes, "search finished");
        Ok(found)
    }

    /// Place the `order`-th cell of the path at `at` and try to finish the tour from there.
    ///
    /// On failure `at` is unmarked again, so the board is exactly as the caller left it.
    fn extend(&mut self, at: Location, order: usize, start: Location, mode: TourMode) -> Result<bool, TourError> {
        self.nodes += 1;
        if let Some(limit) = self.limits.max_nodes {
            if self.nodes > limit {
                return Err(TourError::LimitExceeded { limit, observed: self.nodes });
            }
        }

        self.board.mark_visited(at, order);

        if order == self.board.area() - 1 {
            let complete = match mode {
                TourMode::Open => true,
                TourMode::Closed => KnightStep::direction_to(at, start).is_some(),
            };
            if !complete {
                self.board.unmark(at);
            }
            return Ok(complete);
        }

        for candidate in ranked_candidates::<KnightStep>(&self.board, at) {
            if self.extend(candidate.target, order + 1, start, mode)? {
                return Ok(true);
            }
        }

        trace!(%at, order, "backtracking");
        self.board.unmark(at);
        Ok(false)
    }
}

/// Whether square colors alone rule out a tour.
///
/// A knight alternates colors every move, so a closed tour needs an even number of cells,
/// and an open tour over an odd number of cells must start and end on the majority color, the color of the corners.
fn parity_forbids(size: Dimension, start: Location, mode: TourMode) -> bool {
    let odd_area = size.get() % 2 == 1;
    match mode {
        TourMode::Open => odd_area && start.is_odd_square(),
        TourMode::Closed => odd_area,
    }
}
