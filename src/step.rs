use std::hash::Hash;

use strum::VariantArray;

use crate::location::Location;

/// A fixed displacement a piece may make in one move.
///
/// [`KnightStep`] is the built-in implementation.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// The `(d_row, d_col)` displacement of this step.
    fn offset(&self) -> (isize, isize);

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// No bounds checking happens here; the result may lie off the board.
    fn attempt_from(&self, location: Location) -> Location {
        location.offset_by(self.offset())
    }
}

/// The eight leaps of a knight.
///
/// The declaration order is the enumeration order used by [`Leaper::neighbors_of`] and therefore the tie-break order of the search:
/// `(2, 1)`, `(1, 2)`, `(-1, 2)`, `(-2, 1)`, `(-2, -1)`, `(-1, -2)`, `(1, -2)`, `(2, -1)` as `(d_row, d_col)`.
/// Changing it changes which tour is found, though not whether one is.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum KnightStep {
    DownDownRight,
    DownRightRight,
    UpRightRight,
    UpUpRight,
    UpUpLeft,
    UpLeftLeft,
    DownLeftLeft,
    DownDownLeft,
}

impl Step for KnightStep {
    fn offset(&self) -> (isize, isize) {
        match self {
            Self::DownDownRight => (2, 1),
            Self::DownRightRight => (1, 2),
            Self::UpRightRight => (-1, 2),
            Self::UpUpRight => (-2, 1),
            Self::UpUpLeft => (-2, -1),
            Self::UpLeftLeft => (-1, -2),
            Self::DownLeftLeft => (1, -2),
            Self::DownDownLeft => (2, -1),
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation for every step set.
pub trait Leaper: Step {
    /// All locations one step away from `location` in "theory", by attempting every step in `Self::VARIANTS` in declaration order.
    ///
    /// Off-board results are included; filter them with [`Board::is_unvisited`](crate::Board::is_unvisited).
    fn neighbors_of(location: Location) -> impl Iterator<Item = (Self, Location)>;
    /// Determine the step taking `a` to `b`, if any single step does.
    fn direction_to(a: Location, b: Location) -> Option<Self>;
}

impl<St> Leaper for St
where
    St: Step + 'static,
{
    fn neighbors_of(location: Location) -> impl Iterator<Item = (Self, Location)> {
        Self::VARIANTS.iter()
            .map(move |dir| (*dir, dir.attempt_from(location)))
    }

    fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}
