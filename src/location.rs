use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// The side length of a square board. Zero-sized boards are unrepresentable.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(row, col)` on a board. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    /// Offset this location by `(d_row, d_col)`.
    ///
    /// Stepping off the top or left edge wraps around to a huge coordinate, which is never in bounds for any real board.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies on a board with side length `size`.
    #[inline]
    pub fn within(&self, size: Dimension) -> bool {
        self.0 < size.get() && self.1 < size.get()
    }

    /// The color of the square under this location on a checkered board; corners are always `false`.
    #[inline]
    pub(crate) fn is_odd_square(&self) -> bool {
        (self.0 + self.1) % 2 == 1
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
