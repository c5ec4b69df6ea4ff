/// One square of a [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// The knight reached this square as the `order`-th step of the path, counting the start as `0`.
    Visited { order: usize },
    /// Not yet reached by the knight.
    #[default]
    Unvisited,
}

impl Cell {
    /// The visit order, or `None` for the unvisited sentinel.
    #[inline]
    pub fn order(&self) -> Option<usize> {
        match self {
            Cell::Visited { order } => Some(*order),
            Cell::Unvisited => None,
        }
    }

    #[inline]
    pub fn is_unvisited(&self) -> bool {
        matches!(self, Cell::Unvisited)
    }
}
