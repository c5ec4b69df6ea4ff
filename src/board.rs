use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::{Array2, ArrayView2};

use crate::cell::Cell;
use crate::location::{Dimension, Location};

/// A square board recording, for each cell, the order in which the knight visited it.
///
/// At any point during a search the visited cells carry exactly the orders `0..k` for the current path length `k`,
/// so the board always encodes a single simple path.
/// Only the search engine mutates it; callers get read-only views through [`cells`](Self::cells) and [`visit_orders`](Self::visit_orders).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    pub(crate) size: Dimension,
}

impl Board {
    /// A fresh board with every cell unvisited.
    pub fn new(size: Dimension) -> Self {
        Self {
            cells: Array2::from_elem((size.get(), size.get()), Cell::Unvisited),
            size,
        }
    }

    /// Side length of this board.
    #[inline]
    pub fn size(&self) -> Dimension {
        self.size
    }

    /// Number of cells a complete tour has to visit.
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Whether `location` is on the board and not yet visited.
    ///
    /// This is the only bounds or occupancy check the search needs.
    #[inline]
    pub fn is_unvisited(&self, location: Location) -> bool {
        self.cells.get(location.as_index()).is_some_and(Cell::is_unvisited)
    }

    /// The visit order recorded at `location`, if it is on the board and visited.
    #[inline]
    pub fn order_at(&self, location: Location) -> Option<usize> {
        self.cells.get(location.as_index()).and_then(Cell::order)
    }

    /// Read-only view of the grid, indexed `[row, col]`.
    pub fn cells(&self) -> ArrayView2<'_, Cell> {
        self.cells.view()
    }

    /// The grid of visit orders, `None` where unvisited.
    pub fn visit_orders(&self) -> Array2<Option<usize>> {
        self.cells.map(Cell::order)
    }

    /// The visited cells sorted by visit order, if the board holds a complete tour.
    ///
    /// Returns `None` unless every cell is visited and the orders form exactly `0..area`.
    pub fn tour(&self) -> Option<Vec<Location>> {
        let mut path: Vec<Option<Location>> = vec![None; self.area()];

        for (index, cell) in self.cells.indexed_iter() {
            let order = cell.order()?;
            let slot = path.get_mut(order)?;
            if slot.is_some() {
                return None;
            }
            *slot = Some(Location::from(index));
        }

        path.into_iter().collect()
    }

    pub(crate) fn mark_visited(&mut self, location: Location, order: usize) {
        debug_assert!(self.is_unvisited(location), "{location} marked twice");
        self.cells[location.as_index()] = Cell::Visited { order };
    }

    pub(crate) fn unmark(&mut self, location: Location) {
        debug_assert!(!self.is_unvisited(location), "{location} unmarked while unvisited");
        self.cells[location.as_index()] = Cell::Unvisited;
    }

    pub(crate) fn reset(&mut self) {
        self.cells.fill(Cell::Unvisited);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // wide enough for the largest order on this board
        let width = (self.area() - 1).to_string().len();

        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter()
                .map(|cell| match cell.order() {
                    Some(order) => format!("{order:>width$}"),
                    None => format!("{:>width$}", '.'),
                })
                .join(" "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use crate::board::Board;
    use crate::cell::Cell;
    use crate::location::Location;

    fn board(size: usize) -> Board {
        Board::new(NonZero::new(size).unwrap())
    }

    #[test]
    fn fresh_board_is_unvisited() {
        let board = board(3);
        assert_eq!(board.area(), 9);
        assert!(board.cells().iter().all(|cell| *cell == Cell::Unvisited));
        assert_eq!(format!("{}", board), ". . .
. . .
. . .
");
    }

    #[test]
    fn unvisited_checks_bounds() {
        let mut board = board(3);
        assert!(board.is_unvisited(Location(2, 2)));
        assert!(!board.is_unvisited(Location(3, 0)));
        assert!(!board.is_unvisited(Location(0, 3)));
        assert!(!board.is_unvisited(Location(0, 0).offset_by((-1, 0))));

        board.mark_visited(Location(1, 2), 0);
        assert!(!board.is_unvisited(Location(1, 2)));
        assert_eq!(board.order_at(Location(1, 2)), Some(0));

        board.unmark(Location(1, 2));
        assert!(board.is_unvisited(Location(1, 2)));
        assert_eq!(board.order_at(Location(1, 2)), None);
    }

    #[test]
    fn display_pads_orders() {
        let mut board = board(4);
        board.mark_visited(Location(0, 0), 0);
        board.mark_visited(Location(2, 1), 1);
        board.mark_visited(Location(3, 3), 12);

        assert_eq!(format!("{}", board), " 0  .  .  .
 .  .  .  .
 .  1  .  .
 .  .  . 12
");
    }

    #[test]
    fn partial_board_has_no_tour() {
        let mut board = board(2);
        board.mark_visited(Location(0, 0), 0);
        assert_eq!(board.tour(), None);

        board.mark_visited(Location(0, 1), 1);
        board.mark_visited(Location(1, 0), 2);
        board.mark_visited(Location(1, 1), 3);
        assert_eq!(board.tour(), Some(vec![Location(0, 0), Location(0, 1), Location(1, 0), Location(1, 1)]));

        board.reset();
        assert_eq!(board.visit_orders().iter().flatten().count(), 0);
    }
}
