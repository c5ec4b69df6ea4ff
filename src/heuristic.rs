//! Warnsdorff's rule: visit the square with the fewest onward moves first, before it becomes unreachable.

use itertools::Itertools;

use crate::board::Board;
use crate::location::Location;
use crate::step::Leaper;

/// A move considered while expanding one search step, ranked by the [`degree`] of its target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Candidate<St> {
    /// Onward moves available from `target` on the board as it stood when the candidate was ranked.
    pub degree: usize,
    /// The step leading to `target`.
    pub step: St,
    /// The unvisited cell this move lands on.
    pub target: Location,
}

/// Count the unvisited cells one step away from `location` on the current board.
///
/// `location` itself is not consulted, so this measures how constrained the step after `location` would be.
pub fn degree<St: Leaper>(board: &Board, location: Location) -> usize {
    St::neighbors_of(location)
        .filter(|(_, neighbor)| board.is_unvisited(*neighbor))
        .count()
}

/// Every unvisited neighbor of `from`, most constrained first.
///
/// Degrees are all computed against the board as it is now and are not revisited while the candidates are tried.
/// Ties keep the enumeration order of [`Leaper::neighbors_of`].
pub fn ranked_candidates<St: Leaper>(board: &Board, from: Location) -> Vec<Candidate<St>> {
    St::neighbors_of(from)
        .filter(|(_, target)| board.is_unvisited(*target))
        .map(|(step, target)| Candidate { degree: degree::<St>(board, target), step, target })
        // stable, so equal degrees stay in enumeration order
        .sorted_by_key(|candidate| candidate.degree)
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;

    use crate::board::Board;
    use crate::heuristic::{degree, ranked_candidates};
    use crate::location::Location;
    use crate::step::KnightStep;

    #[test]
    fn degree_counts_open_neighbors() {
        let mut board = Board::new(NonZero::new(8).unwrap());
        assert_eq!(degree::<KnightStep>(&board, Location(0, 0)), 2);
        assert_eq!(degree::<KnightStep>(&board, Location(0, 1)), 3);
        assert_eq!(degree::<KnightStep>(&board, Location(4, 4)), 8);

        board.mark_visited(Location(2, 1), 0);
        assert_eq!(degree::<KnightStep>(&board, Location(0, 0)), 1);
    }

    #[test]
    fn degree_ignores_the_square_itself() {
        let mut board = Board::new(NonZero::new(5).unwrap());
        board.mark_visited(Location(0, 0), 0);
        assert_eq!(degree::<KnightStep>(&board, Location(0, 0)), 2);
    }

    #[test]
    fn candidates_sorted_by_degree_then_enumeration() {
        let mut board = Board::new(NonZero::new(8).unwrap());
        board.mark_visited(Location(0, 0), 0);

        let candidates = ranked_candidates::<KnightStep>(&board, Location(0, 0));
        // (2, 1) and (1, 2) both have 5 onward squares once the corner is taken
        assert_eq!(candidates.iter().map(|c| (c.target, c.degree)).collect_vec(), vec![
            (Location(2, 1), 5),
            (Location(1, 2), 5),
        ]);

        board.mark_visited(Location(2, 1), 1);
        let candidates = ranked_candidates::<KnightStep>(&board, Location(2, 1));
        let degrees = candidates.iter().map(|c| c.degree).collect_vec();
        assert!(degrees.iter().tuple_windows().all(|(a, b)| a <= b));
        assert!(candidates.iter().all(|c| board.is_unvisited(c.target)));
        assert_eq!(candidates.len(), 5);
    }

    #[test]
    fn cornered_square_has_no_candidates() {
        let mut board = Board::new(NonZero::new(3).unwrap());
        board.mark_visited(Location(1, 1), 0);
        assert!(ranked_candidates::<KnightStep>(&board, Location(1, 1)).is_empty());
    }
}
