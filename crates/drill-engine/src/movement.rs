//! Reachable-square generation on an otherwise empty board.
//!
//! Only the bishop (diagonal rays) and the knight (fixed leap offsets)
//! are supported; these are the pieces the directional-reach drill is
//! posed for. No blocking pieces are modeled, so rays stop only at the
//! board edge.

use crate::DrillError;
use drill_core::{Piece, Square};

/// Diagonal ray directions as (file_delta, rank_delta).
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Knight leap offsets as (file_delta, rank_delta).
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Computes every square the given piece can reach from `origin` on an
/// empty board, bounded by the board edges.
///
/// The origin itself is never included. Returns
/// [`DrillError::UnsupportedPiece`] for pieces other than bishop and
/// knight, and [`DrillError::NoReachableSquares`] if the result would
/// be empty (impossible on the standard board, checked anyway).
pub fn reachable_squares(piece: Piece, origin: Square) -> Result<Vec<Square>, DrillError> {
    let targets = match piece {
        Piece::Bishop => bishop_targets(origin),
        Piece::Knight => knight_targets(origin),
        piece => return Err(DrillError::UnsupportedPiece { piece }),
    };

    if targets.is_empty() {
        return Err(DrillError::NoReachableSquares { piece, origin });
    }
    Ok(targets)
}

/// Walks each diagonal ray one step at a time until the edge.
fn bishop_targets(origin: Square) -> Vec<Square> {
    let mut targets = Vec::new();
    for (file_delta, rank_delta) in BISHOP_RAYS {
        let mut current = origin;
        while let Some(next) = current.offset(file_delta, rank_delta) {
            targets.push(next);
            current = next;
        }
    }
    targets
}

/// Keeps the in-bounds results of the eight fixed leap offsets.
fn knight_targets(origin: Square) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(file_delta, rank_delta)| origin.offset(file_delta, rank_delta))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn squares(names: &[&str]) -> Vec<Square> {
        names
            .iter()
            .map(|n| Square::from_algebraic(n).unwrap())
            .collect()
    }

    fn sorted(mut v: Vec<Square>) -> Vec<Square> {
        v.sort_by_key(|sq| sq.index());
        v
    }

    #[test]
    fn knight_in_corner() {
        let reached = reachable_squares(Piece::Knight, Square::A1).unwrap();
        assert_eq!(sorted(reached), sorted(squares(&["b3", "c2"])));
    }

    #[test]
    fn knight_in_center() {
        let d4 = Square::from_algebraic("d4").unwrap();
        let reached = reachable_squares(Piece::Knight, d4).unwrap();
        assert_eq!(reached.len(), 8);
        assert_eq!(
            sorted(reached),
            sorted(squares(&["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]))
        );
    }

    #[test]
    fn bishop_in_corner() {
        // Only the long diagonal survives; the other three rays run
        // off-board immediately.
        let reached = reachable_squares(Piece::Bishop, Square::A1).unwrap();
        assert_eq!(
            sorted(reached),
            sorted(squares(&["b2", "c3", "d4", "e5", "f6", "g7", "h8"]))
        );
    }

    #[test]
    fn bishop_in_center_counts_all_four_rays() {
        let d4 = Square::from_algebraic("d4").unwrap();
        let reached = reachable_squares(Piece::Bishop, d4).unwrap();
        // 3 up-left, 4 up-right, 3 down-right, 3 down-left.
        assert_eq!(reached.len(), 13);
    }

    #[test]
    fn king_and_rook_are_unsupported() {
        for piece in [Piece::King, Piece::Rook] {
            assert_eq!(
                reachable_squares(piece, Square::A1),
                Err(DrillError::UnsupportedPiece { piece })
            );
        }
    }

    proptest! {
        #[test]
        fn origin_never_in_own_move_list(index in 0u8..64) {
            let origin = Square::from_index(index).unwrap();
            for piece in [Piece::Bishop, Piece::Knight] {
                let reached = reachable_squares(piece, origin).unwrap();
                prop_assert!(!reached.contains(&origin));
                prop_assert!(!reached.is_empty());
            }
        }

        #[test]
        fn every_target_is_one_leap_or_diagonal(index in 0u8..64) {
            let origin = Square::from_index(index).unwrap();
            for target in reachable_squares(Piece::Bishop, origin).unwrap() {
                let df = i16::from(target.file().index()) - i16::from(origin.file().index());
                let dr = i16::from(target.rank().index()) - i16::from(origin.rank().index());
                prop_assert_eq!(df.abs(), dr.abs());
                prop_assert_ne!(df, 0);
            }
            for target in reachable_squares(Piece::Knight, origin).unwrap() {
                let df = i16::from(target.file().index()) - i16::from(origin.file().index());
                let dr = i16::from(target.rank().index()) - i16::from(origin.rank().index());
                prop_assert_eq!(df.abs() * dr.abs(), 2);
            }
        }
    }
}
