//! Puzzle-type applicability and weighted selection.

use crate::{DrillError, PuzzleType};
use drill_core::Piece;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Types applicable to pieces with ray or leap movement support.
const RAY_AND_LEAP_TYPES: [PuzzleType; 3] = [
    PuzzleType::DirectionalReach,
    PuzzleType::SquareColor,
    PuzzleType::SingleMoveReach,
];

/// Types applicable to every piece.
const POSITIONAL_TYPES: [PuzzleType; 2] = [PuzzleType::SquareColor, PuzzleType::SingleMoveReach];

/// Returns the closed set of puzzle types applicable to a piece.
///
/// Directional reach is only posed for bishops and knights.
pub fn applicable_types(piece: Piece) -> &'static [PuzzleType] {
    match piece {
        Piece::Bishop | Piece::Knight => &RAY_AND_LEAP_TYPES,
        Piece::King | Piece::Rook => &POSITIONAL_TYPES,
    }
}

/// Picks a puzzle type for the piece.
///
/// When directional reach is applicable it is favoured: a uniform
/// six-sided roll sends 1-4 to directional reach (2/3), 5 to square
/// colour (1/6) and 6 to single-move reach (1/6). Otherwise the
/// applicable types are drawn from uniformly.
pub fn select_type<R: Rng + ?Sized>(rng: &mut R, piece: Piece) -> Result<PuzzleType, DrillError> {
    let applicable = applicable_types(piece);
    if applicable.contains(&PuzzleType::DirectionalReach) {
        let roll: u8 = rng.random_range(1..=6);
        Ok(match roll {
            1..=4 => PuzzleType::DirectionalReach,
            5 => PuzzleType::SquareColor,
            _ => PuzzleType::SingleMoveReach,
        })
    } else {
        applicable
            .choose(rng)
            .copied()
            .ok_or(DrillError::NoApplicablePuzzleType { piece })
    }
}
