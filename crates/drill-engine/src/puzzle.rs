//! Puzzle kinds and prompt rendering.

use crate::movement::reachable_squares;
use crate::DrillError;
use drill_core::{Piece, Square};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt;

/// The three kinds of drill prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleType {
    /// Complete a partially masked destination square reachable by the
    /// piece. Only posed for bishops and knights.
    DirectionalReach,
    /// Name the shade of a square.
    SquareColor,
    /// Name every square the piece can reach; the prompt is
    /// deliberately open-ended and no answer set is enumerated.
    SingleMoveReach,
}

impl fmt::Display for PuzzleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PuzzleType::DirectionalReach => "directional reach",
            PuzzleType::SquareColor => "square colour",
            PuzzleType::SingleMoveReach => "single-move reach",
        };
        write!(f, "{}", name)
    }
}

/// Which coordinate of a masked square is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskedAxis {
    File,
    Rank,
}

/// A target square with exactly one coordinate replaced by `'_'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskedSquare {
    target: Square,
    hidden: MaskedAxis,
}

impl MaskedSquare {
    /// Masks the given square along the given axis.
    pub const fn new(target: Square, hidden: MaskedAxis) -> Self {
        MaskedSquare { target, hidden }
    }

    /// Masks the given square along a uniformly chosen axis.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, target: Square) -> Self {
        let hidden = if rng.random_bool(0.5) {
            MaskedAxis::File
        } else {
            MaskedAxis::Rank
        };
        MaskedSquare::new(target, hidden)
    }

    /// Returns the unmasked target square.
    pub const fn target(self) -> Square {
        self.target
    }
}

impl fmt::Display for MaskedSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hidden {
            MaskedAxis::File => write!(f, "_{}", self.target.rank()),
            MaskedAxis::Rank => write!(f, "{}_", self.target.file()),
        }
    }
}

/// Renders the prompt line for the given puzzle kind.
pub fn compose<R: Rng + ?Sized>(
    rng: &mut R,
    piece: Piece,
    origin: Square,
    kind: PuzzleType,
) -> Result<String, DrillError> {
    match kind {
        PuzzleType::DirectionalReach => directional_reach(rng, piece, origin),
        PuzzleType::SquareColor => Ok(square_color(origin)),
        PuzzleType::SingleMoveReach => Ok(single_move_reach(piece, origin)),
    }
}

/// Picks a uniformly random reachable target and masks one of its two
/// coordinates, 50/50 between file and rank.
pub fn directional_reach<R: Rng + ?Sized>(
    rng: &mut R,
    piece: Piece,
    origin: Square,
) -> Result<String, DrillError> {
    let targets = reachable_squares(piece, origin)?;
    let target = targets
        .choose(rng)
        .copied()
        .ok_or(DrillError::NoReachableSquares { piece, origin })?;
    let masked = MaskedSquare::random(rng, target);
    Ok(format!("{}{} -> {}", piece.initial(), origin, masked))
}

/// The expected answer (the shade) is supplied by the learner, not
/// printed.
pub fn square_color(origin: Square) -> String {
    format!("{} colour", origin)
}

/// Open-ended template; actual legal moves are neither enumerated nor
/// validated.
pub fn single_move_reach(piece: Piece, origin: Square) -> String {
    format!("{}{} -> __", piece.initial(), origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn masked_square_hides_one_axis() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(MaskedSquare::new(e4, MaskedAxis::File).to_string(), "_4");
        assert_eq!(MaskedSquare::new(e4, MaskedAxis::Rank).to_string(), "e_");
    }

    #[test]
    fn square_color_prompt() {
        let c6 = Square::from_algebraic("c6").unwrap();
        assert_eq!(square_color(c6), "c6 colour");
    }

    #[test]
    fn single_move_reach_prompt() {
        let g1 = Square::from_algebraic("g1").unwrap();
        assert_eq!(single_move_reach(Piece::Knight, g1), "Ng1 -> __");
        assert_eq!(single_move_reach(Piece::King, g1), "Kg1 -> __");
    }

    #[test]
    fn directional_reach_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let d4 = Square::from_algebraic("d4").unwrap();
        let line = directional_reach(&mut rng, Piece::Bishop, d4).unwrap();
        assert!(line.starts_with("Bd4 -> "));
        let target = &line["Bd4 -> ".len()..];
        assert_eq!(target.chars().count(), 2);
        assert_eq!(target.matches('_').count(), 1);
    }

    #[test]
    fn directional_reach_rejects_rook_and_king() {
        let mut rng = StdRng::seed_from_u64(0);
        let a1 = Square::A1;
        for piece in [Piece::King, Piece::Rook] {
            assert_eq!(
                directional_reach(&mut rng, piece, a1),
                Err(DrillError::UnsupportedPiece { piece })
            );
        }
    }

    proptest! {
        #[test]
        fn masked_display_has_exactly_one_underscore(index in 0u8..64, hide_file: bool) {
            let sq = Square::from_index(index).unwrap();
            let hidden = if hide_file { MaskedAxis::File } else { MaskedAxis::Rank };
            let rendered = MaskedSquare::new(sq, hidden).to_string();
            prop_assert_eq!(rendered.chars().count(), 2);
            prop_assert_eq!(rendered.matches('_').count(), 1);
        }
    }
}
