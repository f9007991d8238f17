//! One-shot drill generation.

use crate::{puzzle, selector, DrillError};
use drill_core::{File, Piece, Rank, Square};
use rand::Rng;

/// Generates one drill prompt line.
///
/// Draws a square and a piece uniformly and independently, picks a
/// puzzle type by the piece-conditioned weighting, and renders the
/// prompt. All randomness comes from the injected `rng`, so seeded
/// runs are reproducible.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<String, DrillError> {
    let file = File::ALL[rng.random_range(0..File::ALL.len())];
    let rank = Rank::ALL[rng.random_range(0..Rank::ALL.len())];
    let origin = Square::new(file, rank);
    let piece = Piece::ALL[rng.random_range(0..Piece::ALL.len())];

    let kind = selector::select_type(rng, piece)?;
    puzzle::compose(rng, piece, origin, kind)
}
