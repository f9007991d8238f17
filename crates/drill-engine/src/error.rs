//! Error conditions for drill generation.

use drill_core::{Piece, Square};
use thiserror::Error;

/// Errors that can occur when generating a drill.
///
/// All of these are fatal for the current invocation; there is no
/// retry path because each invocation does exactly one unit of work.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    /// Directional-reach movement was requested for a piece without
    /// ray or leap movement support (King, Rook).
    #[error("directional reach is not supported for the {piece}")]
    UnsupportedPiece { piece: Piece },

    /// The movement generator produced an empty list. Cannot happen
    /// on a standard 8x8 board, but checked defensively.
    #[error("no reachable squares for the {piece} on {origin}")]
    NoReachableSquares { piece: Piece, origin: Square },

    /// The applicability mapping yielded no puzzle types for a piece.
    /// Unreachable under the fixed mapping, but the mapping is
    /// data-driven so the condition is still checked.
    #[error("no applicable puzzle type for the {piece}")]
    NoApplicablePuzzleType { piece: Piece },
}
