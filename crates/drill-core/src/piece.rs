//! Chess piece representation.

/// The four piece types drills are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    King = 0,
    Bishop = 1,
    Knight = 2,
    Rook = 3,
}

impl Piece {
    /// All piece types in order.
    pub const ALL: [Piece; 4] = [Piece::King, Piece::Bishop, Piece::Knight, Piece::Rook];

    /// Returns the index of this piece type (0-3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the uppercase English initial used in prompts.
    ///
    /// The knight takes 'N', as in algebraic notation.
    #[inline]
    pub const fn initial(self) -> char {
        match self {
            Piece::King => 'K',
            Piece::Bishop => 'B',
            Piece::Knight => 'N',
            Piece::Rook => 'R',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::King => "King",
            Piece::Bishop => "Bishop",
            Piece::Knight => "Knight",
            Piece::Rook => "Rook",
        };
        write!(f, "{}", name)
    }
}
