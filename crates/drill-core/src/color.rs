//! Square shade representation.

/// The shade of a board square under the standard alternating coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SquareColor {
    White = 0,
    Black = 1,
}

impl SquareColor {
    /// Returns the opposite shade.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            SquareColor::White => SquareColor::Black,
            SquareColor::Black => SquareColor::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for SquareColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SquareColor::White => write!(f, "White"),
            SquareColor::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_shade() {
        assert_eq!(SquareColor::White.opposite(), SquareColor::Black);
        assert_eq!(SquareColor::Black.opposite(), SquareColor::White);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", SquareColor::White), "White");
        assert_eq!(format!("{}", SquareColor::Black), "Black");
    }
}
