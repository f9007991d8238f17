//! Core types for chess pattern drills.
//!
//! This crate provides the fundamental types used across the drill
//! generator:
//! - [`Piece`] for the pieces drills are generated about
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`SquareColor`] for square shade under the standard coloring

mod color;
mod piece;
mod square;

pub use color::SquareColor;
pub use piece::Piece;
pub use square::{File, Rank, Square};
