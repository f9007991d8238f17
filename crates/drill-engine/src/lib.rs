//! Drill generation for chess pattern recognition.
//!
//! This crate turns a randomly drawn piece and square into one of
//! three training prompts:
//! - directional reach: complete a partially masked destination square
//! - square colour: name the shade of a square
//! - single-move reach: name every square the piece can reach
//!
//! The board is always empty except for the one piece in question, so
//! movement generation knows nothing about blocking, captures, or
//! legality beyond board edges.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let line = drill_engine::generate(&mut rng).unwrap();
//! println!("{}", line);
//! ```

mod error;
mod generator;
mod movement;
mod puzzle;
mod selector;

pub use error::DrillError;
pub use generator::generate;
pub use movement::reachable_squares;
pub use puzzle::{compose, MaskedAxis, MaskedSquare, PuzzleType};
pub use selector::{applicable_types, select_type};
