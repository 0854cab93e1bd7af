//! Core types: marks, boards, errors, RNG.
//!
//! Everything here is plain data with no knowledge of players or search.

pub mod board;
pub mod error;
pub mod mark;
pub mod rng;

pub use board::{Board, Cell, Cells};
pub use error::{BoardParseError, ModeParseError, MoveError};
pub use mark::Mark;
pub use rng::GameRng;
