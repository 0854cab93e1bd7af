//! Game rules: win lines and outcomes.
//!
//! - `lines`: precomputed win-line tables per board size
//! - `outcome`: game status and per-mark end results

pub mod lines;
pub mod outcome;

pub use lines::{normalize_size, win_lines, DEFAULT_SIZE, MAX_SIZE};
pub use outcome::{EndResult, GameStatus};
