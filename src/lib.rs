//! # tictactoe-core
//!
//! Tic-tac-toe on 3×3 and 4×4 boards with a negamax search AI.
//!
//! ## Design Principles
//!
//! 1. **Immutable Boards**: Every move produces a new `Board`. The search
//!    walks the tree by value and never undoes anything.
//!
//! 2. **Narrow Collaborators**: Rendering and input are traits
//!    (`GameDisplay`, `MoveInput`). The crate ships no terminal code.
//!
//! 3. **Explicit Randomness**: Opening moves draw from an injected,
//!    seeded `GameRng`, so games replay exactly under test.
//!
//! ## Modules
//!
//! - `core`: Marks, boards, errors, RNG
//! - `rules`: Win lines, game status, end results
//! - `negamax`: Search AI with alpha-beta pruning
//! - `game`: Players, display collaborator, turn loop, mode factory

pub mod core;
pub mod game;
pub mod negamax;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, BoardParseError, Cell, GameRng, Mark, ModeParseError, MoveError};

pub use crate::rules::{EndResult, GameStatus};

pub use crate::negamax::{NegamaxAi, Scored, SearchConfig, SearchStats};

pub use crate::game::{make_players, Game, GameDisplay, GameMode, Human, MoveInput, Player};
