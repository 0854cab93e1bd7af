//! Negamax game-tree search for tic-tac-toe.
//!
//! ## Overview
//!
//! - **Negamax**: one maximizing routine, scores negated at every ply
//! - **Alpha-beta pruning**: children are skipped once `alpha >= beta`
//! - **Depth-aware scoring**: terminal values are divided by their depth
//! - **Random openings**: the first moves of a game are not searched
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe_core::core::{Board, Mark};
//! use tictactoe_core::negamax::NegamaxAi;
//!
//! let mut ai = NegamaxAi::new(Mark::X);
//! let board: Board = "xo_ _o_ x__".parse().unwrap();
//!
//! // x completes the left column
//! assert_eq!(ai.pick_position(&board), Ok(3));
//! assert_eq!(ai.move_count(), 1);
//! ```

pub mod config;
pub mod search;
pub mod stats;

pub use config::SearchConfig;
pub use search::{NegamaxAi, Scored};
pub use stats::SearchStats;
