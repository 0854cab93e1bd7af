//! Playing a game: players, display collaborator, turn loop.
//!
//! ```
//! use tictactoe_core::core::{Board, Mark};
//! use tictactoe_core::game::{Game, GameDisplay, Player};
//! use tictactoe_core::negamax::{NegamaxAi, SearchConfig};
//! use tictactoe_core::rules::GameStatus;
//!
//! struct Quiet;
//!
//! impl GameDisplay for Quiet {
//!     fn clear_screen(&mut self) {}
//!     fn display_board(&mut self, _board: &Board) {}
//!     fn display_winner(&mut self, _mark: Mark) {}
//!     fn display_draw(&mut self) {}
//!     fn display_game_over(&mut self) {}
//!     fn notify_invalid_option(&mut self) {}
//! }
//!
//! let players: [Box<dyn Player>; 2] = [
//!     Box::new(NegamaxAi::with_config(Mark::X, SearchConfig::default().with_seed(1))),
//!     Box::new(NegamaxAi::with_config(Mark::O, SearchConfig::default().with_seed(2))),
//! ];
//! let mut game = Game::new(Board::default(), Quiet, players);
//! assert_ne!(game.play(), GameStatus::InProgress);
//! ```

mod display;
mod game;
mod mode;
pub mod player;

pub use display::GameDisplay;
pub use game::Game;
pub use mode::{make_players, GameMode};
pub use player::{Human, MoveInput, Player};
