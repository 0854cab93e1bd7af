//! Display collaborator.
//!
//! The game only notifies; nothing is read back. Terminal front ends implement
//! this trait, tests record the calls.

use crate::core::{Board, Mark};

/// Notifications sent by [`Game`](super::Game).
pub trait GameDisplay {
    /// Called once at the start of every turn.
    fn clear_screen(&mut self);

    /// Board after a valid move, and once more when the game ends.
    fn display_board(&mut self, board: &Board);

    fn display_winner(&mut self, mark: Mark);

    fn display_draw(&mut self);

    fn display_game_over(&mut self);

    /// The last move was rejected.
    fn notify_invalid_option(&mut self);
}

impl<D: GameDisplay + ?Sized> GameDisplay for &mut D {
    fn clear_screen(&mut self) {
        (**self).clear_screen();
    }

    fn display_board(&mut self, board: &Board) {
        (**self).display_board(board);
    }

    fn display_winner(&mut self, mark: Mark) {
        (**self).display_winner(mark);
    }

    fn display_draw(&mut self) {
        (**self).display_draw();
    }

    fn display_game_over(&mut self) {
        (**self).display_game_over();
    }

    fn notify_invalid_option(&mut self) {
        (**self).notify_invalid_option();
    }
}
