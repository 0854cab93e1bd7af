//! Turn loop.
//!
//! ## Turn order
//!
//! Turns alternate on the turn counter, not on successful moves. A rejected
//! move still uses up its turn, so a player who keeps entering invalid input
//! is asked again every other turn while the opponent keeps their slots.

use tracing::{debug, info, trace};

use crate::core::{Board, Mark, MoveError};
use crate::rules::GameStatus;

use super::display::GameDisplay;
use super::player::Player;

/// A game in progress: one live board, two players, one display.
pub struct Game<D: GameDisplay> {
    board: Board,
    display: D,
    players: [Box<dyn Player>; 2],
    turn: usize,
}

impl<D: GameDisplay> Game<D> {
    /// Create a game. `players[0]` moves first.
    pub fn new(board: Board, display: D, players: [Box<dyn Player>; 2]) -> Self {
        Self {
            board,
            display,
            players,
            turn: 0,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Display collaborator.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Consume the game and return the display.
    pub fn into_display(self) -> D {
        self.display
    }

    /// Turns played so far, valid or not.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Mark of the player asked on the next turn.
    pub fn current_mark(&self) -> Mark {
        self.players[self.turn % 2].mark()
    }

    /// Status derived from the board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Someone has won or the board is full.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Play one turn for the active player.
    ///
    /// A rejected move leaves the board alone and notifies the display.
    pub fn play_turn(&mut self) {
        self.display.clear_screen();

        let player = &mut self.players[self.turn % 2];
        let mark = player.mark();
        self.turn += 1;

        match Self::choose_move(player.as_mut(), &self.board) {
            Ok(position) => {
                trace!(%mark, position, "move accepted");
                self.board = self.board.add_move(position, mark);
                self.display.display_board(&self.board);
            }
            Err(err) => {
                debug!(%mark, %err, "move rejected");
                self.display.notify_invalid_option();
            }
        }
    }

    fn choose_move(player: &mut dyn Player, board: &Board) -> Result<usize, MoveError> {
        let position = player.pick_position(board)?;
        board.validate(position)
    }

    /// Play until the game ends and announce the result.
    pub fn play(&mut self) -> GameStatus {
        while !self.is_over() {
            self.play_turn();
        }

        let status = self.status();
        info!(?status, turns = self.turn, "game over");

        self.display.display_board(&self.board);
        self.display.display_game_over();
        match status {
            GameStatus::Won(mark) => self.display.display_winner(mark),
            GameStatus::Drawn => self.display.display_draw(),
            GameStatus::InProgress => {}
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Recorder {
        boards: usize,
        clears: usize,
        invalid: usize,
    }

    impl GameDisplay for Recorder {
        fn clear_screen(&mut self) {
            self.clears += 1;
        }
        fn display_board(&mut self, _board: &Board) {
            self.boards += 1;
        }
        fn display_winner(&mut self, _mark: Mark) {}
        fn display_draw(&mut self) {}
        fn display_game_over(&mut self) {}
        fn notify_invalid_option(&mut self) {
            self.invalid += 1;
        }
    }

    struct Fake(Mark, VecDeque<usize>);

    impl Player for Fake {
        fn mark(&self) -> Mark {
            self.0
        }
        fn pick_position(&mut self, _board: &Board) -> Result<usize, MoveError> {
            self.1.pop_front().ok_or(MoveError::NotANumber(String::new()))
        }
    }

    fn game(x: &[usize], o: &[usize]) -> Game<Recorder> {
        Game::new(
            Board::default(),
            Recorder::default(),
            [
                Box::new(Fake(Mark::X, x.iter().copied().collect())),
                Box::new(Fake(Mark::O, o.iter().copied().collect())),
            ],
        )
    }

    #[test]
    fn test_turn_places_mark() {
        let mut game = game(&[0], &[]);
        game.play_turn();
        assert_eq!(game.board().mark_at(0), Some(Mark::X));
        assert_eq!(game.display().boards, 1);
        assert_eq!(game.display().clears, 1);
    }

    #[test]
    fn test_occupied_square_is_rejected() {
        let mut game = game(&[0], &[0]);
        game.play_turn();
        game.play_turn();
        assert_eq!(game.board().mark_at(0), Some(Mark::X));
        assert_eq!(game.board().occupied_count(), 1);
        assert_eq!(game.display().invalid, 1);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn test_invalid_turn_still_passes_play() {
        let mut game = game(&[9, 1], &[4]);
        game.play_turn();
        assert_eq!(game.current_mark(), Mark::O);
        game.play_turn();
        game.play_turn();
        assert_eq!(game.board().mark_at(4), Some(Mark::O));
        assert_eq!(game.board().mark_at(1), Some(Mark::X));
    }

    #[test]
    fn test_play_on_finished_board() {
        let board: Board = "xxx oo_ ___".parse().unwrap();
        let mut game = Game::new(
            board,
            Recorder::default(),
            [
                Box::new(Fake(Mark::X, VecDeque::new())),
                Box::new(Fake(Mark::O, VecDeque::new())),
            ],
        );
        assert_eq!(game.play(), GameStatus::Won(Mark::X));
        assert_eq!(game.turn(), 0);
        assert_eq!(game.display().boards, 1);
    }
}
