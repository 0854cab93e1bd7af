//! Players: anything that can pick a position on a board.
//!
//! Two implementations ship with the crate: [`Human`], which reads raw input
//! from a [`MoveInput`] collaborator, and
//! [`NegamaxAi`](crate::negamax::NegamaxAi).

use crate::core::{Board, Mark, MoveError};

/// A participant in the game.
pub trait Player {
    /// Mark this player places.
    fn mark(&self) -> Mark;

    /// Choose a position on `board`.
    ///
    /// The result need not be valid; the game checks it against the board.
    fn pick_position(&mut self, board: &Board) -> Result<usize, MoveError>;

    /// Whether moves are computed rather than entered.
    fn is_computer(&self) -> bool {
        false
    }
}

/// Source of raw human input, typically a terminal prompt.
pub trait MoveInput {
    /// Ask the player holding `mark` for a move and return what they typed.
    fn get_move_from_user(&mut self, mark: Mark) -> String;
}

/// Player whose moves come from a [`MoveInput`].
#[derive(Clone, Debug)]
pub struct Human<I> {
    mark: Mark,
    input: I,
}

impl<I: MoveInput> Human<I> {
    pub fn new(mark: Mark, input: I) -> Self {
        Self { mark, input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<I: MoveInput> Player for Human<I> {
    fn mark(&self) -> Mark {
        self.mark
    }

    // Range and occupancy are the board's business.
    fn pick_position(&mut self, _board: &Board) -> Result<usize, MoveError> {
        let raw = self.input.get_move_from_user(self.mark);
        let parsed = raw.trim().parse::<usize>();
        parsed.map_err(|_| MoveError::NotANumber(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted(VecDeque<&'static str>, Vec<Mark>);

    impl MoveInput for Scripted {
        fn get_move_from_user(&mut self, mark: Mark) -> String {
            self.1.push(mark);
            self.0.pop_front().unwrap_or_default().to_string()
        }
    }

    fn human(inputs: &[&'static str]) -> Human<Scripted> {
        Human::new(Mark::X, Scripted(inputs.iter().copied().collect(), Vec::new()))
    }

    #[test]
    fn test_gets_move_from_user() {
        let mut player = human(&["0"]);
        assert_eq!(player.pick_position(&Board::default()), Ok(0));
        assert_eq!(player.input().1, vec![Mark::X]);
    }

    #[test]
    fn test_trims_input() {
        let mut player = human(&[" 7\n"]);
        assert_eq!(player.pick_position(&Board::default()), Ok(7));
    }

    #[test]
    fn test_non_numeric_input() {
        let mut player = human(&["a", "-1", ""]);
        let board = Board::default();
        assert_eq!(
            player.pick_position(&board),
            Err(MoveError::NotANumber("a".to_string()))
        );
        assert!(player.pick_position(&board).is_err());
        assert!(player.pick_position(&board).is_err());
    }

    #[test]
    fn test_out_of_range_is_passed_through() {
        let mut player = human(&["42"]);
        assert_eq!(player.pick_position(&Board::default()), Ok(42));
    }

    #[test]
    fn test_human_is_not_computer() {
        assert!(!human(&[]).is_computer());
        assert_eq!(human(&[]).mark(), Mark::X);
    }
}
