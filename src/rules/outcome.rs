//! Game status and end results.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::mark::Mark;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress,
    /// A win line is complete.
    Won(Mark),
    /// Board is full without a win line.
    Drawn,
}

impl GameStatus {
    /// Derive the status of a board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        match board.winning_mark() {
            Some(mark) => GameStatus::Won(mark),
            None if board.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Won or Drawn.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Winning mark, if any.
    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Terminal board classified from one mark's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndResult {
    Win,
    Loss,
    Draw,
}

impl EndResult {
    /// Classify `board` for `mark`.
    ///
    /// Any board without a winner counts as a draw; callers only ask about
    /// terminal boards.
    #[must_use]
    pub fn for_mark(board: &Board, mark: Mark) -> Self {
        match board.winning_mark() {
            Some(winner) if winner == mark => EndResult::Win,
            Some(_) => EndResult::Loss,
            None => EndResult::Draw,
        }
    }

    /// Signed terminal value: `+win_score`, `-win_score` or zero.
    #[must_use]
    pub fn value(self, win_score: f64) -> f64 {
        match self {
            EndResult::Win => win_score,
            EndResult::Loss => -win_score,
            EndResult::Draw => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_status_of_board() {
        assert_eq!(GameStatus::of(&Board::default()), GameStatus::InProgress);
        assert_eq!(GameStatus::of(&board("xxx oo_ ___")), GameStatus::Won(Mark::X));
        assert_eq!(GameStatus::of(&board("xxo oxx xoo")), GameStatus::Drawn);
    }

    #[test]
    fn test_status_helpers() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
        assert_eq!(GameStatus::Won(Mark::O).winner(), Some(Mark::O));
        assert_eq!(GameStatus::Drawn.winner(), None);
    }

    #[test]
    fn test_end_result_for_mark() {
        let won = board("xxx oo_ ___");
        assert_eq!(EndResult::for_mark(&won, Mark::X), EndResult::Win);
        assert_eq!(EndResult::for_mark(&won, Mark::O), EndResult::Loss);
        assert_eq!(EndResult::for_mark(&board("xxo oox xox"), Mark::X), EndResult::Draw);
    }

    #[test]
    fn test_end_result_value() {
        assert_eq!(EndResult::Win.value(10.0), 10.0);
        assert_eq!(EndResult::Loss.value(10.0), -10.0);
        assert_eq!(EndResult::Draw.value(10.0), 0.0);
    }
}
