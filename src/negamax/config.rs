//! Negamax search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::rules::lines::MAX_SIZE;

/// Negamax search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Terminal score magnitude before depth scaling (default: 10).
    /// A win found at depth `d` scores `win_score / d`.
    pub win_score: f64,

    /// Random seed for opening moves.
    /// Same seed produces the same openings.
    pub seed: u64,

    /// On a 3×3 board, pick randomly while at most this many squares are taken.
    pub opening_moves_3x3: usize,

    /// On a 4×4 board, pick randomly while at most this many squares are taken.
    /// Keeps the full-width search small enough to finish quickly.
    pub opening_moves_4x4: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            win_score: 10.0,
            seed: 42,
            opening_moves_3x3: 2,
            opening_moves_4x4: 5,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom terminal score.
    pub fn with_win_score(mut self, score: f64) -> Self {
        self.win_score = score;
        self
    }

    /// Create a new config with a custom opening threshold for one board size.
    pub fn with_opening_moves(mut self, size: usize, occupied: usize) -> Self {
        if size == MAX_SIZE {
            self.opening_moves_4x4 = occupied;
        } else {
            self.opening_moves_3x3 = occupied;
        }
        self
    }

    /// Occupied-square count up to which moves are random on this board size.
    #[must_use]
    pub fn opening_threshold(&self, size: usize) -> usize {
        if size == MAX_SIZE {
            self.opening_moves_4x4
        } else {
            self.opening_moves_3x3
        }
    }
}
