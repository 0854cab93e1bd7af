//! Negamax search with alpha-beta pruning.
//!
//! Scores are always from the point of view of the AI's own mark, signed by
//! `perspective` so that each level can simply negate its child's score.
//! Terminal boards score `value / depth`: a win one ply below the root is worth
//! half an immediate one, so faster wins and slower losses are preferred.

use std::time::Instant;

use tracing::debug;

use crate::core::{Board, GameRng, Mark, MoveError};
use crate::game::player::Player;
use crate::rules::EndResult;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Score of a subtree and the move that achieves it.
///
/// `position` is `None` for terminal boards, which have no moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub position: Option<usize>,
}

impl Scored {
    fn terminal(score: f64) -> Self {
        Self {
            score,
            position: None,
        }
    }
}

/// Computer player searching the full game tree.
///
/// Opening moves (see `SearchConfig::opening_threshold`) are random;
/// everything after is searched to the end of the game.
#[derive(Clone, Debug)]
pub struct NegamaxAi {
    mark: Mark,
    opponent: Mark,
    config: SearchConfig,
    rng: GameRng,
    move_count: u32,
    stats: SearchStats,
}

impl NegamaxAi {
    /// AI with the default configuration.
    pub fn new(mark: Mark) -> Self {
        Self::with_config(mark, SearchConfig::default())
    }

    /// AI seeded from `config.seed`.
    pub fn with_config(mark: Mark, config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(mark, config, rng)
    }

    /// AI with an injected random source.
    pub fn with_rng(mark: Mark, config: SearchConfig, rng: GameRng) -> Self {
        Self {
            mark,
            opponent: mark.opponent(),
            config,
            rng,
            move_count: 0,
            stats: SearchStats::default(),
        }
    }

    /// The opponent's mark.
    pub fn opponent(&self) -> Mark {
        self.opponent
    }

    /// Number of positions requested so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Statistics from the last `pick_position`.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose a position on `board`.
    ///
    /// Random while the board is in its opening, searched otherwise. Counts
    /// one move per call either way.
    pub fn pick_position(&mut self, board: &Board) -> Result<usize, MoveError> {
        self.move_count += 1;
        self.stats.reset();
        let start = Instant::now();

        let (position, score) =
            if board.occupied_count() <= self.config.opening_threshold(board.size()) {
                self.stats.random_opening = true;
                (self.rng.choose(board.available()).copied(), None)
            } else {
                let best = self.negamax_score(
                    board,
                    self.mark,
                    1,
                    1,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                );
                (best.position, Some(best.score))
            };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            mark = %self.mark,
            ?position,
            ?score,
            nodes = self.stats.nodes_visited,
            cutoffs = self.stats.cutoffs,
            random = self.stats.random_opening,
            "picked position"
        );

        position.ok_or(MoveError::BoardFull)
    }

    /// Classify a finished board from this AI's point of view.
    pub fn end_result(&self, board: &Board) -> EndResult {
        EndResult::for_mark(board, self.mark)
    }

    /// Score `board` with `mark` to move.
    ///
    /// `perspective` is `1` when `mark` is this AI's mark at the root and flips
    /// sign every ply. `depth` starts at 1. Children are tried in ascending
    /// position order and the first best score wins ties.
    pub fn negamax_score(
        &mut self,
        board: &Board,
        mark: Mark,
        perspective: i32,
        depth: u32,
        mut alpha: f64,
        beta: f64,
    ) -> Scored {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if board.is_over() {
            let value = self.end_result(board).value(self.config.win_score);
            return Scored::terminal(f64::from(perspective) * value / f64::from(depth));
        }

        let mut best = Scored {
            score: f64::NEG_INFINITY,
            position: None,
        };

        for &position in board.available() {
            let child = board.add_move(position, mark);
            let score = -self
                .negamax_score(
                    &child,
                    mark.opponent(),
                    -perspective,
                    depth + 1,
                    -beta,
                    -alpha,
                )
                .score;

            if score > best.score {
                best = Scored {
                    score,
                    position: Some(position),
                };
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

impl Player for NegamaxAi {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn pick_position(&mut self, board: &Board) -> Result<usize, MoveError> {
        NegamaxAi::pick_position(self, board)
    }

    fn is_computer(&self) -> bool {
        true
    }
}
