//! Exhaustive minimax search over the Tic-Tac-Toe game tree

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::config::SearchConfig;
use crate::{
    Error, Result,
    tictactoe::{Action, Board, O_WINS, Player, Utility, X_WINS, rules},
};

/// Value of a position together with the move that achieves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub value: Utility,
    /// `None` exactly when the evaluated board is terminal
    pub action: Option<Action>,
}

impl Evaluation {
    fn terminal(value: Utility) -> Self {
        Self {
            value,
            action: None,
        }
    }
}

/// Counters accumulated across searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Calls to `max_value`/`min_value`, terminal leaves included
    pub nodes: u64,
    /// Nodes that stopped scanning after finding a forced win for the mover
    pub early_exits: u64,
}

/// Depth-first minimax searcher.
///
/// Every call re-derives its results from scratch; there is no
/// transposition table. The tree below any position has at most 549,946
/// nodes, so a full search from the empty board is cheap.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Optimal action for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] on a terminal board, where no action exists.
    #[instrument(level = "debug", skip(self, board), fields(board = %board.encode()))]
    pub fn best_action(&mut self, board: &Board) -> Result<Action> {
        let Some(action) = self.evaluate(board)?.action else {
            return Err(Error::GameOver);
        };
        Ok(action)
    }

    /// Game value and optimal action for the player to move
    pub fn evaluate(&mut self, board: &Board) -> Result<Evaluation> {
        let before = self.stats.nodes;
        let mover = rules::player(board);
        let evaluation = match mover {
            Player::X => self.max_value(board)?,
            Player::O => self.min_value(board)?,
        };

        debug!(
            player = %mover,
            value = evaluation.value,
            action = ?evaluation.action,
            nodes = self.stats.nodes - before,
            "search complete"
        );
        Ok(evaluation)
    }

    /// Best outcome X can force from `board`, assuming O replies optimally.
    ///
    /// Among equally valued actions the first in scan order is kept, and the
    /// scan stops at the first forced win when early exit is enabled.
    pub fn max_value(&mut self, board: &Board) -> Result<Evaluation> {
        self.stats.nodes += 1;
        if rules::terminal(board) {
            return Ok(Evaluation::terminal(rules::utility(board)));
        }

        let mut best = Evaluation {
            value: Utility::MIN,
            action: None,
        };
        for action in rules::actions(board) {
            let reply = self.min_value(&rules::result(board, action)?)?;
            if reply.value > best.value {
                best = Evaluation {
                    value: reply.value,
                    action: Some(action),
                };
                if self.config.early_exit && best.value == X_WINS {
                    self.stats.early_exits += 1;
                    break;
                }
            }
        }
        Ok(best)
    }

    /// Best outcome O can force from `board`, assuming X replies optimally.
    pub fn min_value(&mut self, board: &Board) -> Result<Evaluation> {
        self.stats.nodes += 1;
        if rules::terminal(board) {
            return Ok(Evaluation::terminal(rules::utility(board)));
        }

        let mut best = Evaluation {
            value: Utility::MAX,
            action: None,
        };
        for action in rules::actions(board) {
            let reply = self.max_value(&rules::result(board, action)?)?;
            if reply.value < best.value {
                best = Evaluation {
                    value: reply.value,
                    action: Some(action),
                };
                if self.config.early_exit && best.value == O_WINS {
                    self.stats.early_exits += 1;
                    break;
                }
            }
        }
        Ok(best)
    }
}

/// Optimal action for the player to move on `board`.
///
/// # Errors
///
/// Returns [`Error::GameOver`] if the board is terminal.
pub fn minimax(board: &Board) -> Result<Action> {
    Minimax::default().best_action(board)
}

/// Maximizing evaluator with the default configuration
pub fn max_value(board: &Board) -> Result<Evaluation> {
    Minimax::default().max_value(board)
}

/// Minimizing evaluator with the default configuration
pub fn min_value(board: &Board) -> Result<Evaluation> {
    Minimax::default().min_value(board)
}
