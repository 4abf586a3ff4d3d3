//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod rules;
pub mod validation;

pub use board::{Action, BOARD_SIZE, Board, Cell, DRAW, O_WINS, Player, Utility, X_WINS};
pub use game::{Game, GameOutcome, Move};
pub use game_tree::reachable_states;
pub use lines::{LineAnalyzer, WINNING_LINES};
