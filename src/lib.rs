//! Perfect-play Tic-Tac-Toe
//!
//! This crate provides:
//! - The rules of 3x3 Tic-Tac-Toe over immutable board values
//! - Exhaustive minimax search with a deterministic first-found tie-break
//! - An optimal policy table for every reachable position
//! - A small CLI for querying the engine

pub mod cli;
pub mod error;
pub mod policy;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Evaluation, Minimax, SearchConfig, max_value, min_value, minimax};
pub use tictactoe::{
    Action, Board, Cell, Player, Utility,
    rules::{actions, initial_state, player, result, terminal, utility, winner},
};
