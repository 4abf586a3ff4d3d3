//! Minimax search for perfect play

pub mod config;
pub mod minimax;

pub use config::SearchConfig;
pub use minimax::{Evaluation, Minimax, SearchStats, max_value, min_value, minimax};
