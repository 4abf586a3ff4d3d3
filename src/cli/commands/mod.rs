//! Subcommand implementations

pub mod best_move;
pub mod export;
pub mod self_play;
