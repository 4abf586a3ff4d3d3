//! Tic-Tac-Toe CLI - Query the perfect-play minimax engine
//!
//! This CLI provides:
//! - The optimal move and game value for any position
//! - Optimal-vs-optimal self-play from any position
//! - Export of the optimal policy for every reachable position

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_minimax::cli::{self, commands};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Perfect-play Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    /// Log search details to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal move for a position
    BestMove(commands::best_move::BestMoveArgs),

    /// Play the engine against itself
    SelfPlay(commands::self_play::SelfPlayArgs),

    /// Export the optimal policy to JSON
    ExportPolicy(commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::BestMove(args) => commands::best_move::execute(args),
        Commands::SelfPlay(args) => commands::self_play::execute(args),
        Commands::ExportPolicy(args) => commands::export::execute(args),
    }
}
