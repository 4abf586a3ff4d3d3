//! Best-move command - Ask the engine for the optimal move in a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{describe_value, print_board, print_kv, print_section, print_stats},
    search::{Minimax, SearchConfig},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal move for a position")]
pub struct BestMoveArgs {
    /// Board in row-major order, e.g. "XX.OO...." ('.' for empty)
    #[arg(long, default_value = ".........")]
    pub board: String,

    /// Search the full tree instead of stopping at forced wins
    #[arg(long)]
    pub no_early_exit: bool,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let config = SearchConfig::new().with_early_exit(!args.no_early_exit);

    print_section("Position");
    print_board(&board);

    if board.is_terminal() {
        let outcome = match board.winner() {
            Some(winner) => format!("{winner} has won"),
            None => "draw".to_string(),
        };
        println!("\nGame is over ({outcome}); there is no move to make.");
        return Ok(());
    }

    let mut search = Minimax::new(config);
    let evaluation = search.evaluate(&board)?;

    print_section("Minimax");
    print_kv("To move", &board.to_move().to_string());
    if let Some(action) = evaluation.action {
        print_kv("Best move", &action.to_string());
    }
    print_kv(
        "Game value",
        &format!("{} ({})", evaluation.value, describe_value(evaluation.value)),
    );
    print_stats(&search.stats());

    Ok(())
}
