//! Self-play command - Play optimal against optimal to the end of the game

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_board, print_kv, print_section, print_stats},
    search::{Minimax, SearchConfig},
    tictactoe::{Board, Game, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against itself")]
pub struct SelfPlayArgs {
    /// Starting board in row-major order ('.' for empty)
    #[arg(long, default_value = ".........")]
    pub board: String,
}

/// Play minimax moves for both sides until the game ends
pub fn play_out(start: Board, config: SearchConfig) -> crate::Result<(Game, Minimax)> {
    let mut game = Game::from_position(start);
    let mut search = Minimax::new(config);

    while game.outcome.is_none() {
        let board = game.current_state()?;
        let action = search.best_action(&board)?;
        game.play(action)?;
    }

    Ok((game, search))
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let start = Board::from_string(&args.board)?;
    let (game, search) = play_out(start, SearchConfig::default())?;

    print_section("Self-play");
    print_board(&start);

    let states = game.state_sequence()?;
    for (ply, (mv, board)) in game.moves.iter().zip(states.iter().skip(1)).enumerate() {
        println!("\n{}. {} plays {}", ply + 1, mv.player, mv.action);
        print_board(board);
        if !board.is_terminal() {
            println!("  {} to move", mv.player.opponent());
        }
    }

    print_section("Result");
    let outcome = match game.outcome {
        Some(GameOutcome::Win(winner)) => format!("{winner} wins"),
        Some(GameOutcome::Draw) | None => "draw".to_string(),
    };
    print_kv("Outcome", &outcome);
    print_kv("Moves played", &game.moves.len().to_string());
    print_stats(&search.stats());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_optimal_self_play_draws() {
        let (game, _) = play_out(Board::new(), SearchConfig::default()).unwrap();
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert_eq!(game.moves.len(), 9);

        for pair in game.moves.windows(2) {
            assert_eq!(pair[1].player, pair[0].player.opponent());
        }
    }

    #[test]
    fn test_self_play_converts_winning_position() {
        // O answered the corner with an adjacent edge, which loses
        let start = Board::from_string("XO.......").unwrap();
        let (game, _) = play_out(start, SearchConfig::default()).unwrap();
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_self_play_from_terminal_board_plays_nothing() {
        let start = Board::from_string("XXXOO....").unwrap();
        let (game, search) = play_out(start, SearchConfig::default()).unwrap();
        assert!(game.moves.is_empty());
        assert_eq!(search.stats().nodes, 0);
    }
}
