//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player, board::BOARD_SIZE};

type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Winning lines as (row, col) triples, in check order
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of the first line (in check order) holding three equal marks
    pub fn winning_player(cells: &Grid) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[(r0, c0), (r1, c1), (r2, c2)]| {
            let owner = cells[r0][c0].to_player()?;
            (cells[r1][c1] == cells[r0][c0] && cells[r2][c2] == cells[r0][c0]).then_some(owner)
        })
    }

    /// Number of complete lines owned by a player
    pub fn count_winning_lines(cells: &Grid, player: Player) -> usize {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&(r, c)| cells[r][c] == target))
            .count()
    }
}
