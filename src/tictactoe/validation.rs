//! Board state validation logic

use super::{
    board::{Board, Cell, Player},
    lines::{LineAnalyzer, WINNING_LINES},
};

impl Board {
    /// Check the piece-count invariant: X equals O or leads by exactly one
    pub fn is_well_formed(&self) -> bool {
        let count = self.count_pieces();
        count.x == count.o || count.x == count.o + 1
    }

    /// Check if the board could arise from legal play starting on the empty board
    pub fn is_reachable(&self) -> bool {
        if !self.is_well_formed() {
            return false;
        }

        let count = self.count_pieces();
        let x_lines = LineAnalyzer::count_winning_lines(&self.cells, Player::X);
        let o_lines = LineAnalyzer::count_winning_lines(&self.cells, Player::O);

        if x_lines > 0 && o_lines > 0 {
            return false;
        }

        // The winner must have made the final move
        if x_lines > 0 && count.x != count.o + 1 {
            return false;
        }
        if o_lines > 0 && count.x != count.o {
            return false;
        }

        // Two lines can only be completed together by one shared final mark
        if x_lines > 1 && !self.winning_lines_share_cell(Cell::X) {
            return false;
        }

        true
    }

    fn winning_lines_share_cell(&self, mark: Cell) -> bool {
        let lines: Vec<_> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&(r, c)| self.cells[r][c] == mark))
            .collect();

        (0..3).any(|r| (0..3).any(|c| lines.iter().all(|line| line.contains(&(r, c)))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        let mut board = Board::new();
        for (i, ch) in s.chars().enumerate() {
            board.cells[i / 3][i % 3] = Cell::from_char(ch).unwrap();
        }
        board
    }

    #[test]
    fn test_well_formed_counts() {
        assert!(board(".........").is_well_formed());
        assert!(board("X........").is_well_formed());
        assert!(board("XO.......").is_well_formed());
        assert!(!board("O........").is_well_formed());
        assert!(!board("XX.......").is_well_formed());
    }

    #[test]
    fn test_both_players_winning_is_unreachable() {
        assert!(!board("XXXOOO...").is_reachable());
    }

    #[test]
    fn test_x_win_requires_x_to_move_last() {
        assert!(board("XXXOO....").is_reachable());
        assert!(!board("XXXOO.O..").is_reachable());
    }

    #[test]
    fn test_o_win_requires_equal_counts() {
        assert!(board("OOOXX.X..").is_reachable());
        assert!(!board("OOOXX.XX.").is_reachable());
    }

    #[test]
    fn test_double_line_through_shared_cell() {
        // XXX
        // XOO
        // XOO
        assert!(board("XXXXOOXOO").is_reachable());
    }
}
