//! The rules of the game as free functions over [`Board`] values.
//!
//! These are the primitives the search is written against. Each one is a
//! pure query or a copy-producing transition; none mutates its input.

use super::board::{Action, Board, Player, Utility};

/// Starting position: an empty board
pub fn initial_state() -> Board {
    Board::new()
}

/// Player who has the next turn on a board
pub fn player(board: &Board) -> Player {
    board.to_move()
}

/// All legal actions, scanning rows then columns; empty once the game is over
pub fn actions(board: &Board) -> Vec<Action> {
    board.legal_actions()
}

/// Board that results from the player to move marking `action`.
///
/// # Errors
///
/// Returns [`crate::Error::IllegalMove`] if the cell is occupied and
/// [`crate::Error::OutOfBounds`] if it lies outside the grid.
pub fn result(board: &Board, action: Action) -> crate::Result<Board> {
    board.apply(action)
}

/// Winner of the game, if there is one
pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

/// True once the board is full or someone has won
pub fn terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// 1 if X has won, -1 if O has won, 0 otherwise
pub fn utility(board: &Board) -> Utility {
    board.utility()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn test_initial_state_is_empty_with_x_to_move() {
        let board = initial_state();
        assert!(board.cells.iter().flatten().all(|&c| c == Cell::Empty));
        assert_eq!(player(&board), Player::X);
        assert_eq!(actions(&board).len(), 9);
    }

    #[test]
    fn test_result_uses_mover_of_input_board() {
        let board = result(&initial_state(), Action::new(0, 0)).unwrap();
        let board = result(&board, Action::new(2, 2)).unwrap();
        assert_eq!(board.cells[0][0], Cell::X);
        assert_eq!(board.cells[2][2], Cell::O);
        assert_eq!(player(&board), Player::X);
    }

    #[test]
    fn test_top_row_win() {
        let board = [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]
            .into_iter()
            .try_fold(initial_state(), |board, a| result(&board, a.into()))
            .unwrap();

        assert_eq!(winner(&board), Some(Player::X));
        assert!(terminal(&board));
        assert_eq!(utility(&board), 1);
        assert!(actions(&board).is_empty());
    }
}
