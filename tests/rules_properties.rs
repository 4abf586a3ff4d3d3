//! Rule invariants checked exhaustively over every reachable position

use tictactoe_minimax::{
    Action, Board, Cell, Error, Player, actions, initial_state, player, result, terminal,
    tictactoe::reachable_states, utility, winner,
};

fn all_cells() -> impl Iterator<Item = Action> {
    (0..9).map(Action::from_index)
}

#[test]
fn player_alternates_after_every_move() {
    for board in reachable_states() {
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            assert_ne!(
                player(&next),
                player(&board),
                "turn did not pass after {action} on\n{board}"
            );
        }
    }
}

#[test]
fn result_adds_exactly_one_mark_for_the_mover() {
    for board in reachable_states() {
        for action in actions(&board) {
            let next = result(&board, action).unwrap();
            assert_eq!(next.occupied_count(), board.occupied_count() + 1);
            assert_eq!(next.cells[action.row][action.col], player(&board).to_cell());
            assert!(next.is_well_formed());
        }
    }
}

#[test]
fn result_never_mutates_its_input() {
    for board in reachable_states() {
        let snapshot = board;
        for action in all_cells() {
            let _ = result(&board, action);
        }
        assert_eq!(board, snapshot);
    }
}

#[test]
fn occupied_cells_are_rejected() {
    for board in reachable_states() {
        for action in all_cells() {
            let Some(occupant) = board.cells[action.row][action.col].to_player() else {
                continue;
            };
            match result(&board, action) {
                Err(Error::IllegalMove { row, col, occupant: o }) => {
                    assert_eq!((row, col), (action.row, action.col));
                    assert_eq!(o, occupant);
                }
                other => panic!("expected IllegalMove for {action} on\n{board}, got {other:?}"),
            }
        }
    }
}

#[test]
fn out_of_range_actions_are_rejected() {
    let board = initial_state();
    for action in [Action::new(3, 0), Action::new(0, 3), Action::new(7, 7)] {
        assert!(matches!(
            result(&board, action),
            Err(Error::OutOfBounds { .. })
        ));
    }
}

#[test]
fn read_only_queries_are_idempotent() {
    for board in reachable_states() {
        let snapshot = board;
        assert_eq!(winner(&board), winner(&board));
        assert_eq!(terminal(&board), terminal(&board));
        assert_eq!(utility(&board), utility(&board));
        assert_eq!(actions(&board), actions(&board));
        assert_eq!(player(&board), player(&board));
        assert_eq!(board, snapshot);
    }
}

#[test]
fn initial_board_offers_nine_actions() {
    assert_eq!(actions(&initial_state()).len(), 9);
}

#[test]
fn terminal_boards_offer_no_actions() {
    for board in reachable_states().into_iter().filter(terminal) {
        assert!(actions(&board).is_empty(), "actions offered on\n{board}");
    }
}

#[test]
fn utility_matches_winner_on_terminal_boards() {
    for board in reachable_states().into_iter().filter(terminal) {
        let expected = match winner(&board) {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        };
        assert_eq!(utility(&board), expected, "utility mismatch on\n{board}");
    }
}

#[test]
fn reachable_positions_are_exactly_the_reachable_predicate() {
    let reachable = reachable_states();
    assert_eq!(reachable.len(), 5478);
    assert!(reachable.iter().all(Board::is_reachable));

    // Enumerate all 3^9 grids
    let marks = [Cell::Empty, Cell::X, Cell::O];
    let mut count = 0;
    for code in 0..3usize.pow(9) {
        let mut board = Board::new();
        let mut rest = code;
        for index in 0..9 {
            let action = Action::from_index(index);
            board.cells[action.row][action.col] = marks[rest % 3];
            rest /= 3;
        }
        if board.is_reachable() {
            count += 1;
        }
    }
    assert_eq!(count, reachable.len());
}

#[test]
fn initial_state_scenario() {
    let board = initial_state();
    assert!(board.cells.iter().flatten().all(|&c| c == Cell::Empty));
    assert_eq!(player(&board), Player::X);
}

#[test]
fn top_row_win_scenario() {
    let board = [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]
        .into_iter()
        .try_fold(initial_state(), |board, (row, col)| {
            result(&board, Action::new(row, col))
        })
        .unwrap();

    assert_eq!(winner(&board), Some(Player::X));
    assert!(terminal(&board));
    assert_eq!(utility(&board), 1);
}

#[test]
fn full_board_draw_scenario() {
    // XOX
    // XOO
    // OXX
    let board = Board::from_string("XOXXOOOXX").unwrap();
    assert_eq!(winner(&board), None);
    assert!(terminal(&board));
    assert_eq!(utility(&board), 0);
}
