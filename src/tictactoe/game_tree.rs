//! Enumeration of the positions reachable by legal play

use std::collections::{HashSet, VecDeque};

use super::board::Board;

/// Every board reachable from the empty board, stopping at terminal boards.
///
/// Boards are returned in breadth-first order with children expanded in
/// action scan order, so the result is deterministic. The empty board is
/// first.
pub fn reachable_states() -> Vec<Board> {
    let root = Board::new();
    let mut states = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(root);
    queue.push_back(root);

    while let Some(state) = queue.pop_front() {
        states.push(state);

        for action in state.legal_actions() {
            let Ok(next) = state.apply(action) else {
                continue;
            };
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    states
}
