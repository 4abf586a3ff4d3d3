//! Optimal (minimax) policy for every reachable position
//!
//! The table maps each reachable non-terminal board, keyed by
//! [`Board::encode`], to the move [`minimax`](crate::search::minimax) picks
//! there and the game value under optimal play.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    search::{Minimax, SearchConfig},
    tictactoe::{Action, Board, Player, Utility, reachable_states},
};

/// Optimal play in a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub player: Player,
    pub action: Action,
    pub value: Utility,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTable {
    pub description: String,
    pub entries: BTreeMap<String, PolicyEntry>,
}

impl PolicyTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Optimal play for `board`, `None` for terminal or unreachable boards
    pub fn lookup(&self, board: &Board) -> Option<&PolicyEntry> {
        self.entries.get(&board.encode())
    }

    /// Write the table as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("create {}", path.display()), e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self> {
        let file =
            File::open(path).map_err(|e| Error::io(format!("open {}", path.display()), e))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Compute the policy table for every reachable non-terminal board
pub fn compute_policy(config: SearchConfig) -> Result<PolicyTable> {
    compute_policy_with_progress(config, |_, _| {})
}

/// Like [`compute_policy`], reporting `(done, total)` after each position
pub fn compute_policy_with_progress(
    config: SearchConfig,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<PolicyTable> {
    let states: Vec<Board> = reachable_states()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .collect();
    let total = states.len();

    let mut search = Minimax::new(config);
    let mut entries = BTreeMap::new();

    for (i, board) in states.iter().enumerate() {
        let evaluation = search.evaluate(board)?;
        let action = evaluation.action.ok_or(Error::GameOver)?;
        entries.insert(
            board.encode(),
            PolicyEntry {
                player: board.to_move(),
                action,
                value: evaluation.value,
            },
        );
        on_progress(i + 1, total);
    }

    let stats = search.stats();
    debug!(
        positions = entries.len(),
        nodes = stats.nodes,
        early_exits = stats.early_exits,
        "policy computed"
    );

    Ok(PolicyTable {
        description: "Optimal (minimax) policy for Tic-Tac-Toe".to_string(),
        entries,
    })
}
