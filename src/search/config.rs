//! Configuration types for the minimax search.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Minimax`](super::Minimax) searcher.
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::search::SearchConfig;
///
/// let config = SearchConfig::new().with_early_exit(false);
/// assert!(!config.early_exit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Stop scanning a node's actions once the mover has found a forced win.
    ///
    /// The returned value and action are the same either way; disabling it
    /// only makes the search visit the full tree.
    pub early_exit: bool,
}

impl SearchConfig {
    /// Create the default configuration (early exit enabled)
    pub fn new() -> Self {
        Self { early_exit: true }
    }

    /// Enable or disable the forced-win early exit.
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
