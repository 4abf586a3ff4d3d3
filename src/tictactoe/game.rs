//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while play continues
    pub fn of(board: &Board) -> Option<Self> {
        if !board.is_terminal() {
            return None;
        }
        Some(match board.winner() {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        })
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            initial: Board::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Continue a game from an arbitrary well-formed position
    pub fn from_position(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play a move for whoever is to move
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.apply(action)?;

        self.moves.push(Move {
            action,
            player: current.to_move(),
        });
        self.outcome = GameOutcome::of(&next);

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current state.
    /// This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        self.moves
            .iter()
            .take(end_index)
            .try_fold(self.initial, |board, m| board.apply(m.action))
    }

    /// Get current board state
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, starting with the initial board
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(self.initial);

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_players_and_outcome() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            game.play(Action::new(row, col)).unwrap();
        }

        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        let players: Vec<_> = game.moves.iter().map(|m| m.player).collect();
        assert_eq!(
            players,
            vec![Player::X, Player::O, Player::X, Player::O, Player::X]
        );
        assert!(matches!(
            game.play(Action::new(2, 0)),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_state_sequence_grows_by_one_mark() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        game.play(Action::new(0, 0)).unwrap();

        let states = game.state_sequence().unwrap();
        assert_eq!(states.len(), 3);
        for (i, state) in states.iter().enumerate() {
            assert_eq!(state.occupied_count(), i);
        }
    }

    #[test]
    fn test_illegal_move_leaves_game_unchanged() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();

        let err = game.play(Action::new(1, 1)).unwrap_err();
        assert!(matches!(err, crate::Error::IllegalMove { .. }));
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.outcome, None);
    }

    #[test]
    fn test_from_terminal_position_is_over() {
        let board = Board::from_string("XXXOO....").unwrap();
        let game = Game::from_position(board);
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
    }
}
