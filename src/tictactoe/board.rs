//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Side length of the board
pub const BOARD_SIZE: usize = 3;

/// Game-theoretic value of a board from X's perspective
pub type Utility = i32;

/// Utility of a board X has won
pub const X_WINS: Utility = 1;

/// Utility of a board O has won
pub const O_WINS: Utility = -1;

/// Utility of a drawn or unfinished board
pub const DRAW: Utility = 0;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Utility of a board this player has won
    pub fn winning_utility(self) -> Utility {
        match self {
            Player::X => X_WINS,
            Player::O => O_WINS,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move target: the (row, column) of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Build an action from a row-major index in 0..9
    pub fn from_index(index: usize) -> Self {
        Action {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    /// Row-major index of the targeted cell
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of cells.
///
/// Boards are small `Copy` values; every move produces a new board and the
/// player to move is derived from the piece counts rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
    pub(crate) empty: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order.
    /// Whitespace is filtered out, so `"XO.\n.X.\n..O"` parses the same as
    /// `"XO..X...O"`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not have exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are not well-formed (X must equal O or lead by one)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE * BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            let action = Action::from_index(i);
            board.cells[action.row][action.col] = cell;
        }

        if !board.is_well_formed() {
            let count = board.count_pieces();
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Bounds-checked cell lookup
    pub fn cell(&self, action: Action) -> Result<Cell, crate::Error> {
        if !action.in_bounds() {
            return Err(crate::Error::OutOfBounds {
                row: action.row,
                col: action.col,
            });
        }
        Ok(self.cells[action.row][action.col])
    }

    /// The player whose turn it is.
    ///
    /// X moves whenever the counts are level (including the empty board),
    /// O otherwise. Counts are not validated here.
    pub fn to_move(&self) -> Player {
        let count = self.count_pieces();
        if count.empty == BOARD_SIZE * BOARD_SIZE || count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Every empty cell in row-major order, regardless of whether the game is over
    pub fn empty_cells(&self) -> Vec<Action> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Action::new(row, col)))
            .filter(|a| self.cells[a.row][a.col] == Cell::Empty)
            .collect()
    }

    /// Legal actions in this position (empty cells when the game is not over)
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_cells()
    }

    /// Place the mark of the player to move and return the new board
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board, crate::Error> {
        if let Some(occupant) = self.cell(action)?.to_player() {
            return Err(crate::Error::IllegalMove {
                row: action.row,
                col: action.col,
                occupant,
            });
        }

        let mut next = *self;
        next.cells[action.row][action.col] = self.to_move().to_cell();
        Ok(next)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winning_player(&self.cells)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.count_pieces().empty == 0 || self.winner().is_some()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.count_pieces().empty == 0 && self.winner().is_none()
    }

    /// Value of the board for X: the winner's utility once terminal, 0 otherwise
    pub fn utility(&self) -> Utility {
        if !self.is_terminal() {
            return DRAW;
        }
        self.winner().map_or(DRAW, Player::winning_utility)
    }

    /// Get a compact string representation for use as a key
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
