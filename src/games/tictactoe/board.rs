//! Tic-Tac-Toe board vocabulary: marks, cells, coordinates, lines.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// The eight winning lines as row-major cell indices: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The symbol a player places.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// `X` belongs to the first player, `O` to the second.
    #[must_use]
    pub const fn for_player(player: Player) -> Self {
        match player {
            Player::First => Mark::X,
            Player::Second => Mark::O,
        }
    }

    #[must_use]
    pub const fn player(self) -> Player {
        match self {
            Mark::X => Player::First,
            Mark::O => Player::Second,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Contents of one board cell.
///
/// The derived order (`Empty < X < O`) is what D4 canonicalization minimizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Parse a display character. Space, `.` and `-` are empty.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            ' ' | '.' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// A cell position, 0-based row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Convert a row-major index (0-8) into a coordinate.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / SIZE) as u8,
            col: (index % SIZE) as u8,
        }
    }

    /// Row-major index, or `None` when off the board.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        let (row, col) = (usize::from(self.row), usize::from(self.col));
        (row < SIZE && col < SIZE).then_some(row * SIZE + col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The mark holding a complete line, if any.
#[must_use]
pub fn line_winner(cells: &[Cell; CELLS]) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        match (cells[a], cells[b], cells[c]) {
            (Cell::X, Cell::X, Cell::X) => Some(Mark::X),
            (Cell::O, Cell::O, Cell::O) => Some(Mark::O),
            _ => None,
        }
    })
}

/// Whether `mark` holds a complete line.
#[must_use]
pub fn has_line(cells: &[Cell; CELLS], mark: Mark) -> bool {
    let target = Cell::from(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == target))
}
