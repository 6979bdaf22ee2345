//! Tic-Tac-Toe positions, moves, and cache keys.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Outcome, Player, Result};
use crate::rules::GameState;

use super::board::{has_line, line_winner, Cell, Coord, Mark, CELLS, SIZE};
use super::symmetry::canonical_cells;

/// Place `mark` on the cell at `coord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeMove {
    pub coord: Coord,
    pub mark: Mark,
}

impl TicTacToeMove {
    #[must_use]
    pub const fn new(coord: Coord, mark: Mark) -> Self {
        Self { coord, mark }
    }
}

impl std::fmt::Display for TicTacToeMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.mark, self.coord)
    }
}

/// Cache key: the (optionally symmetry-reduced) grid plus the player to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeKey {
    pub cells: [Cell; CELLS],
    pub to_move: Player,
}

/// A Tic-Tac-Toe position. `X` is always the first player's mark.
///
/// ```
/// use game_solver::games::tictactoe::TicTacToeState;
/// use game_solver::core::Player;
///
/// let state = TicTacToeState::from_rows(["XX.", "OO.", "..."], Player::First).unwrap();
/// assert_eq!(state.to_string(), "X X .\nO O .\n. . .");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeState {
    cells: [Cell; CELLS],
    to_move: Player,
    symmetric: bool,
}

impl TicTacToeState {
    /// Empty board, first player (`X`) to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
            to_move: Player::First,
            symmetric: false,
        }
    }

    /// Parse a board from three row strings.
    ///
    /// Rows are either three cell characters (`"X.O"`) or five with single
    /// spaces between cells (`"X . O"`). `X`/`O` are marks; space, `.` and
    /// `-` are empty. Mark counts must be consistent with `to_move`: equal
    /// when the first player moves, one extra `X` when the second does.
    /// The player to move must not already hold a line.
    pub fn from_rows(rows: [&str; SIZE], to_move: Player) -> Result<Self> {
        let mut cells = [Cell::Empty; CELLS];

        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            let picked: Vec<char> = match chars.len() {
                3 => chars,
                5 if chars[1] == ' ' && chars[3] == ' ' => vec![chars[0], chars[2], chars[4]],
                _ => {
                    return Err(Error::InvalidBoard {
                        reason: format!("row {r} '{row}' must have 3 cells"),
                    })
                }
            };

            for (c, ch) in picked.into_iter().enumerate() {
                cells[r * SIZE + c] = Cell::from_char(ch).ok_or_else(|| Error::InvalidBoard {
                    reason: format!("invalid character '{ch}' in row {r}"),
                })?;
            }
        }

        let x = cells.iter().filter(|&&c| c == Cell::X).count();
        let o = cells.iter().filter(|&&c| c == Cell::O).count();
        let consistent = match to_move {
            Player::First => x == o,
            Player::Second => x == o + 1,
        };
        if !consistent {
            return Err(Error::InvalidPieceCounts { x, o });
        }
        if has_line(&cells, Mark::for_player(to_move)) {
            return Err(Error::InvalidBoard {
                reason: format!("{to_move} to move already has a line"),
            });
        }

        Ok(Self {
            cells,
            to_move,
            symmetric: false,
        })
    }

    /// Enable or disable D4 symmetry reduction in `canonicalize`.
    ///
    /// Successor positions inherit the setting.
    #[must_use]
    pub fn with_symmetry(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    #[must_use]
    pub fn uses_symmetry(&self) -> bool {
        self.symmetric
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Contents of one cell, or `None` when off the board.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        coord.index().map(|i| self.cells[i])
    }

    /// The mark holding a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        line_winner(&self.cells)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    fn mover_mark(&self) -> Mark {
        Mark::for_player(self.to_move)
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TicTacToeState {
    type Move = TicTacToeMove;
    type Key = TicTacToeKey;

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn legal_moves(&self) -> Vec<TicTacToeMove> {
        let mark = self.mover_mark();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| TicTacToeMove::new(Coord::from_index(i), mark))
            .collect()
    }

    fn apply(&self, mv: &TicTacToeMove) -> Result<Self> {
        let index = match mv.coord.index() {
            Some(i) if self.cells[i].is_empty() && mv.mark == self.mover_mark() => i,
            _ => return Err(Error::invalid_move(mv, self)),
        };

        let mut cells = self.cells;
        cells[index] = Cell::from(mv.mark);
        Ok(Self {
            cells,
            to_move: self.to_move.other(),
            symmetric: self.symmetric,
        })
    }

    fn is_terminal_win_for_last_mover(&self) -> bool {
        has_line(&self.cells, Mark::for_player(self.last_mover()))
    }

    fn canonicalize(&self) -> TicTacToeKey {
        let cells = if self.symmetric {
            canonical_cells(&self.cells)
        } else {
            self.cells
        };
        TicTacToeKey {
            cells,
            to_move: self.to_move,
        }
    }

    /// A full board with no line is a draw.
    fn stalemate_outcome(&self) -> Outcome {
        Outcome::Draw
    }

    fn is_legal(&self, mv: &TicTacToeMove) -> bool {
        matches!(mv.coord.index(), Some(i) if self.cells[i].is_empty() && mv.mark == self.mover_mark())
    }
}

impl std::fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.chunks(SIZE).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let text: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            write!(f, "{}", text.join(" "))?;
        }
        Ok(())
    }
}
