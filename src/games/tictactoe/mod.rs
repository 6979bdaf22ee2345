//! Tic-Tac-Toe on a 3×3 board.
//!
//! - `X` (first player) and `O` (second player) alternate
//! - Three of a mark in a row, column, or diagonal wins
//! - A full board with no line is a draw
//!
//! Cache keys can optionally be reduced under the eight board symmetries.

mod board;
mod state;
mod symmetry;

pub use board::{line_winner, Cell, Coord, Mark, CELLS, LINES, SIZE};
pub use state::{TicTacToeKey, TicTacToeMove, TicTacToeState};
pub use symmetry::{canonical_cells, Symmetry};
