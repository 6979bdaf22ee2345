//! Bundled game implementations.

pub mod nim;
pub mod tictactoe;
