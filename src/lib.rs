//! # game-solver
//!
//! An exhaustive solver for two-player, zero-sum, perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The solver only sees the `GameState` trait.
//!    New games are new trait implementations, never solver changes.
//!
//! 2. **Immutable Positions**: `apply` returns a new position. Successors
//!    may share structure with their parent but never alias mutable state.
//!
//! 3. **Explicit Caches**: Memo tables are values owned by a solver or
//!    handed to it. There is no global state.
//!
//! ## Architecture
//!
//! - **Backward Induction**: A position is won for its mover iff some move
//!   reaches a position lost for the opponent. Draws are a third value.
//!
//! - **Canonical Keys**: Results are cached under a per-game canonical key,
//!   so equivalent positions (permuted Nim piles, symmetric boards) are
//!   solved once.
//!
//! ## Modules
//!
//! - `core`: Players, outcomes, errors, RNG
//! - `rules`: The `GameState` trait
//! - `games`: Nim and Tic-Tac-Toe
//! - `search`: Solver, memo tables, move policies

pub mod core;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Error, GameRng, Outcome, Player, Result};

pub use crate::rules::GameState;

pub use crate::games::nim::{NimKey, NimMove, NimState};
pub use crate::games::tictactoe::{
    Cell, Coord, Mark, Symmetry, TicTacToeKey, TicTacToeMove, TicTacToeState,
};

pub use crate::search::{
    par_winning_moves, play_game, GameRecord, MemoTable, MovePolicy, OutcomeCache,
    PerfectPlay, RandomPlay, SearchStats, SharedMemoTable, Solver, SolverConfig,
};
