//! Exhaustive game-tree search.
//!
//! ## Overview
//!
//! Memoized backward induction over a win/draw/loss outcome domain:
//!
//! - **Generic**: Works with any `GameState` implementation
//! - **Memoized**: Outcomes cached by canonical position, so transpositions
//!   and equivalent positions are solved once
//! - **Bounded**: Optional depth and node budgets abort with `SearchAborted`
//! - **Shareable**: A concurrent table lets several solvers pool results
//!
//! ## Usage
//!
//! ```rust
//! use game_solver::core::Outcome;
//! use game_solver::games::tictactoe::TicTacToeState;
//! use game_solver::search::{Solver, SolverConfig};
//!
//! let mut solver = Solver::new(SolverConfig::default());
//! let start = TicTacToeState::new();
//!
//! assert_eq!(solver.evaluate(&start).unwrap(), Outcome::Draw);
//! assert!(solver.winning_moves(&start).unwrap().is_empty());
//! ```

pub mod config;
pub mod memo;
pub mod parallel;
pub mod policy;
pub mod solver;
pub mod stats;

// Re-export main types
pub use config::SolverConfig;
pub use memo::{MemoTable, OutcomeCache, SharedMemoTable};
pub use parallel::par_winning_moves;
pub use policy::{play_game, GameRecord, MovePolicy, PerfectPlay, RandomPlay};
pub use solver::Solver;
pub use stats::SearchStats;
