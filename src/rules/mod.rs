//! The game contract.
//!
//! Games implement `GameState` to define:
//! - Legal moves for each position
//! - How moves produce successor positions
//! - Win conditions and canonical cache keys
//!
//! The solver calls into `GameState` but never interprets
//! game-specific concepts directly.

pub mod state;

pub use state::GameState;
