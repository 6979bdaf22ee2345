//! Core types: players, outcomes, errors, RNG.
//!
//! These are game-agnostic. Games build on them through the
//! `GameState` trait rather than by extending this module.

pub mod error;
pub mod outcome;
pub mod player;
pub mod rng;

pub use error::{Error, Result};
pub use outcome::Outcome;
pub use player::Player;
pub use rng::GameRng;
