//! Nim under the normal play convention.
//!
//! - A position is a row of token piles
//! - A move removes one or more tokens from a single pile
//! - The player who takes the last token wins
//!
//! Any number of piles is supported.

mod state;

pub use state::{NimKey, NimMove, NimState};
