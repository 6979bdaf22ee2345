//! Error types for the solver and the bundled games.

use thiserror::Error;

/// Errors raised by game states and the solver.
///
/// `InvalidMove` means a caller offered a move that did not come from the
/// state's own `legal_moves()`; treat it as a bug in the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: {mv} is not legal in position {position}")]
    InvalidMove { mv: String, position: String },

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("invalid piece counts: X={x}, O={o} for the given player to move")]
    InvalidPieceCounts { x: usize, o: usize },

    #[error("search aborted: {reason}")]
    SearchAborted { reason: String },

    #[error("unsupported game variant: {name}")]
    UnsupportedGameVariant { name: String },
}

impl Error {
    /// Build an `InvalidMove` from anything displayable.
    pub fn invalid_move(mv: &impl std::fmt::Display, position: &impl std::fmt::Display) -> Self {
        Error::InvalidMove {
            mv: mv.to_string(),
            position: position.to_string(),
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let err = Error::invalid_move(&"take 4 from pile 0", &"[3]");
        assert_eq!(
            err.to_string(),
            "invalid move: take 4 from pile 0 is not legal in position [3]"
        );
    }

    #[test]
    fn test_search_aborted_message() {
        let err = Error::SearchAborted {
            reason: "depth limit 3 exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "search aborted: depth limit 3 exceeded");
    }
}
