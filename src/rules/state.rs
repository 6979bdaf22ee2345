//! The position contract every solvable game implements.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::core::{Outcome, Player, Result};

/// A position in a two-player, zero-sum, perfect-information game.
///
/// Implementors are immutable values: `apply` returns a new position and
/// leaves `self` untouched.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty exactly when the position has no continuation
/// - `apply`: Must flip `to_move` and reject moves not legal here
/// - `is_terminal_win_for_last_mover`: Judge for `to_move().other()`
/// - `canonicalize`: Equal keys must have equal outcomes
pub trait GameState: Clone + Debug + Display {
    /// A move playable from some position.
    type Move: Clone + Eq + Debug + Display;

    /// Memoization key for outcome-equivalent positions.
    type Key: Clone + Eq + Hash + Debug;

    /// The player whose turn it is.
    fn to_move(&self) -> Player;

    /// All moves playable by `to_move()` from this position.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play `mv`, producing the successor position.
    ///
    /// Fails with `Error::InvalidMove` if `mv` is not legal here.
    fn apply(&self, mv: &Self::Move) -> Result<Self>;

    /// Whether the player who just moved into this position has won.
    fn is_terminal_win_for_last_mover(&self) -> bool;

    /// Collapse this position to its cache key.
    fn canonicalize(&self) -> Self::Key;

    /// Value for the mover of a position with no legal moves and no winner.
    ///
    /// Defaults to the normal-play convention: being stuck loses.
    fn stalemate_outcome(&self) -> Outcome {
        Outcome::Loss
    }

    /// Check whether `mv` is playable here.
    fn is_legal(&self, mv: &Self::Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// The player who produced this position.
    fn last_mover(&self) -> Player {
        self.to_move().other()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    /// Count-down race: each move subtracts 1 or 2, reaching zero wins.
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Countdown {
        remaining: u8,
        to_move: Player,
    }

    impl Display for Countdown {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.remaining)
        }
    }

    impl GameState for Countdown {
        type Move = u8;
        type Key = (u8, Player);

        fn to_move(&self) -> Player {
            self.to_move
        }

        fn legal_moves(&self) -> Vec<u8> {
            (1..=2).filter(|&step| step <= self.remaining).collect()
        }

        fn apply(&self, mv: &u8) -> Result<Self> {
            if !self.is_legal(mv) {
                return Err(Error::invalid_move(mv, self));
            }
            Ok(Self {
                remaining: self.remaining - mv,
                to_move: self.to_move.other(),
            })
        }

        fn is_terminal_win_for_last_mover(&self) -> bool {
            self.remaining == 0
        }

        fn canonicalize(&self) -> Self::Key {
            (self.remaining, self.to_move)
        }
    }

    #[test]
    fn test_default_methods() {
        let state = Countdown {
            remaining: 3,
            to_move: Player::First,
        };

        assert!(state.is_legal(&1));
        assert!(state.is_legal(&2));
        assert!(!state.is_legal(&3));
        assert_eq!(state.last_mover(), Player::Second);
        assert_eq!(state.stalemate_outcome(), Outcome::Loss);
    }

    #[test]
    fn test_apply_flips_player_and_keeps_parent() {
        let state = Countdown {
            remaining: 3,
            to_move: Player::First,
        };
        let next = state.apply(&2).unwrap();

        assert_eq!(next.remaining, 1);
        assert_eq!(next.to_move(), Player::Second);
        assert_eq!(state.remaining, 3);
        assert!(matches!(state.apply(&5), Err(Error::InvalidMove { .. })));
    }
}
