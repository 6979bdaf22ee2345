//! Player identification for two-player games.
//!
//! ## Player
//!
//! Exactly two identities exist: the first mover and the second mover.
//! Every legal move hands the turn to the other one.

use serde::{Deserialize, Serialize};

/// One of the two sides of a two-player game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The player who moves first from the initial position.
    #[default]
    First,
    /// The player who replies to the first mover.
    Second,
}

impl Player {
    /// The opponent of this player.
    ///
    /// ```
    /// use game_solver::core::Player;
    ///
    /// assert_eq!(Player::First.other(), Player::Second);
    /// assert_eq!(Player::Second.other(), Player::First);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "first player"),
            Player::Second => write!(f, "second player"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        for player in [Player::First, Player::Second] {
            assert_ne!(player.other(), player);
            assert_eq!(player.other().other(), player);
        }
    }

    #[test]
    fn test_first_player_is_default() {
        assert_eq!(Player::default(), Player::First);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::First), "first player");
        assert_eq!(format!("{}", Player::Second), "second player");
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::Second).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::Second);
    }
}
