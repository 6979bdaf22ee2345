//! Game-theoretic value of a position.

use serde::{Deserialize, Serialize};

/// Value of a position for the player to move, under perfect play by both sides.
///
/// Variants are ordered by the mover's preference: `Loss < Draw < Win`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player to move loses against correct opposition.
    Loss,
    /// Neither side can force a win.
    Draw,
    /// The player to move can force a win.
    Win,
}

impl Outcome {
    /// Convert an outcome seen by one player into the opponent's view.
    ///
    /// A successor position is evaluated for *its* mover, which is the
    /// opponent of whoever played into it.
    ///
    /// ```
    /// use game_solver::core::Outcome;
    ///
    /// assert_eq!(Outcome::Loss.flip(), Outcome::Win);
    /// assert_eq!(Outcome::Draw.flip(), Outcome::Draw);
    /// ```
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Draw => Outcome::Draw,
            Outcome::Loss => Outcome::Win,
        }
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }

    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Outcome::Loss)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Loss => write!(f, "loss"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        assert_eq!(Outcome::Win.flip(), Outcome::Loss);
        assert_eq!(Outcome::Loss.flip(), Outcome::Win);
        assert_eq!(Outcome::Draw.flip(), Outcome::Draw);
    }

    #[test]
    fn test_preference_order() {
        assert!(Outcome::Loss < Outcome::Draw);
        assert!(Outcome::Draw < Outcome::Win);
        assert_eq!(
            [Outcome::Draw, Outcome::Loss, Outcome::Win].iter().max(),
            Some(&Outcome::Win)
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&Outcome::Draw).unwrap();
        let deserialized: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Outcome::Draw);
    }
}
