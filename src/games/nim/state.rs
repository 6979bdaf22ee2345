//! Nim positions, moves, and cache keys.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Error, Player, Result};
use crate::rules::GameState;

/// Remove `take` tokens from pile `pile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimMove {
    /// Index of the pile to take from.
    pub pile: usize,
    /// Number of tokens removed, at least 1.
    pub take: u32,
}

impl NimMove {
    #[must_use]
    pub const fn new(pile: usize, take: u32) -> Self {
        Self { pile, take }
    }
}

impl std::fmt::Display for NimMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from pile {}", self.take, self.pile)
    }
}

/// Cache key: pile sizes as a sorted multiset plus the player to move.
///
/// Which pile holds which count does not affect the outcome.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimKey {
    pub piles: SmallVec<[u32; 8]>,
    pub to_move: Player,
}

/// A Nim position under the normal play convention.
///
/// Piles live in a persistent vector, so each successor shares all
/// untouched piles with its parent.
///
/// ```
/// use game_solver::games::nim::{NimMove, NimState};
/// use game_solver::rules::GameState;
///
/// let state = NimState::new([3, 4, 5]);
/// let next = state.apply(&NimMove::new(0, 3)).unwrap();
///
/// assert_eq!(next.to_string(), "[0, 4, 5]");
/// assert_eq!(state.to_string(), "[3, 4, 5]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimState {
    piles: Vector<u32>,
    to_move: Player,
}

impl NimState {
    /// Create a position with the first player to move.
    pub fn new(piles: impl IntoIterator<Item = u32>) -> Self {
        Self {
            piles: piles.into_iter().collect(),
            to_move: Player::First,
        }
    }

    /// Set the player to move.
    #[must_use]
    pub fn with_to_move(mut self, player: Player) -> Self {
        self.to_move = player;
        self
    }

    /// Current pile sizes, in pile order.
    #[must_use]
    pub fn piles(&self) -> &Vector<u32> {
        &self.piles
    }

    /// Tokens left across all piles.
    #[must_use]
    pub fn total_tokens(&self) -> u64 {
        self.piles.iter().map(|&p| u64::from(p)).sum()
    }

    /// Bitwise XOR of the pile sizes.
    ///
    /// Zero exactly when the player to move loses with perfect play.
    #[must_use]
    pub fn nim_sum(&self) -> u32 {
        self.piles.iter().fold(0, |acc, &p| acc ^ p)
    }
}

impl GameState for NimState {
    type Move = NimMove;
    type Key = NimKey;

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn legal_moves(&self) -> Vec<NimMove> {
        self.piles
            .iter()
            .enumerate()
            .flat_map(|(pile, &size)| (1..=size).map(move |take| NimMove::new(pile, take)))
            .collect()
    }

    fn apply(&self, mv: &NimMove) -> Result<Self> {
        let size = match self.piles.get(mv.pile) {
            Some(&size) if mv.take >= 1 && mv.take <= size => size,
            _ => return Err(Error::invalid_move(mv, self)),
        };

        Ok(Self {
            piles: self.piles.update(mv.pile, size - mv.take),
            to_move: self.to_move.other(),
        })
    }

    fn is_terminal_win_for_last_mover(&self) -> bool {
        self.piles.iter().all(|&p| p == 0)
    }

    fn canonicalize(&self) -> NimKey {
        let mut piles: SmallVec<[u32; 8]> = self.piles.iter().copied().collect();
        piles.sort_unstable();
        NimKey {
            piles,
            to_move: self.to_move,
        }
    }

    fn is_legal(&self, mv: &NimMove) -> bool {
        matches!(self.piles.get(mv.pile), Some(&size) if mv.take >= 1 && mv.take <= size)
    }
}

impl std::fmt::Display for NimState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, pile) in self.piles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pile}")?;
        }
        write!(f, "]")
    }
}
