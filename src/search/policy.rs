//! Move policies for drivers that need a move, not an analysis.
//!
//! - `PerfectPlay`: a uniformly chosen move among the solver's best moves
//! - `RandomPlay`: a uniformly chosen legal move
//!
//! `play_game` pits two policies against each other.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player, Result};
use crate::rules::GameState;

use super::config::SolverConfig;
use super::memo::{MemoTable, OutcomeCache};
use super::solver::Solver;

/// Strategy for picking a move from a position.
pub trait MovePolicy<G: GameState> {
    /// Pick a move, or `None` when no legal move exists.
    fn choose(&mut self, state: &G, rng: &mut GameRng) -> Result<Option<G::Move>>;
}

/// Always plays a move that achieves the position's game-theoretic value.
///
/// Ties are broken with the caller's RNG.
pub struct PerfectPlay<G: GameState, C = MemoTable<<G as GameState>::Key>> {
    solver: Solver<G, C>,
}

impl<G: GameState> PerfectPlay<G> {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            solver: Solver::new(config),
        }
    }
}

impl<G: GameState, C: OutcomeCache<G::Key>> PerfectPlay<G, C> {
    /// Wrap an existing solver (and its warm cache).
    pub fn with_solver(solver: Solver<G, C>) -> Self {
        Self { solver }
    }

    #[must_use]
    pub fn solver(&self) -> &Solver<G, C> {
        &self.solver
    }
}

impl<G: GameState, C: OutcomeCache<G::Key>> MovePolicy<G> for PerfectPlay<G, C> {
    fn choose(&mut self, state: &G, rng: &mut GameRng) -> Result<Option<G::Move>> {
        let best = self.solver.best_moves(state)?;
        Ok(rng.choose(&best).cloned())
    }
}

/// Plays any legal move with equal probability.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlay;

impl<G: GameState> MovePolicy<G> for RandomPlay {
    fn choose(&mut self, state: &G, rng: &mut GameRng) -> Result<Option<G::Move>> {
        Ok(rng.choose(&state.legal_moves()).cloned())
    }
}

/// A finished game between two policies.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRecord<G, M> {
    /// Moves in the order they were played.
    pub moves: Vec<M>,
    /// Position after the last move.
    pub final_state: G,
    /// The player who completed a win, or `None` for a stalemate.
    pub winner: Option<Player>,
}

/// Play from `start` until someone wins or no move remains.
///
/// `first` moves for `Player::First`, `second` for `Player::Second`. Each
/// side draws from its own fork of `rng`, so one policy's draws never shift
/// the other's.
pub fn play_game<G, A, B>(
    start: &G,
    first: &mut A,
    second: &mut B,
    rng: &mut GameRng,
) -> Result<GameRecord<G, G::Move>>
where
    G: GameState,
    A: MovePolicy<G> + ?Sized,
    B: MovePolicy<G> + ?Sized,
{
    let mut state = start.clone();
    let mut moves = Vec::new();
    let mut first_rng = rng.fork();
    let mut second_rng = rng.fork();

    loop {
        if state.is_terminal_win_for_last_mover() {
            return Ok(GameRecord {
                moves,
                winner: Some(state.last_mover()),
                final_state: state,
            });
        }

        let choice = match state.to_move() {
            Player::First => first.choose(&state, &mut first_rng)?,
            Player::Second => second.choose(&state, &mut second_rng)?,
        };
        let Some(mv) = choice else {
            return Ok(GameRecord {
                moves,
                final_state: state,
                winner: None,
            });
        };

        state = state.apply(&mv)?;
        moves.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::nim::NimState;
    use crate::games::tictactoe::TicTacToeState;

    #[test]
    fn test_perfect_play_wins_won_nim() {
        let start = NimState::new([3, 4, 5]);
        let mut rng = GameRng::new(7);

        for _ in 0..5 {
            let mut perfect: PerfectPlay<NimState> = PerfectPlay::new(SolverConfig::default());
            let record = play_game(&start, &mut perfect, &mut RandomPlay, &mut rng).unwrap();
            assert_eq!(record.winner, Some(Player::First));
            assert_eq!(record.final_state.total_tokens(), 0);
        }
    }

    #[test]
    fn test_same_seed_replays_same_game() {
        let start = TicTacToeState::new();

        let play = |seed| {
            let mut rng = GameRng::new(seed);
            let mut perfect: PerfectPlay<TicTacToeState> = PerfectPlay::new(SolverConfig::default());
            play_game(&start, &mut RandomPlay, &mut perfect, &mut rng).unwrap()
        };

        let a = play(17);
        let b = play(17);
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.winner, b.winner);
        assert_ne!(a.winner, Some(Player::First));
    }

    #[test]
    fn test_random_play_returns_none_when_stuck() {
        let mut rng = GameRng::new(1);
        let stuck = NimState::new([0]);
        assert_eq!(MovePolicy::<NimState>::choose(&mut RandomPlay, &stuck, &mut rng).unwrap(), None);
    }

    #[test]
    fn test_perfect_tictactoe_self_play_draws() {
        let start = TicTacToeState::new();
        let mut rng = GameRng::new(3);
        let mut x: PerfectPlay<TicTacToeState> = PerfectPlay::new(SolverConfig::default());
        let mut o: PerfectPlay<TicTacToeState> = PerfectPlay::new(SolverConfig::default());

        let record = play_game(&start, &mut x, &mut o, &mut rng).unwrap();
        assert_eq!(record.winner, None);
        assert_eq!(record.moves.len(), 9);
        assert!(record.final_state.is_full());
    }
}
