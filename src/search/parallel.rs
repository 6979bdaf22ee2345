//! Sibling-parallel winning-move search over a shared memo table.

use std::hash::Hash;

use rayon::prelude::*;

use crate::core::Result;
use crate::rules::GameState;

use super::config::SolverConfig;
use super::memo::SharedMemoTable;
use super::solver::Solver;

/// `Solver::winning_moves`, with each legal move evaluated on the rayon pool.
///
/// Every worker runs its own solver over a handle to `cache`, so positions
/// decided by one branch are visible to the others. Result order follows
/// `legal_moves()`. Empty once the last mover has already won.
pub fn par_winning_moves<G>(
    state: &G,
    cache: &SharedMemoTable<G::Key>,
    config: &SolverConfig,
) -> Result<Vec<G::Move>>
where
    G: GameState + Sync,
    G::Move: Send + Sync,
    G::Key: Eq + Hash + Send + Sync,
{
    if state.is_terminal_win_for_last_mover() {
        return Ok(Vec::new());
    }
    let moves = state.legal_moves();

    let verdicts: Vec<Result<bool>> = moves
        .par_iter()
        .map(|mv| -> Result<bool> {
            let next = state.apply(mv)?;
            if next.is_terminal_win_for_last_mover() {
                return Ok(true);
            }
            let mut solver = Solver::with_cache(cache.clone_ref(), config.clone());
            Ok(solver.evaluate(&next)?.is_loss())
        })
        .collect();

    moves
        .into_iter()
        .zip(verdicts)
        .filter_map(|(mv, verdict)| match verdict {
            Ok(true) => Some(Ok(mv)),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::nim::NimState;
    use crate::games::tictactoe::TicTacToeState;
    use crate::core::Player;
    use crate::search::OutcomeCache;

    #[test]
    fn test_matches_sequential_nim() {
        let state = NimState::new([3, 4, 5]);
        let cache = SharedMemoTable::new();

        let parallel = par_winning_moves(&state, &cache, &SolverConfig::default()).unwrap();
        let mut solver: Solver<NimState> = Solver::default();
        let sequential = solver.winning_moves(&state).unwrap();

        assert_eq!(parallel, sequential);
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_matches_sequential_tictactoe() {
        let state = TicTacToeState::from_rows(["X..", ".O.", "..."], Player::First).unwrap();
        let cache = SharedMemoTable::new();

        let parallel = par_winning_moves(&state, &cache, &SolverConfig::default()).unwrap();
        let mut solver: Solver<TicTacToeState> = Solver::default();

        assert_eq!(parallel, solver.winning_moves(&state).unwrap());
    }
}
