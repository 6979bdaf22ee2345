//! Memoized backward-induction solver.
//!
//! A position is a win for its mover iff some move leads to a position
//! that is a loss for *its* mover (the opponent). Draws sit between:
//! the mover takes a draw when no win is available and some move avoids
//! losing. Decided outcomes are cached under the position's canonical key.

use std::marker::PhantomData;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::{Error, Outcome, Result};
use crate::rules::GameState;

use super::config::SolverConfig;
use super::memo::{MemoTable, OutcomeCache};
use super::stats::SearchStats;

/// Exhaustive game solver.
///
/// Generic over the game and the cache. Owns its cache by default; pass a
/// `SharedMemoTable` handle to `with_cache` to share results between solvers.
///
/// ```
/// use game_solver::games::nim::NimState;
/// use game_solver::search::{Solver, SolverConfig};
/// use game_solver::core::Outcome;
///
/// let mut solver = Solver::new(SolverConfig::default());
/// assert_eq!(solver.evaluate(&NimState::new([3, 4, 5])).unwrap(), Outcome::Win);
/// assert_eq!(solver.evaluate(&NimState::new([1, 1])).unwrap(), Outcome::Loss);
/// ```
pub struct Solver<G: GameState, C = MemoTable<<G as GameState>::Key>> {
    /// Decided outcomes by canonical key.
    cache: C,

    /// Search configuration.
    config: SolverConfig,

    /// Statistics for the most recent query.
    stats: SearchStats,

    _game: PhantomData<fn() -> G>,
}

impl<G: GameState> Solver<G> {
    /// Create a solver with its own empty memo table.
    pub fn new(config: SolverConfig) -> Self {
        Self::with_cache(MemoTable::new(), config)
    }
}

impl<G: GameState> Default for Solver<G> {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl<G, C> Solver<G, C>
where
    G: GameState,
    C: OutcomeCache<G::Key>,
{
    /// Create a solver over an existing cache.
    pub fn with_cache(cache: C, config: SolverConfig) -> Self {
        Self {
            cache,
            config,
            stats: SearchStats::default(),
            _game: PhantomData,
        }
    }

    /// Decide the position for the player to move.
    pub fn evaluate(&mut self, state: &G) -> Result<Outcome> {
        let start = self.begin();
        let result = self.solve(state, 0);
        self.finish("evaluate", state, start, &result);
        result
    }

    /// Every legal move paired with its outcome for the player making it.
    ///
    /// Empty once the last mover has already won: the game is over.
    pub fn analyze(&mut self, state: &G) -> Result<Vec<(G::Move, Outcome)>> {
        let start = self.begin();
        let result = self.analyze_moves(state);
        self.finish("analyze", state, start, &result);
        result
    }

    /// Legal moves that force a win for the player making them.
    ///
    /// Empty when no move forces a win.
    pub fn winning_moves(&mut self, state: &G) -> Result<Vec<G::Move>> {
        Ok(self
            .analyze(state)?
            .into_iter()
            .filter(|(_, outcome)| outcome.is_win())
            .map(|(mv, _)| mv)
            .collect())
    }

    /// Legal moves that achieve the position's outcome.
    ///
    /// Winning moves in a won position, drawing moves in a drawn one, and
    /// every move in a lost one.
    pub fn best_moves(&mut self, state: &G) -> Result<Vec<G::Move>> {
        let analysis = self.analyze(state)?;
        let Some(best) = analysis.iter().map(|(_, outcome)| *outcome).max() else {
            return Ok(Vec::new());
        };
        Ok(analysis
            .into_iter()
            .filter(|(_, outcome)| *outcome == best)
            .map(|(mv, _)| mv)
            .collect())
    }

    /// All moves playable from `state`.
    pub fn legal_moves(&self, state: &G) -> Vec<G::Move> {
        state.legal_moves()
    }

    /// Play `mv` from `state`.
    pub fn apply(&self, state: &G, mv: &G::Move) -> Result<G> {
        state.apply(mv)
    }

    /// Get statistics for the most recent query.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Get the cache.
    #[must_use]
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Forget every cached outcome.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Give up the solver, keeping its cache.
    pub fn into_cache(self) -> C {
        self.cache
    }

    fn begin(&mut self) -> Instant {
        self.stats.reset();
        Instant::now()
    }

    fn finish<T>(&mut self, query: &str, state: &G, start: Instant, result: &Result<T>) {
        self.stats.time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        match result {
            Ok(_) => debug!(
                query,
                position = %state,
                evaluations = self.stats.evaluations,
                cache_hits = self.stats.cache_hits,
                cached = self.cache.len(),
                time_us = self.stats.time_us,
                "search finished"
            ),
            Err(err) => warn!(query, position = %state, error = %err, "search failed"),
        }
    }

    fn analyze_moves(&mut self, state: &G) -> Result<Vec<(G::Move, Outcome)>> {
        if state.is_terminal_win_for_last_mover() {
            return Ok(Vec::new());
        }
        state
            .legal_moves()
            .into_iter()
            .map(|mv| -> Result<(G::Move, Outcome)> {
                let next = state.apply(&mv)?;
                let outcome = self.move_value(&next, 1)?;
                Ok((mv, outcome))
            })
            .collect()
    }

    /// Value, for the player who just moved, of having moved into `next`.
    fn move_value(&mut self, next: &G, depth: u32) -> Result<Outcome> {
        if next.is_terminal_win_for_last_mover() {
            return Ok(Outcome::Win);
        }
        Ok(self.solve(next, depth)?.flip())
    }

    fn solve(&mut self, state: &G, depth: u32) -> Result<Outcome> {
        let key = state.canonicalize();
        if let Some(outcome) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            trace!(position = %state, %outcome, "cache hit");
            return Ok(outcome);
        }

        self.check_budget(depth)?;
        self.stats.evaluations += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let outcome = if state.is_terminal_win_for_last_mover() {
            Outcome::Loss
        } else {
            let moves = state.legal_moves();
            if moves.is_empty() {
                state.stalemate_outcome()
            } else {
                self.best_reply(state, &moves, depth)?
            }
        };

        self.cache.insert(key, outcome);
        Ok(outcome)
    }

    fn best_reply(&mut self, state: &G, moves: &[G::Move], depth: u32) -> Result<Outcome> {
        let mut best = Outcome::Loss;
        for mv in moves {
            let next = state.apply(mv)?;
            best = best.max(self.move_value(&next, depth + 1)?);
            if best.is_win() && !self.config.exhaustive {
                break;
            }
        }
        Ok(best)
    }

    fn check_budget(&self, depth: u32) -> Result<()> {
        if self.config.max_depth > 0 && depth > self.config.max_depth {
            return Err(Error::SearchAborted {
                reason: format!("depth limit {} exceeded", self.config.max_depth),
            });
        }
        if self.config.max_nodes > 0 && self.stats.evaluations >= self.config.max_nodes {
            return Err(Error::SearchAborted {
                reason: format!("node limit {} exceeded", self.config.max_nodes),
            });
        }
        Ok(())
    }
}
