//! Search context that owns a game, its configuration and statistics.

use std::time::Instant;

use crate::core::Result;
use crate::rules::Game;

use super::config::{Algorithm, SearchConfig};
use super::stats::SearchStats;
use super::{alpha_beta, minimax, SearchOutcome};

/// Main search context.
///
/// Generic over the game type. Owns the game and configuration, and keeps
/// the statistics of the most recent search.
pub struct Searcher<G: Game> {
    /// The game being searched.
    game: G,

    /// Search configuration.
    config: SearchConfig,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl<G: Game> Searcher<G> {
    /// Create a new search context.
    pub fn new(game: G, config: SearchConfig) -> Self {
        Self {
            game,
            config,
            stats: SearchStats::default(),
        }
    }

    /// Evaluate `state` for the player to move.
    ///
    /// Returns the chosen action and its minimax value. Fails if `state`
    /// is terminal.
    pub fn evaluate(&mut self, state: &G::State) -> Result<SearchOutcome<G::Action>> {
        let start = Instant::now();
        self.stats.reset();

        let outcome = match self.config.algorithm {
            Algorithm::AlphaBeta => alpha_beta::search(&self.game, state, &mut self.stats),
            Algorithm::Minimax => minimax::search(&self.game, state, &mut self.stats),
        }?;

        self.stats.time_us = start.elapsed().as_micros() as u64;

        log::debug!(
            "{:<20} {:?} value {} ({} nodes, {} cutoffs, {}us)",
            self.config.algorithm.name(),
            outcome.action,
            outcome.value,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.time_us,
        );

        Ok(outcome)
    }

    /// Best action for the player to move at `state`.
    pub fn best_action(&mut self, state: &G::State) -> Result<G::Action> {
        self.evaluate(state).map(|outcome| outcome.action)
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the game reference.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
