//! The match driver: alternate turns until the game ends.

use std::time::Instant;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Error, PlayerId, Result};
use crate::rules::Game;
use crate::search::SearchStats;

use super::agent::Agent;
use super::record::{ActionRecord, MatchRecord};

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Abort a match that runs longer than this many plies.
    /// Finite games never hit it unless `actions` or `result` is buggy.
    pub max_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 1_000 }
    }
}

impl MatchConfig {
    /// Create a new config with a custom ply limit.
    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = max_plies;
        self
    }
}

/// Runs matches of one game between two agents.
pub struct Arena<G: Game> {
    game: G,
    config: MatchConfig,
}

impl<G: Game> Arena<G> {
    pub fn new(game: G, config: MatchConfig) -> Self {
        Self { game, config }
    }

    /// Get the game reference.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Play a match from the initial state. `first` moves first.
    pub fn play<A, B>(&self, first: &mut A, second: &mut B) -> Result<MatchRecord<G::Action>>
    where
        A: Agent<G> + ?Sized,
        B: Agent<G> + ?Sized,
    {
        self.play_from(self.game.initial_state(), first, second, |_, _| {})
    }

    /// Play a match from `start`, calling `observe` after every ply with
    /// the move just made and the resulting state.
    ///
    /// `first` plays for player 0 and `second` for player 1, whoever is
    /// to move at `start`.
    pub fn play_from<A, B>(
        &self,
        start: G::State,
        first: &mut A,
        second: &mut B,
        mut observe: impl FnMut(&ActionRecord<G::Action>, &G::State),
    ) -> Result<MatchRecord<G::Action>>
    where
        A: Agent<G> + ?Sized,
        B: Agent<G> + ?Sized,
    {
        let begin = Instant::now();
        let mut moves = Vector::new();
        let mut search_stats: [SearchStats; 2] = Default::default();
        let mut state = start;
        let mut ply = 0u32;

        log::info!("{:<32}{} vs {}", "starting match", first.name(), second.name());

        while !self.game.is_terminal(&state) {
            if ply >= self.config.max_plies {
                return Err(Error::PreconditionViolated {
                    operation: "play",
                    reason: "match exceeding the ply limit",
                });
            }

            let player = self.game.to_move(&state);
            let stats = &mut search_stats[player.index()];
            let action = if player == PlayerId::FIRST {
                decide::<G, A>(first, &state, stats)?
            } else {
                decide::<G, B>(second, &state, stats)?
            };

            state = self.game.result(&state, &action)?;

            let record = ActionRecord::new(player, action, ply);
            log::trace!("ply {:<4}{} plays {:?}", record.ply, record.player, record.action);
            observe(&record, &state);
            moves.push_back(record);
            ply += 1;
        }

        let result = self
            .game
            .try_outcome(&state)?
            .ok_or_else(Error::utility_of_non_terminal)?;
        let elapsed_us = begin.elapsed().as_micros() as u64;

        log::info!("{:<32}{:?} after {} plies", "finished match", result, ply);

        Ok(MatchRecord {
            moves,
            result,
            elapsed_us,
            search_stats,
        })
    }
}

/// Ask `agent` for a move and fold its search counters into `stats`.
fn decide<G, A>(agent: &mut A, state: &G::State, stats: &mut SearchStats) -> Result<G::Action>
where
    G: Game,
    A: Agent<G> + ?Sized,
{
    let action = agent.choose(state)?;
    if let Some(last) = agent.stats() {
        stats.accumulate(last);
    }
    Ok(action)
}
