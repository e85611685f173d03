//! Agents: anything that picks an action for the player to move.

use crate::core::{Error, GameRng, Result};
use crate::rules::Game;
use crate::search::{SearchConfig, SearchStats, Searcher};

/// A player in a match.
///
/// Each agent owns whatever it needs to decide, including its own copy of
/// the game where it must enumerate actions.
pub trait Agent<G: Game> {
    /// Display name for logs and reports.
    fn name(&self) -> String;

    /// Pick an action for the player to move at `state`.
    ///
    /// `state` is never terminal when called from a match.
    fn choose(&mut self, state: &G::State) -> Result<G::Action>;

    /// Statistics of the most recent decision, for searching agents.
    fn stats(&self) -> Option<&SearchStats> {
        None
    }
}

/// Plays the action chosen by tree search.
pub struct SearchAgent<G: Game> {
    searcher: Searcher<G>,
}

impl<G: Game> SearchAgent<G> {
    pub fn new(game: G, config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(game, config),
        }
    }
}

impl<G: Game> Agent<G> for SearchAgent<G> {
    fn name(&self) -> String {
        self.searcher.config().algorithm.name().to_string()
    }

    fn choose(&mut self, state: &G::State) -> Result<G::Action> {
        self.searcher.best_action(state)
    }

    fn stats(&self) -> Option<&SearchStats> {
        Some(self.searcher.stats())
    }
}

/// Plays a uniformly random legal action.
pub struct RandomAgent<G: Game> {
    game: G,
    rng: GameRng,
}

impl<G: Game> RandomAgent<G> {
    pub fn new(game: G, seed: u64) -> Self {
        Self {
            game,
            rng: GameRng::new(seed),
        }
    }

    /// An independent agent for another match, seeded from this one.
    pub fn fork(&mut self) -> Self
    where
        G: Clone,
    {
        Self {
            game: self.game.clone(),
            rng: self.rng.fork(),
        }
    }
}

impl<G: Game> Agent<G> for RandomAgent<G> {
    fn name(&self) -> String {
        format!("random (seed {})", self.rng.seed())
    }

    fn choose(&mut self, state: &G::State) -> Result<G::Action> {
        let actions = self.game.actions(state);
        self.rng
            .choose(&actions)
            .cloned()
            .ok_or_else(Error::search_of_terminal)
    }
}

/// Always plays the first legal action.
pub struct FirstLegalAgent<G: Game> {
    game: G,
}

impl<G: Game> FirstLegalAgent<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }
}

impl<G: Game> Agent<G> for FirstLegalAgent<G> {
    fn name(&self) -> String {
        "first legal".to_string()
    }

    fn choose(&mut self, state: &G::State) -> Result<G::Action> {
        self.game
            .actions(state)
            .into_iter()
            .next()
            .ok_or_else(Error::search_of_terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::rules::game::tests::RaceGame;

    #[test]
    fn test_search_agent_reports_stats() {
        let mut agent = SearchAgent::new(RaceGame { target: 5 }, SearchConfig::default());
        assert_eq!(agent.choose(&(PlayerId::FIRST, 0)).unwrap(), 2);
        assert!(agent.stats().unwrap().nodes > 0);
        assert_eq!(agent.name(), "alpha-beta pruning");
    }

    #[test]
    fn test_random_agent_plays_legal_moves() {
        let game = RaceGame { target: 5 };
        let mut agent = RandomAgent::new(game.clone(), 42);

        for _ in 0..20 {
            let action = agent.choose(&(PlayerId::FIRST, 3)).unwrap();
            assert!(game.actions(&(PlayerId::FIRST, 3)).contains(&action));
        }
        assert!(agent.stats().is_none());
    }

    #[test]
    fn test_random_agent_deterministic() {
        let mut a = RandomAgent::new(RaceGame { target: 50 }, 7);
        let mut b = RandomAgent::new(RaceGame { target: 50 }, 7);

        for total in 0..40 {
            let state = (PlayerId::FIRST, total);
            assert_eq!(a.choose(&state).unwrap(), b.choose(&state).unwrap());
        }
    }

    #[test]
    fn test_first_legal_agent() {
        let mut agent = FirstLegalAgent::new(RaceGame { target: 5 });
        assert_eq!(agent.choose(&(PlayerId::SECOND, 0)).unwrap(), 1);
        assert!(agent.choose(&(PlayerId::SECOND, 5)).is_err());
    }
}
