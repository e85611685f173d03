//! State-space enumeration.
//!
//! Walks every legal line of play from the initial state. Only practical
//! for small games, where it backs exhaustive checks of search results.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::core::Result;

use super::game::Game;

/// Collect every state reachable from `game.initial_state()`.
///
/// Includes the initial state and all terminal states. Transpositions
/// (the same position reached by different move orders) appear once.
pub fn reachable_states<G>(game: &G) -> Result<FxHashSet<G::State>>
where
    G: Game,
    G::State: Eq + Hash,
{
    let mut seen = FxHashSet::default();
    let mut frontier = vec![game.initial_state()];

    while let Some(state) = frontier.pop() {
        if seen.contains(&state) {
            continue;
        }

        for action in game.actions(&state) {
            let next = game.result(&state, &action)?;
            if !seen.contains(&next) {
                frontier.push(next);
            }
        }

        seen.insert(state);
    }

    log::debug!("enumerated {} reachable states", seen.len());
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::rules::game::tests::RaceGame;

    #[test]
    fn test_reachable_states_race() {
        let game = RaceGame { target: 3 };
        let states = reachable_states(&game).unwrap();

        // Totals 0..=3, each reachable with either player to move except
        // the start (only player 0) and total 1 (only player 1).
        assert!(states.contains(&(PlayerId::FIRST, 0)));
        assert!(!states.contains(&(PlayerId::SECOND, 0)));
        assert!(states.contains(&(PlayerId::SECOND, 1)));
        assert!(!states.contains(&(PlayerId::FIRST, 1)));
        assert!(states.contains(&(PlayerId::FIRST, 2)));
        assert!(states.contains(&(PlayerId::SECOND, 2)));
        assert!(states.contains(&(PlayerId::FIRST, 3)));
        assert!(states.contains(&(PlayerId::SECOND, 3)));
        assert_eq!(states.len(), 6);
    }
}
