//! Exhaustive minimax.
//!
//! Evaluates every subtree. Serves as the correctness and timing baseline
//! for alpha-beta, with the same tie-break: the first action in
//! `actions()` order among those with the best value.

use crate::core::{Error, PlayerId, Result};
use crate::rules::{Game, Utility};

use super::stats::SearchStats;
use super::SearchOutcome;

/// Best action for the player to move at `state`, without pruning.
///
/// Fails with `Error::PreconditionViolated` if `state` is terminal.
pub fn best_action<G: Game>(game: &G, state: &G::State) -> Result<G::Action> {
    search(game, state, &mut SearchStats::new()).map(|outcome| outcome.action)
}

/// Run the search, recording counters into `stats`.
pub fn search<G: Game>(
    game: &G,
    state: &G::State,
    stats: &mut SearchStats,
) -> Result<SearchOutcome<G::Action>> {
    if game.is_terminal(state) {
        return Err(Error::search_of_terminal());
    }

    let player = game.to_move(state);
    let (value, action) = minimax_value(game, state, player, 0, stats)?;

    let action = action.ok_or(Error::PreconditionViolated {
        operation: "best_action",
        reason: "non-terminal state without legal actions",
    })?;

    Ok(SearchOutcome { action, value })
}

/// Minimax value of `state` for `player`, with the action achieving it.
///
/// Maximizes where `player` is to move, minimizes elsewhere.
fn minimax_value<G: Game>(
    game: &G,
    state: &G::State,
    player: PlayerId,
    depth: u16,
    stats: &mut SearchStats,
) -> Result<(Utility, Option<G::Action>)> {
    stats.visit(depth);
    if game.is_terminal(state) {
        stats.terminals += 1;
        return Ok((game.utility(state, player)?, None));
    }

    let maximizing = game.to_move(state) == player;
    let mut v = if maximizing {
        Utility::NEG_INFINITY
    } else {
        Utility::INFINITY
    };
    let mut best = None;

    for action in game.actions(state) {
        let next = game.result(state, &action)?;
        let (v2, _) = minimax_value(game, &next, player, depth + 1, stats)?;

        let better = if maximizing { v2 > v } else { v2 < v };
        if better {
            v = v2;
            best = Some(action);
        }
    }

    Ok((v, best))
}
