//! Minimax with alpha-beta pruning.
//!
//! `max_value` and `min_value` recurse into each other one ply at a time.
//! `alpha` is the best value the maximizing player can already guarantee
//! on the path to the root, `beta` the best the minimizing player can.
//! Both are passed down by value, so a frame's updates are only seen by
//! its own descendants and never by siblings.
//!
//! Pruning only skips subtrees that cannot change the decision: the
//! chosen action and its value match exhaustive minimax exactly.

use crate::core::{Error, PlayerId, Result};
use crate::rules::{Game, Utility};

use super::stats::SearchStats;
use super::SearchOutcome;

/// Best action for the player to move at `state`.
///
/// Fails with `Error::PreconditionViolated` if `state` is terminal.
///
/// ```
/// use rust_adversarial::games::tictactoe::{Move, TicTacToe};
/// use rust_adversarial::search::alpha_beta;
///
/// let game = TicTacToe::new();
/// // x to move, two in the top row
/// let state = game.parse_state("xx./oo./...").unwrap();
///
/// assert_eq!(alpha_beta::best_action(&game, &state).unwrap(), Move::new(0, 2));
/// ```
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
    let (value, action) = max_value(
        game,
        state,
        Utility::NEG_INFINITY,
        Utility::INFINITY,
        player,
        0,
        stats,
    )?;

    let action = action.ok_or(Error::PreconditionViolated {
        operation: "best_action",
        reason: "non-terminal state without legal actions",
    })?;

    Ok(SearchOutcome { action, value })
}

/// Value of `state` for `player` when `player` is to move.
fn max_value<G: Game>(
    game: &G,
    state: &G::State,
    mut alpha: Utility,
    beta: Utility,
    player: PlayerId,
    depth: u16,
    stats: &mut SearchStats,
) -> Result<(Utility, Option<G::Action>)> {
    stats.visit(depth);
    if game.is_terminal(state) {
        stats.terminals += 1;
        return Ok((game.utility(state, player)?, None));
    }

    let mut v = Utility::NEG_INFINITY;
    let mut best = None;

    for action in game.actions(state) {
        let next = game.result(state, &action)?;
        let (v2, _) = min_value(game, &next, alpha, beta, player, depth + 1, stats)?;

        // Strict: ties keep the earlier action
        if v2 > v {
            v = v2;
            best = Some(action);
            alpha = alpha.max(v);
        }

        // Beta cutoff: the minimizing ancestor already has something better
        if v >= beta {
            stats.cutoffs += 1;
            return Ok((v, best));
        }
    }

    Ok((v, best))
}

/// Value of `state` for `player` when the opponent is to move.
fn min_value<G: Game>(
    game: &G,
    state: &G::State,
    alpha: Utility,
    mut beta: Utility,
    player: PlayerId,
    depth: u16,
    stats: &mut SearchStats,
) -> Result<(Utility, Option<G::Action>)> {
    stats.visit(depth);
    if game.is_terminal(state) {
        stats.terminals += 1;
        return Ok((game.utility(state, player)?, None));
    }

    let mut v = Utility::INFINITY;
    let mut best = None;

    for action in game.actions(state) {
        let next = game.result(state, &action)?;
        let (v2, _) = max_value(game, &next, alpha, beta, player, depth + 1, stats)?;

        if v2 < v {
            v = v2;
            best = Some(action);
            beta = beta.min(v);
        }

        // Alpha cutoff
        if v <= alpha {
            stats.cutoffs += 1;
            return Ok((v, best));
        }
    }

    Ok((v, best))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::game::tests::RaceGame;

    #[test]
    fn test_race_first_player_wins_from_start() {
        // Target 4: taking 1 leaves the opponent at 1, a losing total.
        let game = RaceGame { target: 4 };
        let mut stats = SearchStats::new();
        let outcome = search(&game, &game.initial_state(), &mut stats).unwrap();

        assert_eq!(outcome.action, 1);
        assert_eq!(outcome.value, 1.0);
        assert!(stats.nodes > 1);
    }

    #[test]
    fn test_race_lost_position_prefers_first_action() {
        // Target 3: every move loses, so the first action is kept.
        let game = RaceGame { target: 3 };
        let outcome = search(&game, &game.initial_state(), &mut SearchStats::new()).unwrap();

        assert_eq!(outcome.action, 1);
        assert_eq!(outcome.value, -1.0);
    }

    #[test]
    fn test_terminal_state_rejected() {
        let game = RaceGame { target: 2 };
        let err = best_action(&game, &(PlayerId::SECOND, 2)).unwrap_err();
        assert!(matches!(err, Error::PreconditionViolated { .. }));
    }

    #[test]
    fn test_single_move_to_win() {
        let game = RaceGame { target: 5 };
        assert_eq!(best_action(&game, &(PlayerId::SECOND, 4)).unwrap(), 1);
        assert_eq!(best_action(&game, &(PlayerId::SECOND, 3)).unwrap(), 2);
    }
}
