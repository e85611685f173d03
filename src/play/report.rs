//! Human-readable match status.

use crate::rules::{Game, GameResult};

/// One-line status of `state`: who won, a draw, or who moves next.
pub fn status_line<G: Game>(game: &G, state: &G::State) -> String {
    match game.outcome(state) {
        Some(GameResult::Winner(player)) => format!("{player} won"),
        Some(GameResult::Draw) => "The game is a draw".to_string(),
        None => format!("It is {}'s turn to move", game.to_move(state)),
    }
}
