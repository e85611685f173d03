//! The `Game` trait every searchable game implements.

use std::fmt::Debug;

use crate::core::{PlayerId, Result};

/// Scalar outcome of a terminal state from one player's perspective.
pub type Utility = f64;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Capability contract for deterministic two-player games.
///
/// States are immutable values: `result` returns a fresh successor and
/// never edits its input, so sibling branches of a search always observe
/// the same parent.
///
/// ## Implementation Notes
///
/// - `actions`: Order matters. Search breaks ties in favour of the first
///   action with the best value.
/// - `actions`: Return empty only for terminal states
/// - `result`: Reject actions not in `actions(state)`
/// - `utility`: Only defined for terminal states. Zero-sum is the
///   implementor's obligation, not checked here.
pub trait Game {
    /// A complete position including the player to move.
    type State: Clone + Debug;

    /// One legal move from a given state.
    type Action: Clone + PartialEq + Debug;

    /// The unique starting state.
    fn initial_state(&self) -> Self::State;

    /// Player whose turn it is at `state`.
    fn to_move(&self, state: &Self::State) -> PlayerId;

    /// All legal actions at `state`, in a stable order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Successor of `state` after `action`.
    ///
    /// Fails with `Error::InvalidAction` if `action` is not legal at `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    /// True iff the game is over at `state`.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Outcome of a terminal `state` for `player`.
    ///
    /// Fails with `Error::PreconditionViolated` if `state` is not terminal.
    fn utility(&self, state: &Self::State, player: PlayerId) -> Result<Utility>;

    // === Convenience Methods ===

    /// Summarize a terminal state as a `GameResult`.
    ///
    /// Returns `Ok(None)` if the game continues. The winner is the player
    /// with the strictly larger utility. Errors from `utility` propagate.
    fn try_outcome(&self, state: &Self::State) -> Result<Option<GameResult>> {
        if !self.is_terminal(state) {
            return Ok(None);
        }

        let first = self.utility(state, PlayerId::FIRST)?;
        let second = self.utility(state, PlayerId::SECOND)?;

        Ok(Some(if first > second {
            GameResult::Winner(PlayerId::FIRST)
        } else if second > first {
            GameResult::Winner(PlayerId::SECOND)
        } else {
            GameResult::Draw
        }))
    }

    /// Like `try_outcome`, but `None` both while the game continues and
    /// when `utility` fails on a terminal state.
    fn outcome(&self, state: &Self::State) -> Option<GameResult> {
        self.try_outcome(state).ok().flatten()
    }
}
