//! Error types for rust-adversarial.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// `result` was given an action outside `actions(state)`.
    #[error("invalid action {action} at state {state}")]
    InvalidAction { action: String, state: String },

    /// An operation was called on a state it is not defined for.
    #[error("{operation} called on a {reason}")]
    PreconditionViolated {
        operation: &'static str,
        reason: &'static str,
    },

    /// A player id outside `{0, 1}`.
    #[error("invalid player id {id}: must be 0 or 1")]
    InvalidPlayer { id: u8 },

    /// A board could not be parsed or is not reachable by legal play.
    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },
}

impl Error {
    /// Build an `InvalidAction` from any debuggable action and state.
    pub fn invalid_action(action: &impl std::fmt::Debug, state: &impl std::fmt::Debug) -> Self {
        Error::InvalidAction {
            action: format!("{action:?}"),
            state: format!("{state:?}"),
        }
    }

    /// `utility` requires a terminal state.
    pub fn utility_of_non_terminal() -> Self {
        Error::PreconditionViolated {
            operation: "utility",
            reason: "non-terminal state",
        }
    }

    /// Searching requires a non-terminal state.
    pub fn search_of_terminal() -> Self {
        Error::PreconditionViolated {
            operation: "best_action",
            reason: "terminal state",
        }
    }
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
