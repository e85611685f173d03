//! # rust-adversarial
//!
//! Adversarial tree search for deterministic, perfect-information,
//! two-player, zero-sum games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Search only talks to the `Game` trait. Any finite
//!    two-player game plugs in by implementing its six operations.
//!
//! 2. **Immutable States**: `Game::result` returns a fresh state. Sibling
//!    branches of a search never observe each other's moves.
//!
//! 3. **Pruning Is Exact**: Alpha-beta returns the same action and value as
//!    exhaustive minimax for every state.
//!
//! ## Modules
//!
//! - `core`: Player IDs, deterministic RNG, errors
//! - `rules`: The `Game` trait and state-space enumeration
//! - `search`: Alpha-beta and minimax, plus config and statistics
//! - `games`: Reference games (tic-tac-toe)
//! - `play`: Agents and the match loop

pub mod core;
pub mod error;
pub mod games;
pub mod play;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Error, GameRng, PlayerId, Result};

pub use crate::rules::{reachable_states, Game, GameResult, Utility};

pub use crate::search::{
    best_action, Algorithm, SearchConfig, SearchOutcome, SearchStats, Searcher,
};

pub use crate::games::tictactoe::{Board, Move, TicTacToe, TicTacToeState};

pub use crate::play::{
    ActionRecord, Agent, Arena, FirstLegalAgent, MatchConfig, MatchRecord, RandomAgent,
    SearchAgent,
};
