//! Game abstraction for two-player, zero-sum, perfect-information games.
//!
//! Games implement `Game` to define:
//! - The initial state and whose turn it is
//! - Legal actions and how they produce successor states
//! - Termination and per-player utilities
//!
//! The search engine calls into `Game` but never interprets
//! game-specific states or actions directly.

pub mod explore;
pub mod game;

pub use explore::reachable_states;
pub use game::{Game, GameResult, Utility};
