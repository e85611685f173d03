//! Adversarial tree search.
//!
//! ## Overview
//!
//! Depth-first evaluators that pick the action maximizing the mover's
//! worst-case utility under optimal opposing play:
//!
//! - **Alpha-beta**: minimax with branch-and-bound pruning
//! - **Minimax**: exhaustive baseline, never prunes
//!
//! Both return the same action and value for every state; pruning is purely
//! a speed-up. Ties go to the first action in the game's `actions()` order.
//!
//! ## Usage
//!
//! ```rust
//! use rust_adversarial::games::tictactoe::TicTacToe;
//! use rust_adversarial::rules::Game;
//! use rust_adversarial::search::{SearchConfig, Searcher};
//!
//! let mut searcher = Searcher::new(TicTacToe::new(), SearchConfig::default());
//! let mut state = searcher.game().initial_state();
//!
//! while !searcher.game().is_terminal(&state) {
//!     let action = searcher.best_action(&state).unwrap();
//!     state = searcher.game().result(&state, &action).unwrap();
//! }
//!
//! // Perfect play draws
//! assert_eq!(searcher.game().outcome(&state), Some(rust_adversarial::GameResult::Draw));
//! ```
//!
//! The free functions `alpha_beta::best_action` and `minimax::best_action`
//! search without keeping statistics.

pub mod alpha_beta;
pub mod config;
pub mod minimax;
pub mod searcher;
pub mod stats;

use crate::rules::Utility;

// Re-export main types
pub use config::{Algorithm, SearchConfig};
pub use searcher::Searcher;
pub use stats::SearchStats;

/// The action chosen at the root and its minimax value for the mover.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<A> {
    pub action: A,
    pub value: Utility,
}

/// Best action for the player to move at `state`, using alpha-beta.
pub fn best_action<G: crate::rules::Game>(
    game: &G,
    state: &G::State,
) -> crate::core::Result<G::Action> {
    alpha_beta::best_action(game, state)
}
