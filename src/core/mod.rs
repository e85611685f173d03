//! Core building blocks shared by every game: players, RNG, errors.

pub mod player;
pub mod rng;

pub use crate::error::{Error, Result};
pub use player::{PlayerId, PLAYER_COUNT};
pub use rng::GameRng;
