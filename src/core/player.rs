//! Player identification for two-player games.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Player 0 moves first and turns alternate
//! strictly, so the successor of any player is `(current + 1) mod 2`.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of players in every game this crate searches.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier in `{0, 1}`.
///
/// Player indices are 0-based: the first player is id 0. Deserializing
/// any other id fails, so indexing per-player arrays never goes out of
/// bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player id must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// Iterate over both player IDs in turn order.
    ///
    /// ```
    /// use rust_adversarial::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(Error::InvalidPlayer { id })
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-based for humans
        write!(f, "P{}", self.0 + 1)
    }
}
