//! Match history.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::GameResult;
use crate::search::SearchStats;

/// One ply of a finished or running match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord<A> {
    /// The player who moved.
    pub player: PlayerId,

    /// The action taken.
    pub action: A,

    /// 0-based ply number.
    pub ply: u32,
}

impl<A> ActionRecord<A> {
    #[must_use]
    pub fn new(player: PlayerId, action: A, ply: u32) -> Self {
        Self {
            player,
            action,
            ply,
        }
    }
}

/// A complete match: every move in order, the result and timings.
///
/// `moves` is an `im::Vector`, so cloning a record mid-match is O(1).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "A: Serialize + Clone",
    deserialize = "A: Deserialize<'de> + Clone"
))]
pub struct MatchRecord<A: Clone> {
    /// Moves in play order.
    pub moves: Vector<ActionRecord<A>>,

    /// How the match ended.
    pub result: GameResult,

    /// Wall-clock time for the whole match (microseconds).
    pub elapsed_us: u64,

    /// Search statistics summed over each player's decisions.
    /// Stays zero for agents that do not search.
    pub search_stats: [SearchStats; 2],
}

impl<A: Clone> MatchRecord<A> {
    /// Number of plies played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// Actions taken by `player`, in order.
    pub fn actions_by(&self, player: PlayerId) -> impl Iterator<Item = &A> + '_ {
        self.moves
            .iter()
            .filter(move |record| record.player == player)
            .map(|record| &record.action)
    }

    /// Search statistics for `player`.
    #[must_use]
    pub fn stats_for(&self, player: PlayerId) -> &SearchStats {
        &self.search_stats[player.index()]
    }

    /// Search statistics summed over both players.
    #[must_use]
    pub fn total_stats(&self) -> SearchStats {
        let mut total = SearchStats::new();
        for stats in &self.search_stats {
            total.accumulate(stats);
        }
        total
    }
}
