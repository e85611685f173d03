//! Playing matches: agents, the turn loop and match records.
//!
//! This is the agent-environment loop around the search engine: ask the
//! agent for the player to move, apply its action, repeat until the game
//! is over.

pub mod agent;
pub mod arena;
pub mod record;
pub mod report;

pub use agent::{Agent, FirstLegalAgent, RandomAgent, SearchAgent};
pub use arena::{Arena, MatchConfig};
pub use record::{ActionRecord, MatchRecord};
pub use report::status_line;
