//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Which tree search to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
    /// Exhaustive minimax, no pruning. Baseline for correctness and timing.
    Minimax,
}

impl Algorithm {
    /// Human-readable name, as used in logs and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AlphaBeta => "alpha-beta pruning",
            Algorithm::Minimax => "minimax",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tree search to run (default: alpha-beta).
    pub algorithm: Algorithm,
}

impl SearchConfig {
    /// Config for alpha-beta search.
    pub fn alpha_beta() -> Self {
        Self::default().with_algorithm(Algorithm::AlphaBeta)
    }

    /// Config for exhaustive minimax.
    pub fn minimax() -> Self {
        Self::default().with_algorithm(Algorithm::Minimax)
    }

    /// Create a new config with a custom algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}
