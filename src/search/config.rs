//! Configuration types for the search engine.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the engine walks the game tree.
///
/// Every strategy selects the same move as plain minimax; the alternatives
/// only visit fewer nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum SearchStrategy {
    /// Full minimax over every line of play.
    #[default]
    Exhaustive,
    /// Minimax with exact values cached under the board's canonical form.
    Memoized,
    /// Fail-soft alpha-beta pruning.
    AlphaBeta,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchStrategy::Exhaustive => "exhaustive",
            SearchStrategy::Memoized => "memoized",
            SearchStrategy::AlphaBeta => "alpha-beta",
        };
        f.write_str(label)
    }
}

impl FromStr for SearchStrategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhaustive" | "minimax" => Ok(SearchStrategy::Exhaustive),
            "memoized" | "memo" | "cached" => Ok(SearchStrategy::Memoized),
            "alpha-beta" | "alpha_beta" | "alphabeta" => Ok(SearchStrategy::AlphaBeta),
            _ => Err(crate::Error::ParseSearchStrategy {
                input: s.to_string(),
                expected: "exhaustive, memoized, alpha-beta".to_string(),
            }),
        }
    }
}

/// Configuration for creating a [`Minimax`](super::Minimax) engine.
///
/// # Examples
///
/// ```
/// use tictactoe_solver::search::{SearchConfig, SearchStrategy};
///
/// let config = SearchConfig::new().with_strategy(SearchStrategy::AlphaBeta);
/// assert_eq!(config.strategy, SearchStrategy::AlphaBeta);
///
/// let parsed = SearchConfig::from_json(r#"{ "strategy": "memoized" }"#).unwrap();
/// assert_eq!(parsed.strategy, SearchStrategy::Memoized);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Tree walking strategy
    pub strategy: SearchStrategy,
}

impl SearchConfig {
    /// Exhaustive search, the reference behaviour
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration as JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
