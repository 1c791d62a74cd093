//! Match configuration

use std::path::Path;

use chess_core::DEFAULT_MAX_PLIES;
use serde::{Deserialize, Serialize};

/// Settings for one match between two engines.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// engine1 = "rollout:50:2"
/// engine2 = "random"
/// num_games = 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Spec of the first engine (plays White in even-numbered games)
    pub engine1: String,
    /// Spec of the second engine
    pub engine2: String,
    /// Number of games to play
    pub num_games: u32,
    /// Plies before a game is declared drawn
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Base seed for the engines; entropy when absent
    pub seed: Option<u64>,
    /// Run rollout trials on the rayon pool
    pub parallel: bool,
    /// Where to write the JSON report
    pub output: Option<String>,
    /// Print one line per finished game
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            engine1: "rollout".to_string(),
            engine2: "random".to_string(),
            num_games: 10,
            max_plies: DEFAULT_MAX_PLIES,
            alternate_colors: true,
            seed: None,
            parallel: false,
            output: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load a match configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        Self::from_toml(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
