//! Rollout Engine
//!
//! Chooses moves by flat Monte-Carlo playouts: a number of independent
//! random games (`width`) of bounded length (`depth` move pairs after the
//! first) are played from the current position and the first move of the
//! best-scoring one is returned. A playout that mates the opponent wins
//! immediately.

pub mod search;

use chess_core::{Engine, Game, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

pub use search::{rollout_search, rollout_search_parallel, run_trial, Trial, TrialOutcome};


pub const DEFAULT_WIDTH: u32 = 100;
pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolloutConfig {
    /// Number of independent playouts per move
    pub width: u32,
    /// Extra own/opponent move pairs after the first pair
    pub depth: u32,
    /// Fixed seed for reproducible play; entropy when absent
    pub seed: Option<u64>,
    /// Spread trials over the rayon pool
    pub parallel: bool,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            depth: DEFAULT_DEPTH,
            seed: None,
            parallel: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RolloutEngine {
    config: RolloutConfig,
    rng: StdRng,
    name: String,
}

impl RolloutEngine {
    pub fn new(config: RolloutConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            name: format!("Rollout w{} d{}", config.width, config.depth),
            config,
            rng,
        }
    }

    pub fn config(&self) -> RolloutConfig {
        self.config
    }
}

impl Default for RolloutEngine {
    fn default() -> Self {
        Self::new(RolloutConfig::default())
    }
}

impl Engine for RolloutEngine {
    fn search(&mut self, game: &Game) -> SearchResult {
        let RolloutConfig { width, depth, .. } = self.config;
        if self.config.parallel {
            rollout_search_parallel(game, width, depth, &mut self.rng)
        } else {
            rollout_search(game, width, depth, &mut self.rng)
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
