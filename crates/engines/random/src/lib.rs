//! Random Move Engine
//!
//! Picks uniformly among the legal moves of the side to move. Useful as a
//! baseline opponent for the rollout engine and for exercising move
//! generation over long self-play runs.

use chess_core::{Engine, Game, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

#[cfg(test)]
mod lib_tests;

/// A move selector with no evaluation at all.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move choices for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, game: &Game) -> SearchResult {
        let moves = game.action_space();
        let best_move = moves.choose(&mut self.rng).copied();
        trace!(candidates = moves.len(), chosen = ?best_move, "random pick");

        SearchResult {
            best_move,
            score: None,
            trials: 1,
            mate_found: false,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
