//! Engine construction from spec strings

use chess_core::Engine;
use random_engine::RandomEngine;
use rollout_engine::{RolloutConfig, RolloutEngine};

/// Build an engine from its spec.
///
/// - `random`
/// - `rollout` (default width and depth)
/// - `rollout:W:D` (width `W`, depth `D`)
pub fn create_engine(
    spec: &str,
    seed: Option<u64>,
    parallel: bool,
) -> Result<Box<dyn Engine>, String> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "random" | "rand" => {
            if parts.len() > 1 {
                return Err(format!("random engine takes no parameters: {}", spec));
            }
            Ok(match seed {
                Some(seed) => Box::new(RandomEngine::with_seed(seed)),
                None => Box::new(RandomEngine::new()),
            })
        }
        "rollout" | "mc" => {
            let mut config = RolloutConfig {
                seed,
                parallel,
                ..Default::default()
            };
            match parts.len() {
                1 => {}
                3 => {
                    config.width = parse_param(parts[1], "width", spec)?;
                    config.depth = parse_param(parts[2], "depth", spec)?;
                }
                _ => return Err(format!("expected rollout:WIDTH:DEPTH, got {}", spec)),
            }
            if config.width == 0 {
                return Err(format!("rollout width must be positive: {}", spec));
            }
            Ok(Box::new(RolloutEngine::new(config)))
        }
        _ => Err(format!("Unknown engine: {}", spec)),
    }
}

fn parse_param(value: &str, what: &str, spec: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("invalid rollout {} '{}' in {}", what, value, spec))
}

#[cfg(test)]
#[path = "engines_tests.rs"]
mod engines_tests;
