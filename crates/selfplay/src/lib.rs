//! Self-play runner
//!
//! Plays games between two move selectors and reports how they went:
//! - engines are named by spec strings (`random`, `rollout`, `rollout:W:D`)
//! - match settings come from a TOML file, overridable on the command line
//! - finished matches can be saved as JSON
//!
//! # Usage
//!
//! ```bash
//! cargo run -p selfplay -- --engine1 rollout:50:2 --engine2 random --games 20
//! cargo run -p selfplay -- --config match.toml --output results.json
//! ```

mod config;
mod engines;
mod match_runner;
mod results;

pub use config::*;
pub use engines::*;
pub use match_runner::*;
pub use results::*;
