//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Same game seen from the other side
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    pub fn notation(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// One finished game, result from White's perspective
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub result: GameResult,
    /// How the game ended, e.g. "Checkmate! Black wins"
    pub termination: String,
    pub plies: u32,
    /// Moves in coordinate notation ("e2e4")
    pub moves: Vec<String>,
}

/// Result of a match (multiple games), from engine1's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub checkmates: u32,
    pub stalemates: u32,
    pub move_limit_draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Everything worth keeping about a match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let r = &self.result;
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            self.config.engine1, self.config.engine2
        ));
        report.push_str(&format!(
            "Games: {}, max plies: {}\n\n",
            r.total_games(),
            self.config.max_plies
        ));
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws\n",
            self.config.engine1, r.wins, r.losses, r.draws
        ));
        report.push_str(&format!("Score: {:.1}%\n", r.score() * 100.0));
        report.push_str(&format!(
            "Terminations: {} checkmate, {} stalemate, {} move limit\n",
            r.checkmates, r.stalemates, r.move_limit_draws
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
