//! Match runner for playing games between engines

use chess_core::{Color, Engine, Game, GameConfig, GameStatus};
use tracing::{info, warn};

use crate::config::MatchConfig;
use crate::results::{GameRecord, GameResult, MatchReport, MatchResult};

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// The report's result is from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchReport, String> {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (record, status) = if engine1_white {
                self.play_game(engine1, engine2)?
            } else {
                self.play_game(engine2, engine1)?
            };
            let game_result = if engine1_white {
                record.result
            } else {
                record.result.flipped()
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }
            match status {
                GameStatus::Checkmate { .. } => result.checkmates += 1,
                GameStatus::StalemateDraw => result.stalemates += 1,
                GameStatus::MoveLimitDraw => result.move_limit_draws += 1,
                GameStatus::InProgress => {}
            }

            info!(
                game = game_num + 1,
                white = %record.white,
                black = %record.black,
                result = record.result.notation(),
                plies = record.plies,
                "game finished"
            );
            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                println!(
                    "Game {}/{}: {} ({}) {} - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    record.result.notation(),
                    color,
                    record.termination,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
            games.push(record);
        }

        Ok(MatchReport {
            config: self.config.clone(),
            result,
            games,
        })
    }

    /// Play a single game to its end; the record's result is from White's
    /// perspective.
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<(GameRecord, GameStatus), String> {
        let mut game = Game::with_config(GameConfig {
            max_plies: self.config.max_plies,
        });
        white.new_game();
        black.new_game();

        while !game.is_over() {
            let (search, name) = match game.turn() {
                Color::White => (white.search(&game), white.name().to_string()),
                Color::Black => (black.search(&game), black.name().to_string()),
            };
            let mv = search
                .best_move
                .ok_or_else(|| format!("{} returned no move in a running game", name))?;
            if let Err(e) = game.play(mv) {
                warn!(engine = %name, %mv, error = %e, "engine chose an illegal move");
                return Err(format!("{} played {}: {}", name, mv, e));
            }
        }

        let status = game.status();
        let result = match status.winner() {
            Some(Color::White) => GameResult::Win,
            Some(Color::Black) => GameResult::Loss,
            None => GameResult::Draw,
        };
        let record = GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            result,
            termination: status.to_string(),
            plies: game.ply(),
            moves: game
                .history()
                .iter()
                .map(|rec| rec.as_move().to_string())
                .collect(),
        };
        Ok((record, status))
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
