//! Flat random playouts.
//!
//! Every trial clones the game, plays a random first move for the searching
//! side and then random move pairs. A trial either proves a mate for the
//! searcher (its first move is returned at once), is thrown away (the
//! searcher got mated or someone was stalemated), or is scored by the
//! searcher's remaining material. Running into the ply cap ends a playout
//! early and scores it. There is no tree and no backpropagation.

use chess_core::{Color, Game, GameStatus, Move, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    /// The searcher delivered mate somewhere along the playout.
    Mate,
    /// Lost or drawn line; contributes nothing.
    Discarded,
    /// Searcher's material at the end of the playout.
    Scored(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    pub first: Move,
    pub outcome: TrialOutcome,
}

/// Pick a move for the side to move in `game`.
///
/// `width` independent trials are run, each made of one own/opponent move
/// pair plus `depth` further pairs. Every trial draws from its own `StdRng`
/// seeded from `rng` up front, which makes the result independent of the
/// order trials are evaluated in.
pub fn rollout_search<R: Rng + ?Sized>(
    game: &Game,
    width: u32,
    depth: u32,
    rng: &mut R,
) -> SearchResult {
    let seeds = draw_seeds(width, rng);
    let trials = seeds
        .iter()
        .filter_map(|&seed| run_trial(game, depth, &mut StdRng::seed_from_u64(seed)));
    finish(game, select(trials), rng)
}

/// Same answer as [`rollout_search`] for the same `rng` state, with the
/// trials spread over the rayon thread pool.
///
/// Every trial is played out before the winner is picked, so a mating trial
/// does not cut the remaining trials short the way it does sequentially.
pub fn rollout_search_parallel<R: Rng + ?Sized>(
    game: &Game,
    width: u32,
    depth: u32,
    rng: &mut R,
) -> SearchResult {
    let seeds = draw_seeds(width, rng);
    let trials: Vec<Trial> = seeds
        .par_iter()
        .filter_map(|&seed| run_trial(game, depth, &mut StdRng::seed_from_u64(seed)))
        .collect();
    finish(game, select(trials), rng)
}

fn draw_seeds<R: Rng + ?Sized>(width: u32, rng: &mut R) -> Vec<u64> {
    (0..width).map(|_| rng.gen()).collect()
}

/// Play one playout. `None` when the searcher has no legal move at all.
pub fn run_trial<R: Rng + ?Sized>(game: &Game, depth: u32, rng: &mut R) -> Option<Trial> {
    let searcher = game.turn();
    let mut sim = game.clone();
    let first = random_move(&mut sim, rng)?;

    let outcome = playout(&mut sim, searcher, depth, rng);
    trace!(%first, ?outcome, "trial");
    Some(Trial { first, outcome })
}

/// Continue a trial whose first move has already been played on `sim`.
fn playout<R: Rng + ?Sized>(
    sim: &mut Game,
    searcher: Color,
    depth: u32,
    rng: &mut R,
) -> TrialOutcome {
    for pair in 0..=depth {
        if pair > 0 && random_move(sim, rng).is_none() {
            return TrialOutcome::Discarded;
        }
        match sim.status() {
            GameStatus::Checkmate { winner } if winner == searcher => return TrialOutcome::Mate,
            GameStatus::InProgress => {}
            GameStatus::MoveLimitDraw => break,
            _ => return TrialOutcome::Discarded,
        }

        if random_move(sim, rng).is_none() {
            return TrialOutcome::Discarded;
        }
        match sim.status() {
            GameStatus::InProgress => {}
            GameStatus::MoveLimitDraw => break,
            _ => return TrialOutcome::Discarded,
        }
    }
    TrialOutcome::Scored(sim.board().material(searcher))
}

fn random_move<R: Rng + ?Sized>(sim: &mut Game, rng: &mut R) -> Option<Move> {
    let mv = *sim.action_space().choose(rng)?;
    sim.play(mv).ok()?;
    Some(mv)
}

#[derive(Debug, Default)]
struct Selection {
    best: Option<(Move, i32)>,
    mate: Option<Move>,
    trials: u32,
}

/// Earliest mating trial wins outright; otherwise the strictly highest
/// score, earliest trial on ties.
fn select(trials: impl IntoIterator<Item = Trial>) -> Selection {
    let mut sel = Selection::default();
    for trial in trials {
        sel.trials += 1;
        match trial.outcome {
            TrialOutcome::Mate => {
                sel.mate = Some(trial.first);
                break;
            }
            TrialOutcome::Discarded => {}
            TrialOutcome::Scored(score) => {
                if sel.best.map_or(true, |(_, best)| score > best) {
                    sel.best = Some((trial.first, score));
                }
            }
        }
    }
    sel
}

fn finish<R: Rng + ?Sized>(game: &Game, sel: Selection, rng: &mut R) -> SearchResult {
    let result = if let Some(mv) = sel.mate {
        SearchResult {
            best_move: Some(mv),
            score: None,
            trials: sel.trials,
            mate_found: true,
        }
    } else if let Some((mv, score)) = sel.best {
        SearchResult {
            best_move: Some(mv),
            score: Some(score),
            trials: sel.trials,
            mate_found: false,
        }
    } else {
        // every trial was lost or drawn
        SearchResult {
            best_move: game.action_space().choose(rng).copied(),
            score: None,
            trials: sel.trials,
            mate_found: false,
        }
    };

    debug!(
        turn = %game.turn(),
        trials = result.trials,
        mate = result.mate_found,
        score = ?result.score,
        best = ?result.best_move,
        "rollout search done"
    );
    result
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
