pub mod attacks;
pub mod board;
pub mod error;
pub mod fen;
pub mod game;
pub mod legality;
pub mod movegen;
pub mod perft;
pub mod snapshot;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::*;
pub use game::*;
pub use legality::*;
pub use movegen::{pseudo_moves, pseudo_moves_into};
pub use perft::perft;
pub use snapshot::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by all move selectors (random, rollout, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// The move chosen (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Score of the chosen line from the mover's perspective, if one was scored
    pub score: Option<i32>,
    /// Number of playouts (or candidate evaluations) performed
    pub trials: u32,
    /// Whether the move was chosen because it was found to deliver mate
    pub mate_found: bool,
}

/// Trait that all move selectors implement.
///
/// The game is borrowed immutably: engines explore on their own clones and
/// hand back a move for the caller to play.
pub trait Engine: Send {
    /// Pick a move for the side to move in `game`.
    fn search(&mut self, game: &Game) -> SearchResult;

    /// Returns the engine's name for reports and logs
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
