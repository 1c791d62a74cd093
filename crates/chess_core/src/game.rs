use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    attacks::king_in_check,
    board::Board,
    error::{MoveError, MoveStatus},
    legality::{action_space, classify, has_legal_move, legal_moves},
    types::*,
};

pub const DEFAULT_MAX_PLIES: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    StalemateDraw,
    MoveLimitDraw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate! {winner} wins"),
            GameStatus::StalemateDraw => write!(f, "Stalemate! Game is a draw"),
            GameStatus::MoveLimitDraw => write!(f, "Draw, move limit reached"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Plies after which a still-running game is declared drawn.
    pub max_plies: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}

/// A game of chess: the live board plus turn, status and history.
///
/// `Clone` is the hypothetical-move mechanism: searches copy the whole game,
/// play on the copy and throw it away.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
    ply: u32,
    config: GameConfig,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(Board::startpos(), Color::White, config)
    }

    /// Start a game from an arbitrary position with `turn` to move.
    /// The position may already be terminal (mate or stalemate).
    pub fn from_board(board: Board, turn: Color, config: GameConfig) -> Self {
        let mut game = Game {
            board,
            turn,
            status: GameStatus::InProgress,
            ply: 0,
            config,
            history: Vec::new(),
        };
        game.status = game.evaluate_status();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
    pub fn ply(&self) -> u32 {
        self.ply
    }
    pub fn config(&self) -> GameConfig {
        self.config
    }
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        king_in_check(&self.board, self.turn)
    }

    /// Legal moves of the side to move; empty once the game is over.
    pub fn action_space(&self) -> Vec<Move> {
        if self.status.is_over() {
            return Vec::new();
        }
        action_space(&self.board, self.turn)
    }

    /// Legal destinations of the piece on `from`, whoever owns it.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        legal_moves(&self.board, from)
    }

    pub fn play(&mut self, mv: Move) -> Result<MoveRecord, MoveError> {
        self.make_move(mv.from, mv.to)
    }

    /// Validate and play `from -> to` for the side to move.
    ///
    /// On error nothing changes. On success the move is applied (pawns that
    /// reach the far rank become queens), the turn passes, and the game
    /// status is re-evaluated for the new side to move.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver(self.status));
        }
        let piece = match self.board.piece_at(from) {
            Some(pc) if pc.color == self.turn => pc,
            _ => {
                debug!(%from, %to, turn = %self.turn, "rejected: no piece to move");
                return Err(MoveError::NoPiece(from));
            }
        };
        if !legal_moves(&self.board, from).contains(&to) {
            debug!(%from, %to, kind = ?piece.kind, "rejected: illegal move");
            return Err(MoveError::Illegal { from, to });
        }

        let special = classify(&self.board, from, to);
        let captured = self.board.apply_move(from, to, special);

        let promoted = piece.kind == PieceKind::Pawn && to.row() == piece.color.other().back_row();
        if promoted {
            self.board
                .set_piece(to, Some(Piece::new(piece.color, PieceKind::Queen).moved()));
        }

        let record = MoveRecord {
            from,
            to,
            kind: piece.kind,
            special,
            captured: captured.map(|c| c.kind),
            promoted,
        };
        self.history.push(record);
        self.ply += 1;
        self.turn = self.turn.other();
        self.status = self.evaluate_status();

        if self.status.is_over() {
            info!(status = %self.status, ply = self.ply, "game over");
        }
        Ok(record)
    }

    /// Raw-coordinate entry point for move sources that work in row/column
    /// numbers. Coordinates are range-checked before any rule is consulted.
    pub fn submit(
        &mut self,
        origin_row: i32,
        origin_col: i32,
        dest_row: i32,
        dest_col: i32,
    ) -> MoveStatus {
        match self.try_submit(origin_row, origin_col, dest_row, dest_col) {
            Ok(_) => MoveStatus::Accepted,
            Err(e) => MoveStatus::from(&e),
        }
    }

    pub fn try_submit(
        &mut self,
        origin_row: i32,
        origin_col: i32,
        dest_row: i32,
        dest_col: i32,
    ) -> Result<MoveRecord, MoveError> {
        let from = square_from_i32(origin_row, origin_col)?;
        let to = square_from_i32(dest_row, dest_col)?;
        if from == to {
            return Err(MoveError::SameSquare(from));
        }
        self.make_move(from, to)
    }

    /// Human-readable status for a renderer.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress if self.is_check() => format!("Check! {} to move", self.turn),
            GameStatus::InProgress => format!("{} to move", self.turn),
            over => over.to_string(),
        }
    }

    fn evaluate_status(&self) -> GameStatus {
        if !has_legal_move(&self.board, self.turn) {
            if self.is_check() {
                GameStatus::Checkmate {
                    winner: self.turn.other(),
                }
            } else {
                GameStatus::StalemateDraw
            }
        } else if self.ply >= self.config.max_plies {
            GameStatus::MoveLimitDraw
        } else {
            GameStatus::InProgress
        }
    }
}

fn square_from_i32(row: i32, col: i32) -> Result<Square, MoveError> {
    let oob = MoveError::OutOfBounds { row, col };
    let row = i8::try_from(row).map_err(|_| oob)?;
    let col = i8::try_from(col).map_err(|_| oob)?;
    Square::new(row, col).ok_or(oob)
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
