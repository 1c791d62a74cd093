//! Error types for move submission and position import.

use thiserror::Error;

use crate::{game::GameStatus, types::Square};

/// Reasons a submitted move is turned down. The game is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinates ({row}, {col}) are off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("origin and destination are both {0}")]
    SameSquare(Square),

    #[error("no piece of the side to move on {0}")]
    NoPiece(Square),

    #[error("illegal move: {from} -> {to}")]
    Illegal { from: Square, to: Square },

    #[error("game is already over: {0}")]
    GameOver(GameStatus),
}

/// Coarse outcome of a raw-coordinate move submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Accepted,
    OutOfBounds,
    IllegalMove,
}

impl From<&MoveError> for MoveStatus {
    fn from(e: &MoveError) -> Self {
        match e {
            MoveError::OutOfBounds { .. } | MoveError::SameSquare(_) => MoveStatus::OutOfBounds,
            MoveError::NoPiece(_) | MoveError::Illegal { .. } | MoveError::GameOver(_) => {
                MoveStatus::IllegalMove
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown piece sign {sign:?} at ({row}, {col})")]
    UnknownSign { sign: String, row: usize, col: usize },

    #[error("bad color tag {tag} at ({row}, {col})")]
    BadColor { tag: u8, row: usize, col: usize },

    #[error("moved-square entry ({row}, {col}) is off the board or empty")]
    BadMovedSquare { row: u8, col: u8 },

    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: crate::types::Color, count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),

    #[error("invalid FEN board section: {0}")]
    Board(String),

    #[error("invalid side to move: {0}")]
    SideToMove(String),

    #[error("invalid castling field: {0}")]
    Castling(String),

    #[error("invalid en-passant square: {0}")]
    EnPassant(String),

    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: crate::types::Color, count: usize },
}
