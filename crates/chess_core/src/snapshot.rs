//! Position snapshot: the one persisted shape of a position.
//!
//! JSON layout:
//! ```text
//! {
//!   "turn": "white",
//!   "game_board": [[["r", 5, 0], ["kn", 2, 0], ..., [0, 0, 3]], ...],
//!   "moved": [[3, 4], ...]
//! }
//! ```
//! `game_board[row][col]` holds `[sign, value, color]` triples with row 0 on
//! White's side. Color tags are 0 for White and 1 for Black; `[0, 0, 3]` marks
//! an empty square. `moved` lists the squares whose piece has moved already;
//! without it a piece counts as unmoved exactly when it stands on its
//! starting square. The en-passant window is not part of a snapshot.

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    error::SnapshotError,
    game::{Game, GameConfig},
    types::*,
};

const WHITE_TAG: u8 = 0;
const BLACK_TAG: u8 = 1;
const EMPTY_TAG: u8 = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Sign {
    Empty(u8),
    Piece(String),
}

/// `[sign, value, color]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cell(pub Sign, pub i32, pub u8);

impl Cell {
    pub const EMPTY: Cell = Cell(Sign::Empty(0), 0, EMPTY_TAG);

    pub fn from_piece(pc: Option<Piece>) -> Cell {
        match pc {
            None => Cell::EMPTY,
            Some(pc) => {
                let tag = match pc.color {
                    Color::White => WHITE_TAG,
                    Color::Black => BLACK_TAG,
                };
                Cell(
                    Sign::Piece(sign_of(pc.kind).to_string()),
                    pc.kind.rollout_value(),
                    tag,
                )
            }
        }
    }

    /// The piece described by this cell, or `None` for the empty sentinel.
    /// The value column is informational and ignored here.
    fn to_piece(&self, row: usize, col: usize) -> Result<Option<Piece>, SnapshotError> {
        let sign = match &self.0 {
            Sign::Empty(_) => return Ok(None),
            Sign::Piece(s) if self.2 == EMPTY_TAG && s.is_empty() => return Ok(None),
            Sign::Piece(s) => s,
        };
        let kind = kind_of(sign).ok_or_else(|| SnapshotError::UnknownSign {
            sign: sign.clone(),
            row,
            col,
        })?;
        let color = match self.2 {
            WHITE_TAG => Color::White,
            BLACK_TAG => Color::Black,
            tag => return Err(SnapshotError::BadColor { tag, row, col }),
        };
        Ok(Some(Piece::new(color, kind)))
    }
}

fn sign_of(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => "p",
        PieceKind::Knight => "kn",
        PieceKind::Bishop => "b",
        PieceKind::Rook => "r",
        PieceKind::Queen => "q",
        PieceKind::King => "ki",
    }
}

fn kind_of(sign: &str) -> Option<PieceKind> {
    PieceKind::ALL.into_iter().find(|&k| sign_of(k) == sign)
}

fn white() -> Color {
    Color::White
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default = "white")]
    pub turn: Color,
    pub game_board: [[Cell; 8]; 8],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved: Option<Vec<[u8; 2]>>,
}

impl Snapshot {
    pub fn from_board(board: &Board, turn: Color) -> Self {
        let game_board = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                Cell::from_piece(board.piece_at(Square::at(row as u8, col as u8)))
            })
        });
        let moved = Square::all()
            .filter(|&sq| board.piece_at(sq).is_some_and(|pc| pc.has_moved))
            .map(|sq| [sq.row(), sq.col()])
            .collect();
        Snapshot {
            turn,
            game_board,
            moved: Some(moved),
        }
    }

    pub fn from_game(game: &Game) -> Self {
        Self::from_board(game.board(), game.turn())
    }

    pub fn to_board(&self) -> Result<Board, SnapshotError> {
        let mut board = Board::empty();
        for (row, cells) in self.game_board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let sq = Square::at(row as u8, col as u8);
                let piece = cell.to_piece(row, col)?.map(|mut pc| {
                    pc.has_moved = !Board::is_home_square(pc, sq);
                    pc
                });
                board.set_piece(sq, piece);
            }
        }

        if let Some(moved) = &self.moved {
            // explicit list replaces the inferred flags
            for sq in Square::all() {
                if let Some(mut pc) = board.piece_at(sq) {
                    pc.has_moved = false;
                    board.set_piece(sq, Some(pc));
                }
            }
            for &[row, col] in moved {
                let bad = SnapshotError::BadMovedSquare { row, col };
                let sq = Square::new(row as i8, col as i8).ok_or(bad)?;
                let mut pc = board
                    .piece_at(sq)
                    .ok_or(SnapshotError::BadMovedSquare { row, col })?;
                pc.has_moved = true;
                board.set_piece(sq, Some(pc));
            }
        }

        for color in [Color::White, Color::Black] {
            let count = board
                .pieces(color)
                .filter(|(_, pc)| pc.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(SnapshotError::KingCount { color, count });
            }
        }
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    pub fn from_snapshot(snapshot: &Snapshot, config: GameConfig) -> Result<Game, SnapshotError> {
        let board = snapshot.to_board()?;
        Ok(Game::from_board(board, snapshot.turn, config))
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
