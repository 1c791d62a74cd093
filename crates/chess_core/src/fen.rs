//! Forsyth-Edwards Notation import/export used by tests and tooling.
//!
//! Castling rights are carried by the moved flags of kings and rooks, and the
//! en-passant square by the board's last-move record, so a round trip through
//! FEN keeps every rule-relevant bit. Clock fields are accepted and ignored.

use crate::{
    board::{Board, LastMove},
    error::FenError,
    game::{Game, GameConfig},
    types::*,
};

impl Game {
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        Self::from_fen_with_config(fen, GameConfig::default())
    }

    pub fn from_fen_with_config(fen: &str, config: GameConfig) -> Result<Game, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let mut board = parse_board(parts[0])?;

        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        apply_castling(&mut board, parts[2])?;

        if parts[3] != "-" {
            let ep = Square::from_coord(parts[3])
                .ok_or_else(|| FenError::EnPassant(parts[3].to_string()))?;
            board.set_last_move(Some(double_push_through(ep, parts[3])?));
        }

        for color in [Color::White, Color::Black] {
            let count = board
                .pieces(color)
                .filter(|(_, pc)| pc.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(FenError::KingCount { color, count });
            }
        }

        Ok(Game::from_board(board, turn, config))
    }

    pub fn to_fen(&self) -> String {
        let board = self.board();
        let mut placement = String::new();
        for row in (0..8u8).rev() {
            let mut empty = 0;
            for col in 0..8u8 {
                match board.piece_at(Square::at(row, col)) {
                    None => empty += 1,
                    Some(pc) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        let c = pc.kind.fen_char();
                        placement.push(match pc.color {
                            Color::White => c.to_ascii_uppercase(),
                            Color::Black => c,
                        });
                    }
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if row > 0 {
                placement.push('/');
            }
        }

        let side = match self.turn() {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, marks) in [(Color::White, ['K', 'Q']), (Color::Black, ['k', 'q'])] {
            for (rook_col, mark) in [(7u8, marks[0]), (0u8, marks[1])] {
                if castle_right(board, color, rook_col) {
                    castling.push(mark);
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = match board.last_move() {
            Some(last) if last.is_double_pawn_push() => {
                let mid = (last.from.row() + last.to.row()) / 2;
                Square::at(mid, last.to.col()).to_string()
            }
            _ => "-".to_string(),
        };

        format!("{placement} {side} {castling} {ep} 0 {}", self.ply() / 2 + 1)
    }
}

fn parse_board(section: &str) -> Result<Board, FenError> {
    let bad = || FenError::Board(section.to_string());
    let ranks: Vec<&str> = section.split('/').collect();
    if ranks.len() != 8 {
        return Err(bad());
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
        let mut col: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                col += d as i8;
            } else {
                let kind = PieceKind::from_fen_char(ch).ok_or_else(bad)?;
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(row, col).ok_or_else(bad)?;
                let mut pc = Piece::new(color, kind);
                pc.has_moved = !Board::is_home_square(pc, sq);
                board.set_piece(sq, Some(pc));
                col += 1;
            }
            if col > 8 {
                return Err(bad());
            }
        }
        if col != 8 {
            return Err(bad());
        }
    }
    Ok(board)
}

/// Kings and corner rooks are unmoved only when a castling right says so.
fn apply_castling(board: &mut Board, field: &str) -> Result<(), FenError> {
    let mut rights = [[false; 2]; 2]; // [color][kingside, queenside]
    if field != "-" {
        for c in field.chars() {
            match c {
                'K' => rights[0][0] = true,
                'Q' => rights[0][1] = true,
                'k' => rights[1][0] = true,
                'q' => rights[1][1] = true,
                _ => return Err(FenError::Castling(field.to_string())),
            }
        }
    }

    for color in [Color::White, Color::Black] {
        let row = color.back_row();
        let [kingside, queenside] = rights[color.idx()];
        mark_moved(board, Square::at(row, 4), PieceKind::King, color, !(kingside || queenside));
        mark_moved(board, Square::at(row, 7), PieceKind::Rook, color, !kingside);
        mark_moved(board, Square::at(row, 0), PieceKind::Rook, color, !queenside);
    }
    Ok(())
}

fn mark_moved(board: &mut Board, sq: Square, kind: PieceKind, color: Color, moved: bool) {
    if let Some(mut pc) = board.piece_at(sq) {
        if pc.kind == kind && pc.color == color {
            pc.has_moved = moved;
            board.set_piece(sq, Some(pc));
        }
    }
}

/// The pawn double push that leaves `ep` as the square passed over.
fn double_push_through(ep: Square, text: &str) -> Result<LastMove, FenError> {
    let (color, from_row, to_row) = match ep.row() {
        2 => (Color::White, 1, 3),
        5 => (Color::Black, 6, 4),
        _ => return Err(FenError::EnPassant(text.to_string())),
    };
    Ok(LastMove {
        piece: Piece::new(color, PieceKind::Pawn).moved(),
        from: Square::at(from_row, ep.col()),
        to: Square::at(to_row, ep.col()),
    })
}

fn castle_right(board: &Board, color: Color, rook_col: u8) -> bool {
    let row = color.back_row();
    let unmoved = |col: u8, kind: PieceKind| {
        matches!(
            board.piece_at(Square::at(row, col)),
            Some(pc) if pc.kind == kind && pc.color == color && !pc.has_moved
        )
    };
    unmoved(4, PieceKind::King) && unmoved(rook_col, PieceKind::Rook)
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
