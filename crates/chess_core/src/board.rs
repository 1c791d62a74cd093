use crate::types::*;

/// The move that was played immediately before the current position.
/// Only consulted for en-passant eligibility, so it lives for one ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl LastMove {
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    last_move: Option<LastMove>,
    captured: Vec<Piece>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            last_move: None,
            captured: Vec::new(),
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for c in 0..8u8 {
            b.grid[1][c as usize] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.grid[6][c as usize] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        for (c, &kind) in BACK_RANK.iter().enumerate() {
            b.grid[0][c] = Some(Piece::new(Color::White, kind));
            b.grid[7][c] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    /// Whether `square` is where a piece of this kind and color starts a game.
    pub fn is_home_square(piece: Piece, square: Square) -> bool {
        let row = square.row();
        match piece.kind {
            PieceKind::Pawn => row == piece.color.pawn_row(),
            kind => row == piece.color.back_row() && BACK_RANK[square.col() as usize] == kind,
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    /// Raw-coordinate lookup; off-board coordinates simply hold nothing.
    pub fn piece_at_coords(&self, row: i8, col: i8) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.piece_at(sq))
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.grid[sq.row() as usize][sq.col() as usize] = pc;
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn set_last_move(&mut self, last: Option<LastMove>) {
        self.last_move = last;
    }

    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.color == color => Some((sq, pc)),
            _ => None,
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Sum of rollout weights over `color`'s pieces still on the board.
    pub fn material(&self, color: Color) -> i32 {
        self.pieces(color).map(|(_, pc)| pc.kind.rollout_value()).sum()
    }

    /// Relocate the piece on `from` to `to` unconditionally.
    ///
    /// Legality is the caller's business. `special` carries the extra side
    /// effect of en passant (remove the bypassed pawn) or castling (bring the
    /// rook across). Returns the captured piece, if any.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        special: Option<SpecialMove>,
    ) -> Option<Piece> {
        let mut moved = self.piece_at(from)?;
        let mut captured = None;

        match special {
            Some(SpecialMove::EnPassant) => {
                if let Some(bypassed) = Square::new(from.row() as i8, to.col() as i8) {
                    captured = self.piece_at(bypassed);
                    self.set_piece(bypassed, None);
                }
            }
            Some(SpecialMove::CastleKingside) => self.castle_rook(from.row(), 7, 5),
            Some(SpecialMove::CastleQueenside) => self.castle_rook(from.row(), 0, 3),
            None => {}
        }

        if let Some(target) = self.piece_at(to) {
            captured = Some(target);
        }
        if let Some(pc) = captured {
            self.captured.push(pc);
        }

        moved.has_moved = true;
        self.set_piece(from, None);
        self.set_piece(to, Some(moved));
        self.last_move = Some(LastMove {
            piece: moved,
            from,
            to,
        });
        captured
    }

    fn castle_rook(&mut self, row: u8, from_col: u8, to_col: u8) {
        let rook_from = Square::at(row, from_col);
        let rook_to = Square::at(row, to_col);
        if let Some(rook) = self.piece_at(rook_from) {
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, Some(rook.moved()));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
