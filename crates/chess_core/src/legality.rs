use crate::{
    attacks::king_in_check,
    board::Board,
    movegen::pseudo_moves,
    types::*,
};

/// Work out which special side effect a move from `from` to `to` carries.
///
/// A king travelling two files is castling; a pawn stepping diagonally onto
/// an empty square is capturing en passant. Everything else is plain.
pub fn classify(board: &Board, from: Square, to: Square) -> Option<SpecialMove> {
    let pc = board.piece_at(from)?;
    let dc = to.col() as i8 - from.col() as i8;
    match pc.kind {
        PieceKind::King if dc == 2 => Some(SpecialMove::CastleKingside),
        PieceKind::King if dc == -2 => Some(SpecialMove::CastleQueenside),
        PieceKind::Pawn if dc != 0 && board.piece_at(to).is_none() => Some(SpecialMove::EnPassant),
        _ => None,
    }
}

/// Board after playing `from -> to` on a copy; the original is untouched.
pub fn after_move(board: &Board, from: Square, to: Square) -> Board {
    let mut next = board.clone();
    let special = classify(board, from, to);
    next.apply_move(from, to, special);
    next
}

/// Legal destinations for the piece on `from`.
///
/// Each pseudo-legal candidate is played on a throwaway copy and kept only if
/// the mover's king is not attacked afterwards. Pins, check evasions and king
/// walks into attacked squares all fall out of this one test.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(pc) = board.piece_at(from) else {
        return Vec::new();
    };
    let mut moves = pseudo_moves(board, from, false);
    moves.retain(|&to| !king_in_check(&after_move(board, from, to), pc.color));
    moves
}

pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    legal_moves(board, from).contains(&to)
}

/// All legal moves for `color`, in board order.
pub fn action_space(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in board.pieces(color) {
        out.extend(legal_moves(board, from).into_iter().map(|to| Move::new(from, to)));
    }
    out
}

/// Cheaper than `action_space(..).is_empty()`: stops at the first legal move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
