use crate::{
    attacks::{king_in_check, square_is_attacked},
    board::Board,
    types::*,
};

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Pseudo-legal destinations of the piece standing on `from`.
///
/// Own-king safety is not considered here. With `for_attack_check` set the
/// result is the set of squares the piece threatens: pawns report both forward
/// diagonals whatever is on them and never their pushes, and kings never
/// report castling (castling itself asks which squares are attacked).
pub fn pseudo_moves(board: &Board, from: Square, for_attack_check: bool) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    pseudo_moves_into(board, from, for_attack_check, &mut out);
    out
}

pub fn pseudo_moves_into(
    board: &Board,
    from: Square,
    for_attack_check: bool,
    out: &mut Vec<Square>,
) {
    out.clear();
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc, for_attack_check, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &DIAGONALS, out);
            gen_slider(board, from, pc.color, &ORTHOGONALS, out);
        }
        PieceKind::King => {
            gen_steps(board, from, pc.color, &KING_DELTAS, out);
            if !for_attack_check {
                gen_castle(board, from, pc, out);
            }
        }
    }
}

fn gen_pawn(
    board: &Board,
    from: Square,
    pc: Piece,
    for_attack_check: bool,
    out: &mut Vec<Square>,
) {
    let dir = pc.color.forward();

    if for_attack_check {
        for dc in [-1, 1] {
            if let Some(to) = from.offset(dir, dc) {
                out.push(to);
            }
        }
        return;
    }

    // forward 1, then forward 2 for a pawn that has never moved
    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            out.push(one);
            if !pc.has_moved {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    // captures + en-passant
    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != pc.color => out.push(to),
            Some(_) => {}
            None => {
                if en_passant_target(board, from, pc.color, dc) {
                    out.push(to);
                }
            }
        }
    }
}

/// True when the enemy pawn beside `from` (on column offset `dc`) arrived
/// there by a double push on the very last move.
fn en_passant_target(board: &Board, from: Square, color: Color, dc: i8) -> bool {
    let Some(beside) = from.offset(0, dc) else {
        return false;
    };
    match board.last_move() {
        Some(last) => {
            last.to == beside
                && last.piece.color != color
                && last.is_double_pawn_push()
                && board.piece_at(beside).map(|p| p.kind) == Some(PieceKind::Pawn)
        }
        None => false,
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

fn gen_castle(board: &Board, from: Square, king: Piece, out: &mut Vec<Square>) {
    if king.has_moved || from.col() != 4 || king_in_check(board, king.color) {
        return;
    }
    let row = from.row();
    let enemy = king.color.other();

    // (rook column, columns that must be empty, king direction)
    let sides: [(u8, &[u8], i8); 2] = [(7, &[5, 6], 1), (0, &[1, 2, 3], -1)];

    for (rook_col, between, step) in sides {
        let rook_ok = matches!(
            board.piece_at(Square::at(row, rook_col)),
            Some(r) if r.kind == PieceKind::Rook && r.color == king.color && !r.has_moved
        );
        if !rook_ok {
            continue;
        }
        if between
            .iter()
            .any(|&c| board.piece_at(Square::at(row, c)).is_some())
        {
            continue;
        }
        // start, transit and destination squares
        let path = [Some(from), from.offset(0, step), from.offset(0, 2 * step)];
        let safe = path.iter().all(|sq| match sq {
            Some(sq) => !square_is_attacked(board, *sq, enemy),
            None => false,
        });
        if safe {
            if let Some(to) = from.offset(0, 2 * step) {
                out.push(to);
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
