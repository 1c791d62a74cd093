//! Attack queries built on attack-mode pseudo-move generation.
//!
//! Nothing here looks at own-king safety, so the legality filter can call
//! into this module without recursing back into itself.

use crate::{
    board::Board,
    movegen::pseudo_moves_into,
    types::*,
};

/// True iff some piece of `by` threatens `target`.
pub fn square_is_attacked(board: &Board, target: Square, by: Color) -> bool {
    let mut buf = Vec::with_capacity(28);
    board.pieces(by).any(|(from, _)| {
        pseudo_moves_into(board, from, true, &mut buf);
        buf.contains(&target)
    })
}

/// Every square threatened by at least one piece of `by`.
pub fn squares_attacked_by(board: &Board, by: Color) -> Vec<Square> {
    let mut buf = Vec::with_capacity(28);
    let mut seen = [[false; 8]; 8];
    for (from, _) in board.pieces(by) {
        pseudo_moves_into(board, from, true, &mut buf);
        for sq in &buf {
            seen[sq.row() as usize][sq.col() as usize] = true;
        }
    }
    Square::all()
        .filter(|sq| seen[sq.row() as usize][sq.col() as usize])
        .collect()
}

pub fn king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(ksq) => square_is_attacked(board, ksq, color.other()),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
