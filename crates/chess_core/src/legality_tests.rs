use super::*;

fn sq(row: u8, col: u8) -> Square {
    Square::at(row, col)
}

#[test]
fn test_startpos_action_space() {
    let board = Board::startpos();
    assert_eq!(action_space(&board, Color::White).len(), 20);
    assert_eq!(action_space(&board, Color::Black).len(), 20);
}

#[test]
fn test_classify_special_moves() {
    let mut board = Board::empty();
    board.set_piece(sq(0, 4), Some(Piece::new(Color::White, PieceKind::King)));
    board.set_piece(sq(4, 4), Some(Piece::new(Color::White, PieceKind::Pawn).moved()));
    board.set_piece(sq(4, 5), Some(Piece::new(Color::Black, PieceKind::Pawn).moved()));
    board.set_piece(sq(5, 3), Some(Piece::new(Color::Black, PieceKind::Rook)));

    assert_eq!(classify(&board, sq(0, 4), sq(0, 6)), Some(SpecialMove::CastleKingside));
    assert_eq!(classify(&board, sq(0, 4), sq(0, 2)), Some(SpecialMove::CastleQueenside));
    assert_eq!(classify(&board, sq(0, 4), sq(0, 5)), None);
    assert_eq!(classify(&board, sq(4, 4), sq(5, 5)), Some(SpecialMove::EnPassant));
    // diagonal onto an occupied square is an ordinary capture
    assert_eq!(classify(&board, sq(4, 4), sq(5, 3)), None);
    assert_eq!(classify(&board, sq(4, 4), sq(5, 4)), None);
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let mut board = Board::empty();
    board.set_piece(sq(0, 4), Some(Piece::new(Color::White, PieceKind::King)));
    board.set_piece(sq(1, 4), Some(Piece::new(Color::White, PieceKind::Knight)));
    board.set_piece(sq(7, 4), Some(Piece::new(Color::Black, PieceKind::Rook)));
    board.set_piece(sq(7, 0), Some(Piece::new(Color::Black, PieceKind::King)));

    assert!(!pseudo_moves(&board, sq(1, 4), false).is_empty());
    assert!(legal_moves(&board, sq(1, 4)).is_empty());
}

#[test]
fn test_king_cannot_step_into_attack_or_take_defended_piece() {
    let mut board = Board::empty();
    board.set_piece(sq(0, 4), Some(Piece::new(Color::White, PieceKind::King)));
    board.set_piece(sq(1, 4), Some(Piece::new(Color::Black, PieceKind::Pawn).moved()));
    board.set_piece(sq(2, 4), Some(Piece::new(Color::Black, PieceKind::King)));

    let moves = legal_moves(&board, sq(0, 4));
    // the pawn on e2 is defended by the king, and d1/f1 are hit by the pawn
    assert!(!moves.contains(&sq(1, 4)));
    assert!(!moves.contains(&sq(0, 3)));
    assert!(!moves.contains(&sq(0, 5)));
    assert!(!moves.contains(&sq(1, 3)));
    assert!(!moves.contains(&sq(1, 5)));
    assert!(moves.is_empty());
}

#[test]
fn test_check_must_be_answered() {
    let mut board = Board::empty();
    board.set_piece(sq(0, 4), Some(Piece::new(Color::White, PieceKind::King)));
    board.set_piece(sq(0, 0), Some(Piece::new(Color::White, PieceKind::Rook).moved()));
    board.set_piece(sq(7, 4), Some(Piece::new(Color::Black, PieceKind::Rook)));
    board.set_piece(sq(7, 7), Some(Piece::new(Color::Black, PieceKind::King)));

    let moves = action_space(&board, Color::White);
    for mv in &moves {
        let after = after_move(&board, mv.from, mv.to);
        assert!(!king_in_check(&after, Color::White), "{mv} leaves king in check");
    }
    // the rook may not wander off while the king is in check
    assert!(!moves.contains(&Move::new(sq(0, 0), sq(3, 0))));
    assert!(!moves.is_empty());
}

#[test]
fn test_en_passant_that_exposes_king_is_illegal() {
    // king and enemy rook share the fifth row with both pawns between them
    let mut board = Board::empty();
    board.set_piece(sq(4, 0), Some(Piece::new(Color::White, PieceKind::King).moved()));
    board.set_piece(sq(4, 1), Some(Piece::new(Color::White, PieceKind::Pawn).moved()));
    board.set_piece(sq(6, 2), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    board.set_piece(sq(4, 7), Some(Piece::new(Color::Black, PieceKind::Rook)));
    board.set_piece(sq(7, 7), Some(Piece::new(Color::Black, PieceKind::King)));
    board.apply_move(sq(6, 2), sq(4, 2), None);

    assert!(pseudo_moves(&board, sq(4, 1), false).contains(&sq(5, 2)));
    assert!(!legal_moves(&board, sq(4, 1)).contains(&sq(5, 2)));
}

#[test]
fn test_castling_through_attacked_square_excluded() {
    let mut board = Board::empty();
    board.set_piece(sq(0, 4), Some(Piece::new(Color::White, PieceKind::King)));
    board.set_piece(sq(0, 7), Some(Piece::new(Color::White, PieceKind::Rook)));
    board.set_piece(sq(0, 0), Some(Piece::new(Color::White, PieceKind::Rook)));
    board.set_piece(sq(7, 4), Some(Piece::new(Color::Black, PieceKind::King)));
    board.set_piece(sq(7, 3), Some(Piece::new(Color::Black, PieceKind::Rook)));

    let moves = action_space(&board, Color::White);
    // d1 is attacked, so queenside is out; kingside is fine
    assert!(!moves.contains(&Move::new(sq(0, 4), sq(0, 2))));
    assert!(moves.contains(&Move::new(sq(0, 4), sq(0, 6))));
}

#[test]
fn test_has_legal_move_agrees_with_action_space() {
    let board = Board::startpos();
    assert!(has_legal_move(&board, Color::White));

    let mut board = Board::empty();
    board.set_piece(sq(7, 0), Some(Piece::new(Color::Black, PieceKind::King)));
    board.set_piece(sq(6, 1), Some(Piece::new(Color::White, PieceKind::Rook)));
    board.set_piece(sq(6, 2), Some(Piece::new(Color::White, PieceKind::King)));
    assert!(!has_legal_move(&board, Color::Black));
    assert!(action_space(&board, Color::Black).is_empty());
}
