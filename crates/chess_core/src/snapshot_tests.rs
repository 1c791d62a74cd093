use super::*;
use crate::game::GameStatus;

fn sq(row: u8, col: u8) -> Square {
    Square::at(row, col)
}

#[test]
fn test_startpos_json_shape() {
    let snap = Game::new().snapshot();
    let json = snap.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["turn"], "white");
    assert_eq!(value["game_board"][0][0], serde_json::json!(["r", 5, 0]));
    assert_eq!(value["game_board"][0][1], serde_json::json!(["kn", 2, 0]));
    assert_eq!(value["game_board"][7][4], serde_json::json!(["ki", 1, 1]));
    assert_eq!(value["game_board"][4][4], serde_json::json!([0, 0, 3]));
    assert_eq!(value["moved"], serde_json::json!([]));
}

#[test]
fn test_round_trip_reproduces_every_square() {
    let mut game = Game::new();
    for (from, to) in [
        ((1, 4), (3, 4)),
        ((6, 3), (4, 3)),
        ((3, 4), (4, 3)),
        ((7, 3), (4, 3)),
        ((0, 6), (2, 5)),
    ] {
        game.make_move(sq(from.0, from.1), sq(to.0, to.1)).unwrap();
    }

    let json = game.snapshot().to_json().unwrap();
    let restored = Game::from_snapshot(&Snapshot::from_json(&json).unwrap(), GameConfig::default())
        .unwrap();

    for s in Square::all() {
        assert_eq!(game.piece_at(s), restored.piece_at(s), "mismatch on {s}");
    }
    assert_eq!(restored.turn(), game.turn());
}

#[test]
fn test_import_without_moved_list_infers_flags() {
    let json = Game::new().snapshot().to_json().unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value.as_object_mut().unwrap().remove("moved");
    // move the e2 pawn to e4 by hand
    value["game_board"][3][4] = serde_json::json!(["p", 1, 0]);
    value["game_board"][1][4] = serde_json::json!([0, 0, 3]);

    let snap: Snapshot = serde_json::from_value(value).unwrap();
    let board = snap.to_board().unwrap();

    assert!(board.piece_at(sq(3, 4)).unwrap().has_moved);
    assert!(!board.piece_at(sq(1, 3)).unwrap().has_moved);
    assert!(!board.piece_at(sq(0, 4)).unwrap().has_moved);
}

#[test]
fn test_import_rejects_bad_cells() {
    let mut snap = Game::new().snapshot();
    snap.game_board[4][4] = Cell(Sign::Piece("x".into()), 0, 0);
    assert!(matches!(
        snap.to_board(),
        Err(SnapshotError::UnknownSign { row: 4, col: 4, .. })
    ));

    let mut snap = Game::new().snapshot();
    snap.game_board[4][4] = Cell(Sign::Piece("q".into()), 1, 2);
    assert!(matches!(
        snap.to_board(),
        Err(SnapshotError::BadColor { tag: 2, .. })
    ));
}

#[test]
fn test_import_requires_one_king_each() {
    let mut snap = Game::new().snapshot();
    snap.game_board[7][4] = Cell::EMPTY;
    assert!(matches!(
        snap.to_board(),
        Err(SnapshotError::KingCount {
            color: Color::Black,
            count: 0
        })
    ));
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(matches!(
        Snapshot::from_json("{\"game_board\": 3}"),
        Err(SnapshotError::Json(_))
    ));
}

#[test]
fn test_terminal_snapshot_restores_status() {
    let mut snap = Game::new().snapshot();
    for row in snap.game_board.iter_mut() {
        for cell in row.iter_mut() {
            *cell = Cell::EMPTY;
        }
    }
    snap.turn = Color::Black;
    snap.moved = None;
    snap.game_board[7][0] = Cell(Sign::Piece("ki".into()), 1, 1);
    snap.game_board[6][1] = Cell(Sign::Piece("r".into()), 5, 0);
    snap.game_board[6][2] = Cell(Sign::Piece("ki".into()), 1, 0);

    let game = Game::from_snapshot(&snap, GameConfig::default()).unwrap();
    assert_eq!(game.status(), GameStatus::StalemateDraw);
}
