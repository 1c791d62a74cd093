use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let game = Game::new();

    let result = engine.search(&game);

    let mv = result.best_move.expect("start position has moves");
    assert!(game.action_space().contains(&mv));
}

#[test]
fn random_engine_is_reproducible_with_seed() {
    let game = Game::new();
    let picks = |seed| {
        let mut engine = RandomEngine::with_seed(seed);
        (0..5)
            .map(|_| engine.search(&game).best_move)
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(11), picks(11));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let game =
        Game::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    let result = engine.search(&game);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let game = Game::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    let result = engine.search(&game);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_has_no_move_after_move_limit() {
    let mut engine = RandomEngine::with_seed(5);
    let mut game = Game::with_config(chess_core::GameConfig { max_plies: 1 });
    game.make_move(chess_core::Square::at(1, 4), chess_core::Square::at(3, 4))
        .unwrap();
    assert!(game.is_over());

    assert!(engine.search(&game).best_move.is_none());
}
