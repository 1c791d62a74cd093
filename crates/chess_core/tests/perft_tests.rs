use std::time::Instant;

use rayon::prelude::*;

use chess_core::{perft, Game};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 100_000;

// Promotions only ever produce a queen, so the reference counts below are
// taken at depths where no promotion is reachable.
const CASES: &[(&str, &[(u8, u64)])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281), (5, 4_865_609)],
    ),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        &[(1, 48), (2, 2_039), (3, 97_862)],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238), (5, 674_624)],
    ),
];

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().enumerate().for_each(|(idx, (fen, depths))| {
        let game = Game::from_fen(fen)
            .unwrap_or_else(|e| panic!("Invalid FEN '{}': {}", fen, e));
        let mut ran_depths = Vec::new();
        let mut total_nodes: u64 = 0;
        let case_start = Instant::now();

        for &(depth, expected) in depths.iter() {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for case {} (expected {} nodes); set {}=1 to run all.",
                    depth,
                    idx + 1,
                    expected,
                    FULL_PERFT_ENV
                );
                continue;
            }
            let got = perft(&game, depth);
            assert!(
                got == expected,
                "Perft mismatch for FEN '{}' at depth {}: expected {}, got {}",
                fen,
                depth,
                expected,
                got
            );

            ran_depths.push(depth);
            total_nodes += got;
        }

        println!(
            "Case {:02} done: depths {:?}, total nodes {}, elapsed {:.3?}",
            idx + 1,
            ran_depths,
            total_nodes,
            case_start.elapsed()
        );
    });
}

#[test]
fn perft_of_finished_game_is_zero() {
    // fool's mate, White to move and mated
    let game = Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
        .unwrap();
    assert!(game.is_over());
    assert_eq!(perft(&game, 0), 1);
    assert_eq!(perft(&game, 1), 0);
    assert_eq!(perft(&game, 3), 0);
}
