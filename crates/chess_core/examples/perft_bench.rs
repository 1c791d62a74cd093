//! Perft benchmark for profiling.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]

use chess_core::{perft, Game};
use std::env;
use std::time::Instant;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    let positions: Vec<(&str, &str)> = match args.get(2) {
        Some(fen) => vec![("Custom", fen.as_str())],
        None => TEST_POSITIONS.to_vec(),
    };

    println!("=== Perft Benchmark ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, fen) in positions {
        let game = match Game::from_fen(fen) {
            Ok(game) => game,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<30}");
        let start = Instant::now();
        let nodes = perft(&game, depth);
        let elapsed = start.elapsed();
        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        println!(" {nodes:>10} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?}");
}
