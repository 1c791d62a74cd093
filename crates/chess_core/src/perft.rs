use crate::game::Game;

/// Pure perft node count.
/// Counts all legal move sequences of length `depth` from the current position.
/// Finished games are leaves; pawns only ever promote to a queen.
pub fn perft(game: &Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if game.is_over() {
        return 0;
    }

    let moves = game.action_space();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = game.clone();
        if child.play(mv).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}
