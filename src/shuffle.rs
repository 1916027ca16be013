use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Move};

/// Uniformly shuffle the tiles of `goal`, retrying until the result can
/// reach `goal`.
pub fn random_solvable<R: Rng + ?Sized>(goal: &Board, rng: &mut R) -> Board {
    let mut tiles = goal.tiles().to_vec();
    loop {
        tiles.shuffle(rng);
        let board = Board::from_tiles(goal.side(), tiles.clone());
        if board.is_solvable_towards(goal) {
            return board;
        }
    }
}

/// Apply `steps` random legal moves to `goal`, never undoing the previous one.
pub fn random_walk<R: Rng + ?Sized>(goal: &Board, steps: usize, rng: &mut R) -> Board {
    let mut board = goal.clone();
    let mut last: Option<Move> = None;
    for _ in 0..steps {
        let legal: Vec<Move> = Move::ALL
            .into_iter()
            .filter(|&mv| last.map_or(true, |prev| mv != prev.opposite()))
            .filter(|&mv| {
                board
                    .blank_index()
                    .and_then(|blank| board.neighbour(blank, mv))
                    .is_some()
            })
            .collect();
        let Some(&mv) = legal.choose(rng) else {
            break;
        };
        board.apply_move(mv);
        last = Some(mv);
    }
    board
}
