//! End-to-end checks of the A* engine against a breadth-first oracle.

use std::collections::{HashMap, VecDeque};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use slider_astar::shuffle::{random_solvable, random_walk};
use slider_astar::{
    full_heuristic, generate_children, Board, GoalIndex, Move, NodeArena, SearchEngine,
    SearchOutcome, Signature, StateNode,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Shortest distance from `start` to `goal` by plain breadth-first search,
/// or `None` if the goal is unreachable.
fn bfs_distance(start: &Board, goal: &Board) -> Option<u32> {
    let mut depth: HashMap<Signature, u32> = HashMap::new();
    let mut queue = VecDeque::new();
    depth.insert(start.signature(), 0);
    queue.push_back(start.clone());

    while let Some(board) = queue.pop_front() {
        let d = depth[&board.signature()];
        if &board == goal {
            return Some(d);
        }
        for mv in Move::ALL {
            let mut next = board.clone();
            if next.apply_move(mv) && !depth.contains_key(&next.signature()) {
                depth.insert(next.signature(), d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

fn replay(start: &Board, path: &[Move]) -> Board {
    let mut board = start.clone();
    for &mv in path {
        assert!(board.apply_move(mv), "path contains an illegal move {mv}");
    }
    board
}

fn solve(start: &Board, goal: &Board) -> SearchOutcome {
    SearchEngine::default().solve(start, goal)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn identity_on_every_size() {
    for side in 2..=5 {
        let goal = Board::standard_goal(side);
        let solution = solve(&goal, &goal).into_solution().unwrap();
        assert_eq!(solution.moves, 0);
        assert!(solution.path.is_empty());
    }
}

#[test]
fn reference_example_matches_bfs() {
    let start = Board::from_rows(&[[1u16, 2, 3], [4, 0, 6], [7, 5, 8]]);
    let goal = Board::from_rows(&[[1u16, 2, 3], [4, 5, 6], [7, 8, 0]]);
    let solution = solve(&start, &goal).into_solution().unwrap();
    assert_eq!(Some(solution.moves), bfs_distance(&start, &goal));
    assert_eq!(replay(&start, &solution.path), goal);
}

#[test]
fn random_three_by_three_are_optimal() {
    let goal = Board::standard_goal(3);
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..5 {
        let start = random_solvable(&goal, &mut rng);
        let solution = solve(&start, &goal).into_solution().unwrap();
        assert_eq!(Some(solution.moves), bfs_distance(&start, &goal), "start:\n{start}");
        assert_eq!(replay(&start, &solution.path), goal);
        assert_eq!(solution.boards.len(), solution.moves as usize + 1);
        assert_eq!(solution.boards.first(), Some(&start));
    }
}

#[test]
fn arbitrary_goal_layout() {
    let goal = Board::from_rows(&[[0u16, 1, 2], [3, 4, 5], [6, 7, 8]]);
    let mut rng = StdRng::seed_from_u64(9);
    let start = random_walk(&goal, 30, &mut rng);
    let solution = solve(&start, &goal).into_solution().unwrap();
    assert_eq!(Some(solution.moves), bfs_distance(&start, &goal));
}

#[test]
fn unsolvable_three_by_three_exhausts() {
    let start = Board::from_rows(&[[2u16, 1, 3], [4, 5, 6], [7, 8, 0]]);
    let goal = Board::standard_goal(3);
    let outcome = solve(&start, &goal);
    assert!(!outcome.is_solved());
    // Half of the 9! permutations share the start's parity.
    assert_eq!(outcome.stats().closed, 181_440);
    assert_eq!(outcome.stats().expanded, outcome.stats().closed);
}

#[test]
fn four_by_four_random_walk() {
    let goal = Board::standard_goal(4);
    let mut rng = StdRng::seed_from_u64(77);
    let start = random_walk(&goal, 24, &mut rng);
    let solution = solve(&start, &goal).into_solution().unwrap();
    assert!(solution.moves <= 24);
    assert_eq!(solution.moves % 2, 0);
    assert_eq!(replay(&start, &solution.path), goal);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn incremental_heuristic_tracks_full(seed in any::<u64>(), steps in 0usize..60) {
        let goal = Board::standard_goal(4);
        let index = GoalIndex::new(&goal);
        let mut rng = StdRng::seed_from_u64(seed);
        let start = random_solvable(&goal, &mut rng);

        let mut arena = NodeArena::new();
        let root = StateNode::root(start.clone(), start.blank_index().unwrap(), &index);
        let mut current = arena.insert(root);

        for _ in 0..steps {
            let node = arena.get(current).clone();
            let children = generate_children(current, &node, &index);
            let child = children[rng.gen_range(0..children.len())].clone();
            prop_assert_eq!(child.heuristic(), full_heuristic(child.board(), &index));
            prop_assert_eq!(child.cost(), child.moves() + child.heuristic());
            current = arena.insert(child);
        }
    }

    #[test]
    fn solved_paths_replay_and_match_bfs(seed in any::<u64>(), steps in 0usize..20) {
        let goal = Board::standard_goal(3);
        let mut rng = StdRng::seed_from_u64(seed);
        let start = random_walk(&goal, steps, &mut rng);
        let solution = solve(&start, &goal).into_solution().unwrap();
        prop_assert!(solution.moves as usize <= steps);
        prop_assert_eq!(replay(&start, &solution.path), goal.clone());
        prop_assert_eq!(Some(solution.moves), bfs_distance(&start, &goal));
    }
}
