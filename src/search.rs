use serde::Serialize;

use crate::board::{Board, Move};
use crate::config::SolverConfig;
use crate::frontier::Frontier;
use crate::heuristic::GoalIndex;
use crate::node::{generate_children, NodeArena, StateNode};
use crate::visited::VisitedSet;

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expanded: u64,
    /// Children pushed onto the frontier.
    pub generated: u64,
    /// Pops discarded because their board had already been expanded.
    pub stale_pops: u64,
    /// Distinct boards in the closed set when the search ended.
    pub closed: u64,
    pub max_frontier: u64,
}

/// A minimum-length path from start to goal.
#[derive(Debug, Clone)]
pub struct Solution {
    pub moves: u32,
    /// Direction the blank travels at each step.
    pub path: Vec<Move>,
    /// Start board through goal board, `moves + 1` entries.
    pub boards: Vec<Board>,
    pub stats: SearchStats,
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Solved(Solution),
    /// The frontier emptied without reaching the goal.
    Exhausted(SearchStats),
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::Exhausted(_) => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::Exhausted(_) => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Solved(solution) => &solution.stats,
            SearchOutcome::Exhausted(stats) => stats,
        }
    }
}

/// A* driver. Every call to [`SearchEngine::solve`] builds its own frontier,
/// closed set and node arena, so one engine can serve many searches.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SolverConfig,
}

impl SearchEngine {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Find a minimum-move sequence turning `start` into `goal`.
    ///
    /// Boards are not validated. A start board without a blank cannot move
    /// and is reported as exhausted.
    pub fn solve(&self, start: &Board, goal: &Board) -> SearchOutcome {
        let mut stats = SearchStats::default();
        let Some(blank) = start.blank_index() else {
            tracing::warn!(side = start.side(), "start board has no blank; nothing to search");
            return SearchOutcome::Exhausted(stats);
        };

        let goal_index = GoalIndex::new(goal);
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut visited = VisitedSet::new();

        let root = StateNode::root(start.clone(), blank, &goal_index);
        tracing::info!(
            side = start.side(),
            initial_heuristic = root.heuristic(),
            "Starting A* search"
        );
        frontier.push(root.cost(), arena.insert(root));

        let progress_interval = self.config.progress_interval.max(1);

        while let Some(entry) = frontier.pop() {
            let node = arena.get(entry.node);

            if node.board() == goal {
                let moves = node.moves();
                stats.closed = visited.len() as u64;
                stats.max_frontier = frontier.high_water() as u64;
                tracing::info!(
                    moves,
                    expanded = stats.expanded,
                    generated = stats.generated,
                    max_frontier = stats.max_frontier,
                    "Solution found"
                );
                return SearchOutcome::Solved(Solution {
                    moves,
                    path: arena.moves_to(entry.node),
                    boards: arena.boards_to(entry.node),
                    stats,
                });
            }

            // Stale duplicate of an expanded board; never expanded a second time.
            if !visited.add(node.board().signature()) {
                stats.stale_pops += 1;
                continue;
            }
            stats.expanded += 1;

            tracing::trace!(
                cost = node.cost(),
                moves = node.moves(),
                heuristic = node.heuristic(),
                "Expanding node"
            );
            if stats.expanded % progress_interval == 0 {
                tracing::debug!(
                    expanded = stats.expanded,
                    frontier = frontier.len(),
                    closed = visited.len(),
                    cost = node.cost(),
                    "Search progress"
                );
            }

            let children = generate_children(entry.node, node, &goal_index);
            for child in children {
                if visited.contains(&child.board().signature()) {
                    continue;
                }
                let cost = child.cost();
                frontier.push(cost, arena.insert(child));
                stats.generated += 1;
            }
        }

        stats.closed = visited.len() as u64;
        stats.max_frontier = frontier.high_water() as u64;
        tracing::info!(
            expanded = stats.expanded,
            closed = stats.closed,
            "Frontier exhausted without reaching the goal"
        );
        SearchOutcome::Exhausted(stats)
    }
}
