use crate::board::{Board, Move};
use crate::heuristic::{full_heuristic, incremental_heuristic, GoalIndex};

/// Index of a node in its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One puzzle configuration plus its search bookkeeping.
///
/// `cost == moves + heuristic` always holds; the fields are private so it
/// cannot drift.
#[derive(Debug, Clone)]
pub struct StateNode {
    board: Board,
    blank: usize,
    moves: u32,
    heuristic: u32,
    cost: u32,
    parent: Option<NodeId>,
    last_move: Option<Move>,
}

impl StateNode {
    /// Root of a search: heuristic computed over the whole board.
    pub fn root(board: Board, blank: usize, goal: &GoalIndex) -> Self {
        let heuristic = full_heuristic(&board, goal);
        Self {
            board,
            blank,
            moves: 0,
            heuristic,
            cost: heuristic,
            parent: None,
            last_move: None,
        }
    }

    /// Successor reached by sliding the blank of `parent` in direction `mv`.
    /// Returns `None` when the move leaves the grid.
    pub fn child(
        parent_id: NodeId,
        parent: &StateNode,
        mv: Move,
        goal: &GoalIndex,
    ) -> Option<Self> {
        let old_pos = parent.board.neighbour(parent.blank, mv)?;
        let new_pos = parent.blank;
        let moved_tile = parent.board.tiles()[old_pos];
        let heuristic =
            incremental_heuristic(parent.heuristic, moved_tile, old_pos, new_pos, goal);
        let moves = parent.moves + 1;
        Some(Self {
            board: parent.board.with_swap(new_pos, old_pos),
            blank: old_pos,
            moves,
            heuristic,
            cost: moves + heuristic,
            parent: Some(parent_id),
            last_move: Some(mv),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn blank_index(&self) -> usize {
        self.blank
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Move that produced this node; `None` for the root.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

/// Successors of `node` in fixed order: down, up, right, left.
///
/// Corners yield two children, edges three, interior cells four.
pub fn generate_children(node_id: NodeId, node: &StateNode, goal: &GoalIndex) -> Vec<StateNode> {
    Move::ALL
        .iter()
        .filter_map(|&mv| StateNode::child(node_id, node, mv, goal))
        .collect()
}

/// Owner of every node created during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<StateNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: StateNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &StateNode {
        &self.nodes[id.0]
    }

    /// Trace the parent chain from `terminal` back to the root, returning
    /// ids in root-to-terminal order.
    pub fn path_to(&self, terminal: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(terminal);
        while let Some(id) = current {
            path.push(id);
            current = self.get(id).parent;
        }
        path.reverse();
        path
    }

    /// Moves applied along the path to `terminal`, first move first.
    pub fn moves_to(&self, terminal: NodeId) -> Vec<Move> {
        self.path_to(terminal)
            .into_iter()
            .filter_map(|id| self.get(id).last_move)
            .collect()
    }

    /// Boards along the path to `terminal`, root included.
    pub fn boards_to(&self, terminal: NodeId) -> Vec<Board> {
        self.path_to(terminal)
            .into_iter()
            .map(|id| self.get(id).board.clone())
            .collect()
    }
}
