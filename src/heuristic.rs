use crate::board::Board;

/// Lookup from tile value to the linear index it occupies in the goal.
#[derive(Debug, Clone)]
pub struct GoalIndex {
    side: usize,
    positions: Vec<usize>,
}

impl GoalIndex {
    pub fn new(goal: &Board) -> Self {
        let mut positions = vec![0; goal.len()];
        for (idx, &tile) in goal.tiles().iter().enumerate() {
            if let Some(slot) = positions.get_mut(tile as usize) {
                *slot = idx;
            }
        }
        Self {
            side: goal.side(),
            positions,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Goal position of `tile`. Tiles outside the board map to index 0.
    pub fn target(&self, tile: u16) -> usize {
        self.positions.get(tile as usize).copied().unwrap_or_default()
    }
}

/// Row plus column distance between two linear indices on a `side`-wide grid.
pub fn manhattan(side: usize, pos: usize, target: usize) -> u32 {
    let (row, col) = (pos / side, pos % side);
    let (t_row, t_col) = (target / side, target % side);
    (row.abs_diff(t_row) + col.abs_diff(t_col)) as u32
}

/// Sum of every non-blank tile's distance from its goal cell.
pub fn full_heuristic(board: &Board, goal: &GoalIndex) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|(_, &tile)| tile != 0)
        .map(|(idx, &tile)| manhattan(goal.side(), idx, goal.target(tile)))
        .sum()
}

/// Parent estimate adjusted for a single tile moving from `old_pos` to `new_pos`.
pub fn incremental_heuristic(
    parent_heuristic: u32,
    moved_tile: u16,
    old_pos: usize,
    new_pos: usize,
    goal: &GoalIndex,
) -> u32 {
    let target = goal.target(moved_tile);
    let side = goal.side();
    // Each step changes one tile's distance by exactly one, so this never underflows.
    parent_heuristic - manhattan(side, old_pos, target) + manhattan(side, new_pos, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn manhattan_on_three_by_three() {
        assert_eq!(manhattan(3, 0, 0), 0);
        assert_eq!(manhattan(3, 0, 8), 4);
        assert_eq!(manhattan(3, 2, 6), 4);
        assert_eq!(manhattan(3, 4, 5), 1);
    }

    #[test]
    fn goal_has_zero_heuristic() {
        let goal = Board::standard_goal(4);
        assert_eq!(full_heuristic(&goal, &GoalIndex::new(&goal)), 0);
    }

    #[test]
    fn full_heuristic_ignores_blank() {
        let goal = Board::standard_goal(3);
        let index = GoalIndex::new(&goal);
        let board = Board::from_rows(&[[1u16, 2, 3], [4, 0, 6], [7, 5, 8]]);
        // 5 and 8 are each one step away; the blank does not count.
        assert_eq!(full_heuristic(&board, &index), 2);
    }

    #[test]
    fn non_standard_goal_is_respected() {
        let goal = Board::from_rows(&[[0u16, 1], [2, 3]]);
        let index = GoalIndex::new(&goal);
        let board = Board::from_rows(&[[1u16, 2], [3, 0]]);
        assert_eq!(index.target(1), 1);
        // 1: 0 -> 1, 2: 1 -> 2, 3: 2 -> 3
        assert_eq!(full_heuristic(&board, &index), 1 + 2 + 1);
    }

    #[test]
    fn incremental_matches_full_after_move() {
        let goal = Board::standard_goal(3);
        let index = GoalIndex::new(&goal);
        let board = Board::from_rows(&[[1u16, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let parent_h = full_heuristic(&board, &index);

        for mv in Move::ALL {
            let blank = 4;
            let neighbour = board.neighbour(blank, mv).unwrap();
            let tile = board.tiles()[neighbour];
            let child = board.with_swap(blank, neighbour);
            let h = incremental_heuristic(parent_h, tile, neighbour, blank, &index);
            assert_eq!(h, full_heuristic(&child, &index), "move {mv}");
        }
    }
}
