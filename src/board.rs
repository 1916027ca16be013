use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

/// Direction the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Down,
    Up,
    Right,
    Left,
}

impl Move {
    /// Expansion order used by the search.
    pub const ALL: [Move; 4] = [Move::Down, Move::Up, Move::Right, Move::Left];

    /// `(row, col)` offset applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Down => (1, 0),
            Move::Up => (-1, 0),
            Move::Right => (0, 1),
            Move::Left => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Down => "Down",
            Move::Up => "Up",
            Move::Right => "Right",
            Move::Left => "Left",
        };
        write!(f, "{}", s)
    }
}

/// Canonical, exact encoding of a board used as a hash key.
///
/// Boards whose tiles fit in 128 bits (everything up to 5x5) are packed
/// into a single integer; anything larger keeps a copy of the tiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Signature {
    Packed(u128),
    Wide(Box<[u16]>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    side: usize,
    tiles: Vec<u16>,
}

impl Board {
    /// Flatten nested rows. The side length is the number of rows.
    pub fn from_rows<R: AsRef<[u16]>>(rows: &[R]) -> Self {
        let tiles = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Self {
            side: rows.len(),
            tiles,
        }
    }

    pub fn from_tiles(side: usize, tiles: Vec<u16>) -> Self {
        Self { side, tiles }
    }

    /// `1, 2, .., N²-1` in reading order with the blank in the last cell.
    pub fn standard_goal(side: usize) -> Self {
        let len = side * side;
        let tiles = (0..len)
            .map(|i| if i == len - 1 { 0 } else { (i + 1) as u16 })
            .collect();
        Self { side, tiles }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Linear index of the blank, if the board has one.
    pub fn blank_index(&self) -> Option<usize> {
        self.tiles.iter().position(|&t| t == 0)
    }

    pub fn rows(&self) -> Vec<Vec<u16>> {
        if self.side == 0 {
            return Vec::new();
        }
        self.tiles.chunks(self.side).map(<[u16]>::to_vec).collect()
    }

    /// Index reached by moving from `index` in direction `mv`, if in bounds.
    pub fn neighbour(&self, index: usize, mv: Move) -> Option<usize> {
        let (dr, dc) = mv.as_offset();
        let row = (index / self.side) as isize + dr;
        let col = (index % self.side) as isize + dc;
        let side = self.side as isize;
        if row >= 0 && row < side && col >= 0 && col < side {
            Some(row as usize * self.side + col as usize)
        } else {
            None
        }
    }

    /// Copy of this board with the cells at `a` and `b` exchanged.
    pub fn with_swap(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Self {
            side: self.side,
            tiles,
        }
    }

    /// Slide the blank one cell. Returns `false` (and leaves the board
    /// untouched) when the move would leave the grid.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        let Some(blank) = self.blank_index() else {
            return false;
        };
        match self.neighbour(blank, mv) {
            Some(target) => {
                self.tiles.swap(blank, target);
                true
            }
            None => false,
        }
    }

    pub fn signature(&self) -> Signature {
        let len = self.tiles.len();
        let bits = (usize::BITS - len.saturating_sub(1).leading_zeros()).max(1);
        if len as u32 * bits <= u128::BITS {
            let key = self
                .tiles
                .iter()
                .fold(0u128, |key, &tile| (key << bits) | u128::from(tile));
            Signature::Packed(key)
        } else {
            Signature::Wide(self.tiles.clone().into_boxed_slice())
        }
    }

    /// Whether sliding moves can turn `self` into `goal`.
    ///
    /// Tiles are relabelled by their goal position, so the goal itself has
    /// no inversions. A horizontal move never changes inversion parity; a
    /// vertical one flips it exactly when the side is even, and also moves
    /// the blank one row.
    pub fn is_solvable_towards(&self, goal: &Board) -> bool {
        if self.side == 0 || goal.side == 0 {
            return self.tiles == goal.tiles;
        }

        let mut goal_index = vec![0usize; goal.len()];
        for (idx, &tile) in goal.tiles.iter().enumerate() {
            if let Some(slot) = goal_index.get_mut(tile as usize) {
                *slot = idx;
            }
        }

        let relabelled: Vec<usize> = self
            .tiles
            .iter()
            .filter(|&&t| t != 0)
            .map(|&t| goal_index.get(t as usize).copied().unwrap_or_default())
            .collect();
        let inversions = count_inversions(&relabelled);

        if self.side % 2 == 1 {
            inversions % 2 == 0
        } else {
            let row_of = |board: &Board| board.blank_index().unwrap_or_default() / board.side;
            (inversions + row_of(self) + row_of(goal)) % 2 == 0
        }
    }
}

/// Read a board from text. Rows are separated by `/` or newlines, tiles by
/// whitespace or commas. Only the shape is checked, not the tile values.
pub fn parse_board(text: &str) -> Result<Board, PuzzleError> {
    let rows = text
        .split(|c: char| c == '/' || c == '\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token.parse::<u16>().map_err(|_| PuzzleError::Parse {
                        row,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<u16>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let expected = rows.len();
    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(PuzzleError::Ragged {
            row,
            found,
            expected,
        });
    }
    Ok(Board::from_rows(&rows))
}

fn count_inversions(values: &[usize]) -> usize {
    values
        .iter()
        .enumerate()
        .map(|(i, &val)| values[i + 1..].iter().filter(|&&next| next < val).count())
        .sum()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
