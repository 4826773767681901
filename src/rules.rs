use crate::config::GoalKind;
use crate::data::{Pos, EMPTY, MAX_CELLS};
use crate::state::{Board, BoardErr};

/// Decides whether a board is solved.
pub trait Goal {
    fn is_goal(&self, board: &Board) -> bool;
}

impl<F> Goal for F
where
    F: Fn(&Board) -> bool,
{
    fn is_goal(&self, board: &Board) -> bool {
        self(board)
    }
}

/// Estimates the number of moves left to reach the goal - less is better.
///
/// A* only finds optimal solutions if the estimate never exceeds the real cost.
pub trait CostEstimator {
    fn estimate(&self, board: &Board) -> u32;
}

impl<F> CostEstimator for F
where
    F: Fn(&Board) -> u32,
{
    fn estimate(&self, board: &Board) -> u32 {
        self(board)
    }
}

/// A target arrangement of tiles.
#[derive(Debug, Clone)]
pub struct GoalLayout {
    target: Board,
    // indexed by tile
    positions: Vec<Pos>,
}

impl GoalLayout {
    pub fn new(target: Board) -> Self {
        let mut positions = vec![Pos::new(0, 0); target.rows() * target.cols()];
        for (pos, tile) in target.cells() {
            positions[usize::from(tile)] = pos;
        }
        GoalLayout { target, positions }
    }

    /// The empty cell in the top left corner followed by `1, 2, ...` in row-major order.
    pub fn empty_first(rows: usize, cols: usize) -> Result<Self, BoardErr> {
        if rows * cols > MAX_CELLS {
            return Err(BoardErr::TooLarge);
        }
        let grid = (0..rows)
            .map(|r| (0..cols).map(|c| (r * cols + c) as u8).collect())
            .collect();
        Ok(GoalLayout::new(Board::new(grid)?))
    }

    /// `1, 2, ...` in row-major order with the empty cell in the bottom right corner.
    pub fn empty_last(rows: usize, cols: usize) -> Result<Self, BoardErr> {
        let cells = rows * cols;
        if cells > MAX_CELLS {
            return Err(BoardErr::TooLarge);
        }
        let grid = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| ((r * cols + c + 1) % cells) as u8)
                    .collect()
            })
            .collect();
        Ok(GoalLayout::new(Board::new(grid)?))
    }

    pub fn from_kind(kind: GoalKind, rows: usize, cols: usize) -> Result<Self, BoardErr> {
        match kind {
            GoalKind::EmptyFirst => GoalLayout::empty_first(rows, cols),
            GoalKind::EmptyLast => GoalLayout::empty_last(rows, cols),
        }
    }

    pub fn target(&self) -> &Board {
        &self.target
    }

    pub fn rows(&self) -> usize {
        self.target.rows()
    }

    pub fn cols(&self) -> usize {
        self.target.cols()
    }

    pub fn goal_pos(&self, tile: u8) -> Option<Pos> {
        self.positions.get(usize::from(tile)).cloned()
    }

    /// Manhattan distance between where `tile` is on `board` and where it should be.
    pub fn tile_distance(&self, board: &Board, tile: u8) -> Result<u32, BoardErr> {
        let goal_pos = self.goal_pos(tile).ok_or(BoardErr::TileNotFound(tile))?;
        Ok(board.find_tile(tile)?.dist(goal_pos))
    }

    /// Number of tiles not at their goal position. The empty cell doesn't count.
    pub fn misplaced(&self, board: &Board) -> u32 {
        board
            .cells()
            .filter(|&(pos, tile)| tile != EMPTY && self.goal_pos(tile) != Some(pos))
            .count() as u32
    }

    /// Sum of manhattan distances of all tiles to their goal positions. The empty cell doesn't count.
    pub fn manhattan(&self, board: &Board) -> u32 {
        board
            .cells()
            .filter(|&(_, tile)| tile != EMPTY)
            .filter_map(|(pos, tile)| self.goal_pos(tile).map(|goal| pos.dist(goal)))
            .sum()
    }
}

impl Goal for GoalLayout {
    fn is_goal(&self, board: &Board) -> bool {
        *board == self.target
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MisplacedTiles<'a>(pub &'a GoalLayout);

impl CostEstimator for MisplacedTiles<'_> {
    fn estimate(&self, board: &Board) -> u32 {
        self.0.misplaced(board)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ManhattanDistance<'a>(pub &'a GoalLayout);

impl CostEstimator for ManhattanDistance<'_> {
    fn estimate(&self, board: &Board) -> u32 {
        self.0.manhattan(board)
    }
}
