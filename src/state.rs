use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use fnv::FnvHasher;

use crate::data::{Pos, DIRECTIONS, EMPTY, MAX_CELLS};
use crate::rules::Goal;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    Empty,
    TooLarge,
    NotRectangular(usize),
    NoEmpty,
    MultipleEmpty,
    InvalidTile(u8),
    DuplicateTile(u8),
    TileNotFound(u8),
    IllegalMove(Pos),
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::Empty => write!(f, "Board has no cells"),
            BoardErr::TooLarge => write!(f, "Board has more than {} cells", MAX_CELLS),
            BoardErr::NotRectangular(row) => {
                write!(f, "Row {} has a different length than the first row", row)
            }
            BoardErr::NoEmpty => write!(f, "No empty cell ({})", EMPTY),
            BoardErr::MultipleEmpty => write!(f, "More than one empty cell ({})", EMPTY),
            BoardErr::InvalidTile(tile) => {
                write!(f, "Tile {} is out of range for this board size", tile)
            }
            BoardErr::DuplicateTile(tile) => write!(f, "Tile {} appears more than once", tile),
            BoardErr::TileNotFound(tile) => write!(f, "Tile {} is not on the board", tile),
            BoardErr::IllegalMove(pos) => {
                write!(f, "Can't move the empty cell to {} - not adjacent", pos)
            }
        }
    }
}

impl Error for BoardErr {}

/// Content hash of a board's grid, used to detect already visited boards.
///
/// Two boards with the same tiles have the same fingerprint no matter how many moves
/// it took to reach them. Distinct grids could in theory collide (64 bits of FNV-1a),
/// the search would then treat them as the same board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// An immutable sliding puzzle board and the number of moves it took to reach it.
///
/// Equality and hashing only look at the tiles, not the move count.
#[derive(Clone)]
pub struct Board {
    tiles: Vec2d<u8>,
    empty: Pos,
    moves: u32,
}

impl Board {
    pub fn new(grid: Vec<Vec<u8>>) -> Result<Board, BoardErr> {
        Board::with_moves(grid, 0)
    }

    pub fn with_moves(grid: Vec<Vec<u8>>, moves: u32) -> Result<Board, BoardErr> {
        let cols = grid.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(BoardErr::Empty);
        }
        for (r, row) in grid.iter().enumerate() {
            if row.len() != cols {
                return Err(BoardErr::NotRectangular(r));
            }
        }
        if grid.len() * cols > MAX_CELLS {
            return Err(BoardErr::TooLarge);
        }

        let tiles = Vec2d::new(&grid);
        let cells = tiles.cells().len();

        let mut empty = None;
        let mut seen = vec![false; cells];
        for pos in tiles.positions() {
            let tile = tiles[pos];
            if tile == EMPTY {
                if empty.is_some() {
                    return Err(BoardErr::MultipleEmpty);
                }
                empty = Some(pos);
            } else if usize::from(tile) >= cells {
                return Err(BoardErr::InvalidTile(tile));
            } else if seen[usize::from(tile)] {
                return Err(BoardErr::DuplicateTile(tile));
            }
            seen[usize::from(tile)] = true;
        }
        let empty = empty.ok_or(BoardErr::NoEmpty)?;

        Ok(Board {
            tiles,
            empty,
            moves,
        })
    }

    pub fn rows(&self) -> usize {
        self.tiles.rows()
    }

    pub fn cols(&self) -> usize {
        self.tiles.cols()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn tile(&self, pos: Pos) -> Option<u8> {
        self.tiles.get(pos).cloned()
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.tiles.to_rows()
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = (Pos, u8)> + '_ {
        self.tiles.positions().map(move |pos| (pos, self.tiles[pos]))
    }

    pub fn find_tile(&self, tile: u8) -> Result<Pos, BoardErr> {
        self.tiles
            .positions()
            .find(|&pos| self.tiles[pos] == tile)
            .ok_or(BoardErr::TileNotFound(tile))
    }

    pub fn find_empty(&self) -> Pos {
        self.empty
    }

    pub fn is_goal<G: Goal + ?Sized>(&self, goal: &G) -> bool {
        goal.is_goal(self)
    }

    pub fn coord_valid(&self, pos: Pos) -> bool {
        self.tiles.contains(pos)
    }

    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        pos.neighbors()
            .iter()
            .cloned()
            .filter(|&n| self.coord_valid(n))
            .collect()
    }

    /// Positions the empty cell can move to.
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.neighbors(self.empty)
    }

    /// Returns a new board with the empty cell swapped with the tile at `pos`.
    pub fn move_empty_to(&self, pos: Pos) -> Result<Board, BoardErr> {
        if !self.coord_valid(pos) || self.empty.dist(pos) != 1 {
            return Err(BoardErr::IllegalMove(pos));
        }
        Ok(self.slide(pos))
    }

    fn slide(&self, pos: Pos) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.empty, pos);
        Board {
            tiles,
            empty: pos,
            moves: self.moves + 1,
        }
    }

    /// Every board reachable by one move. Each direction gives a different board
    /// so there are never duplicates.
    pub fn successors(&self) -> Vec<Board> {
        let mut new_boards = Vec::with_capacity(DIRECTIONS.len());
        for &dir in &DIRECTIONS {
            let pos = self.empty + dir;
            if self.coord_valid(pos) {
                new_boards.push(self.slide(pos));
            }
        }
        new_boards
    }

    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = FnvHasher::default();
        hasher.write_usize(self.rows());
        hasher.write_usize(self.cols());
        hasher.write(self.tiles.cells());
        Fingerprint(hasher.finish())
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tiles)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "moves: {}", self.moves)?;
        write!(f, "{}", self.tiles)
    }
}
