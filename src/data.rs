use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// The tile value that marks the empty cell.
pub const EMPTY: u8 = 0;

/// Tiles are stored as `u8` so a board can't have more cells than that.
pub const MAX_CELLS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos {
            r: r as i32,
            c: c as i32,
        }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u32
    }

    pub fn neighbors(self) -> [Pos; 4] {
        [self + UP, self + RIGHT, self + DOWN, self + LEFT]
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dir {
    pub r: i32,
    pub c: i32,
}

pub const UP: Dir = Dir { r: -1, c: 0 };
pub const RIGHT: Dir = Dir { r: 0, c: 1 };
pub const DOWN: Dir = Dir { r: 1, c: 0 };
pub const LEFT: Dir = Dir { r: 0, c: -1 };
pub const DIRECTIONS: [Dir; 4] = [UP, RIGHT, DOWN, LEFT];

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos {
            r: self.r + dir.r,
            c: self.c + dir.c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist() {
        assert_eq!(Pos::new(0, 0).dist(Pos::new(2, 1)), 3);
        assert_eq!(Pos::new(2, 1).dist(Pos::new(0, 0)), 3);
        assert_eq!(Pos::new(1, 1).dist(Pos::new(1, 1)), 0);
    }

    #[test]
    fn neighbors_can_leave_the_board() {
        let neighbors = Pos::new(0, 0).neighbors();
        assert_eq!(neighbors[0], Pos { r: -1, c: 0 });
        assert_eq!(neighbors[1], Pos::new(0, 1));
        assert_eq!(neighbors[2], Pos::new(1, 0));
        assert_eq!(neighbors[3], Pos { r: 0, c: -1 });
    }
}
