use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major grid. Indexing with a `Pos` outside the grid panics, use `get` or `contains` first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < self.rows && (pos.c as usize) < self.cols
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self[pos])
        } else {
            None
        }
    }

    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        let (a, b) = (self.index_of(a), self.index_of(b));
        self.data.swap(a, b);
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.data.len()).map(move |i| Pos::new(i / cols, i % cols))
    }

    pub(crate) fn cells(&self) -> &[T] {
        &self.data
    }

    fn index_of(&self, pos: Pos) -> usize {
        assert!(self.contains(pos), "{} is outside the grid", pos);
        pos.r as usize * self.cols + pos.c as usize
    }
}

impl<T: Clone> Vec2d<T> {
    /// Caller guarantees the rows are non-empty and all the same length.
    pub(crate) fn new(grid: &[Vec<T>]) -> Self {
        let cols = grid.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(grid.len() * cols);
        for row in grid {
            data.extend_from_slice(row);
        }
        Vec2d {
            data,
            rows: grid.len(),
            cols,
        }
    }

    pub(crate) fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|cell| cell.to_string().len())
            .max()
            .unwrap_or(1);
        for row in self.data.chunks(self.cols) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", cell, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}
