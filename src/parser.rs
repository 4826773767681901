use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::state::{Board, BoardErr};

#[derive(Debug, PartialEq)]
pub enum ParserErr {
    Pos(usize, usize),
    Board(BoardErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid tile at pos: [{}, {}]", r, c),
            ParserErr::Board(err) => write!(f, "Invalid board: {}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<BoardErr> for ParserErr {
    fn from(err: BoardErr) -> Self {
        ParserErr::Board(err)
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// One row per line, tiles separated by whitespace, 0 is the empty cell.
pub(crate) fn parse(board: &str) -> Result<Board, ParserErr> {
    // trim so we can specify boards using raw strings more easily
    let board = board.trim_matches('\n').trim_end();

    let mut grid = Vec::new();
    for (r, line) in board.lines().enumerate() {
        let mut row = Vec::new();
        for (c, token) in line.split_whitespace().enumerate() {
            let tile = token.parse::<u8>().map_err(|_| ParserErr::Pos(r, c))?;
            row.push(tile);
        }
        grid.push(row);
    }

    Ok(Board::new(grid)?)
}
