// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod config;
pub mod data;
pub mod parser;
pub mod report;
pub mod rules;
pub mod solver;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;

pub use crate::config::{GoalKind, Heuristic, Method};

use crate::rules::GoalLayout;
use crate::solver::{SearchResult, SolverErr};
use crate::state::Board;

pub trait LoadBoard {
    fn load_board(&self) -> Result<Board, Box<dyn Error>>;
}

impl LoadBoard for str {
    fn load_board(&self) -> Result<Board, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(text.parse()?)
    }
}

pub trait Solve {
    fn solve(
        &self,
        method: Method,
        goal: &GoalLayout,
        print_status: bool,
    ) -> Result<SearchResult, SolverErr>;
}
