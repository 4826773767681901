mod a_star;
mod bfs;
mod iddfs;
mod stats;

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

use log::debug;

use crate::config::{Heuristic, Method};
use crate::rules::{GoalLayout, ManhattanDistance, MisplacedTiles};
use crate::state::Board;
use crate::Solve;

pub use self::a_star::a_star;
pub use self::bfs::bfs;
pub use self::iddfs::iddfs;
pub use self::stats::Stats;

/// How often (in iterations) the searches call their progress callback.
pub const PROGRESS_INTERVAL: u64 = 20_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    DimensionMismatch {
        board: (usize, usize),
        goal: (usize, usize),
    },
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::DimensionMismatch { board, goal } => write!(
                f,
                "Board is {}x{} but the goal is {}x{}",
                board.0, board.1, goal.0, goal.1
            ),
        }
    }
}

impl Error for SolverErr {}

/// Outcome of one search. Not finding a solution is not an error, check `solved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub solved: bool,
    /// Boards popped from the frontier.
    pub iterations: u64,
    /// Boards left in the frontier when the search ended.
    pub queue_size: usize,
    /// Moves of the goal board, `None` if there's no solution.
    pub path_cost: Option<u32>,
    pub stats: Stats,
}

impl SearchResult {
    fn solved(iterations: u64, queue_size: usize, path_cost: u32, stats: Stats) -> Self {
        SearchResult {
            solved: true,
            iterations,
            queue_size,
            path_cost: Some(path_cost),
            stats,
        }
    }

    fn exhausted(iterations: u64, queue_size: usize, stats: Stats) -> Self {
        SearchResult {
            solved: false,
            iterations,
            queue_size,
            path_cost: None,
            stats,
        }
    }
}

fn report_progress<P: FnMut(u64)>(progress: &mut P, iterations: u64) {
    if iterations % PROGRESS_INTERVAL == 0 {
        progress(iterations);
    }
}

impl Solve for Board {
    fn solve(
        &self,
        method: Method,
        goal: &GoalLayout,
        print_status: bool,
    ) -> Result<SearchResult, SolverErr> {
        solve(self, method, goal, print_status)
    }
}

fn solve(
    board: &Board,
    method: Method,
    goal: &GoalLayout,
    print_status: bool,
) -> Result<SearchResult, SolverErr> {
    if (board.rows(), board.cols()) != (goal.rows(), goal.cols()) {
        return Err(SolverErr::DimensionMismatch {
            board: (board.rows(), board.cols()),
            goal: (goal.rows(), goal.cols()),
        });
    }

    debug!("Solving using {}", method);
    let progress = |_: u64| {
        if print_status {
            // a dot every PROGRESS_INTERVAL iterations
            print!(".");
            let _ = io::stdout().flush();
        }
    };
    let result = match method {
        Method::Bfs => bfs(board, goal, progress),
        Method::Iddfs => iddfs(board, goal, progress),
        Method::AStar(Heuristic::MisplacedTiles) => {
            a_star(board, goal, &MisplacedTiles(goal), progress)
        }
        Method::AStar(Heuristic::Manhattan) => {
            a_star(board, goal, &ManhattanDistance(goal), progress)
        }
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid: Vec<Vec<u8>>) -> Board {
        Board::new(grid).unwrap()
    }

    #[test]
    fn progress_cadence() {
        let mut calls = Vec::new();
        {
            let mut progress = |iterations: u64| calls.push(iterations);
            for iterations in 1..=45_000 {
                report_progress(&mut progress, iterations);
            }
        }
        assert_eq!(calls, vec![PROGRESS_INTERVAL, 2 * PROGRESS_INTERVAL]);
    }

    #[test]
    fn all_methods_agree() {
        let goal = GoalLayout::empty_first(3, 3).unwrap();
        let root = board(vec![vec![3, 1, 2], vec![6, 4, 0], vec![7, 8, 5]]);
        for &method in Method::ALL.iter() {
            let result = root.solve(method, &goal, false).unwrap();
            assert!(result.solved, "{} didn't find a solution", method);
            assert_eq!(result.path_cost, Some(5), "{} isn't optimal", method);
        }
    }

    #[test]
    fn one_move_and_solved_root() {
        let goal = GoalLayout::empty_last(3, 3).unwrap();
        let root = board(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]);
        for &method in Method::ALL.iter() {
            let result = root.solve(method, &goal, false).unwrap();
            assert!(result.solved);
            assert_eq!(result.path_cost, Some(1));

            let result = goal.target().solve(method, &goal, false).unwrap();
            assert!(result.solved);
            assert_eq!(result.path_cost, Some(0));
            assert_eq!(result.iterations, 1);
        }
    }

    #[test]
    fn unsolvable_with_every_method() {
        let goal = GoalLayout::empty_first(2, 2).unwrap();
        let root = board(vec![vec![0, 2], vec![1, 3]]);
        for &method in Method::ALL.iter() {
            let result = root.solve(method, &goal, false).unwrap();
            assert!(!result.solved);
            assert_eq!(result.path_cost, None);
        }
    }

    #[test]
    fn dimension_mismatch() {
        let goal = GoalLayout::empty_first(3, 3).unwrap();
        let root = board(vec![vec![1, 2, 3], vec![4, 5, 0]]);
        let err = root.solve(Method::Bfs, &goal, false).unwrap_err();
        assert_eq!(
            err,
            SolverErr::DimensionMismatch {
                board: (2, 3),
                goal: (3, 3)
            }
        );
        assert_eq!(err.to_string(), "Board is 2x3 but the goal is 3x3");
    }
}
