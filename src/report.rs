use std::fmt::{self, Display, Formatter};
use std::time::{Duration, Instant};

use log::info;
use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

use crate::config::Method;
use crate::rules::GoalLayout;
use crate::solver::{SearchResult, SolverErr};
use crate::state::Board;
use crate::Solve;

/// One timed search.
#[derive(Debug, Clone)]
pub struct Run {
    pub method: Method,
    pub result: SearchResult,
    /// Approximate, includes printing progress.
    pub elapsed: Duration,
}

pub fn run_timed(
    board: &Board,
    method: Method,
    goal: &GoalLayout,
    print_status: bool,
) -> Result<Run, SolverErr> {
    let started = Instant::now();
    let result = board.solve(method, goal, print_status)?;
    let elapsed = started.elapsed();
    info!(
        "{} finished in {} after {} iterations",
        method,
        format_duration(elapsed),
        result.iterations
    );
    Ok(Run {
        method,
        result,
        elapsed,
    })
}

fn format_duration(duration: Duration) -> String {
    format!("{:.3} s", duration.as_secs_f64())
}

fn format_path_cost(path_cost: Option<u32>) -> String {
    match path_cost {
        Some(moves) => format!("{} moves", u64::from(moves).separated_string()),
        None => "no solution".to_owned(),
    }
}

impl Display for Run {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, " {}", if self.result.solved { "✓" } else { "✕" })?;

        let stats = [
            ("Execution time", format_duration(self.elapsed)),
            ("Path cost to goal", format_path_cost(self.result.path_cost)),
            ("Iterations", self.result.iterations.separated_string()),
            (
                "Queue size at goal",
                (self.result.queue_size as u64).separated_string(),
            ),
        ];
        for (name, value) in stats.iter() {
            writeln!(f, "    * {:<20} {}", format!("{}:", name), value)?;
        }
        Ok(())
    }
}

/// Side by side comparison of several runs, one row per run.
pub fn comparison_table(runs: &[Run]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(
        ["Method", "Solved", "Path cost", "Iterations", "Queue size", "Time"]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
    ));
    for run in runs {
        table.add_row(Row::new(vec![
            Cell::new(&run.method.to_string()),
            Cell::new(if run.result.solved { "yes" } else { "no" }),
            Cell::new(&format_path_cost(run.result.path_cost)),
            Cell::new(&run.result.iterations.separated_string()),
            Cell::new(&(run.result.queue_size as u64).separated_string()),
            Cell::new(&format_duration(run.elapsed)),
        ]));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Heuristic;

    fn one_move() -> (Board, GoalLayout) {
        let board = Board::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]).unwrap();
        (board, GoalLayout::empty_last(3, 3).unwrap())
    }

    #[test]
    fn timed_run() {
        let (board, goal) = one_move();
        let run = run_timed(&board, Method::Bfs, &goal, false).unwrap();
        assert_eq!(run.method, Method::Bfs);
        assert_eq!(run.result.path_cost, Some(1));

        let wrong_goal = GoalLayout::empty_last(2, 2).unwrap();
        assert!(run_timed(&board, Method::Bfs, &wrong_goal, false).is_err());
    }

    #[test]
    fn formatting_run() {
        let (board, goal) = one_move();
        let mut run = run_timed(&board, Method::Bfs, &goal, false).unwrap();
        run.elapsed = Duration::from_millis(1500);

        let expected = " ✓
    * Execution time:      1.500 s
    * Path cost to goal:   1 moves
    * Iterations:          3
    * Queue size at goal:  4
";
        assert_eq!(run.to_string(), expected);
    }

    #[test]
    fn formatting_unsolved_run() {
        let board = Board::new(vec![vec![0, 2], vec![1, 3]]).unwrap();
        let goal = GoalLayout::empty_first(2, 2).unwrap();
        let run = run_timed(&board, Method::AStar(Heuristic::Manhattan), &goal, false).unwrap();
        let text = run.to_string();
        assert!(text.starts_with(" ✕\n"));
        assert!(text.contains("    * Path cost to goal:   no solution\n"));
        assert!(text.contains("    * Queue size at goal:  0\n"));
    }

    #[test]
    fn table() {
        let (board, goal) = one_move();
        let runs: Vec<_> = Method::ALL
            .iter()
            .map(|&method| run_timed(&board, method, &goal, false).unwrap())
            .collect();
        let table = comparison_table(&runs);
        assert_eq!(table.len(), 4);

        let text = table.to_string();
        assert!(text.contains("Method"));
        assert!(text.contains("Queue size"));
        for method in Method::ALL.iter() {
            assert!(text.contains(&method.to_string()));
        }
        assert!(text.contains("1 moves"));
        // title, separator and one line per run
        assert!(text.lines().count() >= 1 + runs.len());

        let mut out = Vec::new();
        table.print(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);
    }
}
