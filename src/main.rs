use std::env;
use std::io::{self, Write};
use std::process;

use clap::{App, Arg, ArgMatches};
use log::debug;

use sliding_puzzle_solver::report::{self, Run};
use sliding_puzzle_solver::rules::GoalLayout;
use sliding_puzzle_solver::state::Board;
use sliding_puzzle_solver::{GoalKind, LoadBoard, Method};

// the assignment board, solved when no file is given
const DEFAULT_BOARD: &str = r"
7 2 4
5 0 6
8 3 1
";

fn main() {
    env_logger::init();

    let method_names: Vec<String> = Method::ALL.iter().map(Method::to_string).collect();
    let goal_names: Vec<String> = GoalKind::ALL.iter().map(GoalKind::to_string).collect();
    let method_names: Vec<&str> = method_names.iter().map(String::as_str).collect();
    let goal_names: Vec<&str> = goal_names.iter().map(String::as_str).collect();

    let matches = App::new("sliding-puzzle-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves sliding tile puzzles and compares search methods")
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .possible_values(&method_names)
                .help("search method to run, can be repeated (default: all)"),
        )
        .arg(
            Arg::with_name("goal")
                .short("g")
                .long("goal")
                .takes_value(true)
                .possible_values(&goal_names)
                .default_value("empty-first")
                .help("where the empty cell is in the solved board"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print progress dots"),
        )
        .arg(Arg::with_name("file").help("board to solve (default: the assignment board)"))
        .get_matches();

    let board = load_board(&matches);
    let methods = parse_methods(&matches);
    let print_status = !matches.is_present("quiet");

    let kind = matches
        .value_of("goal")
        .unwrap_or("empty-first")
        .parse::<GoalKind>()
        .unwrap_or_else(|err| {
            println!("Can't parse goal: {}", err);
            process::exit(1);
        });
    let goal = GoalLayout::from_kind(kind, board.rows(), board.cols()).unwrap_or_else(|err| {
        println!("Can't create goal: {}", err);
        process::exit(1);
    });

    println!("Board:\n{}", board);
    println!("Goal ({}):\n{}", kind, goal.target());

    let mut runs: Vec<Run> = Vec::new();
    for (i, &method) in methods.iter().enumerate() {
        print!("  {}) {}", (b'a' + i as u8) as char, method.description());
        let _ = io::stdout().flush();

        let run = report::run_timed(&board, method, &goal, print_status).unwrap_or_else(|err| {
            println!("\nFailed to solve: {}", err);
            process::exit(1);
        });
        println!("{}", run);
        debug!("{:?}", run.result.stats);
        runs.push(run);
    }

    report::comparison_table(&runs).printstd();
}

fn load_board(matches: &ArgMatches<'_>) -> Board {
    match matches.value_of("file") {
        None => DEFAULT_BOARD.parse::<Board>().unwrap_or_else(|err| {
            println!("Failed to parse the default board: {}", err);
            process::exit(1);
        }),
        Some(path) => path.load_board().unwrap_or_else(|err| {
            let current_dir = env::current_dir()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default();
            println!("Can't load board {} in {}: {}", path, current_dir, err);
            process::exit(1);
        }),
    }
}

fn parse_methods(matches: &ArgMatches<'_>) -> Vec<Method> {
    match matches.values_of("method") {
        None => Method::ALL.to_vec(),
        Some(names) => Method::parse_all(names).unwrap_or_else(|err| {
            println!("Can't parse methods: {}", err);
            process::exit(1);
        }),
    }
}
