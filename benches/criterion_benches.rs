use criterion::{criterion_group, criterion_main, Criterion};

use sliding_puzzle_solver::rules::GoalLayout;
use sliding_puzzle_solver::{GoalKind, Heuristic, LoadBoard, Method, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_five_moves_bfs(c: &mut Criterion) {
    bench_board(c, Method::Bfs, "boards/five-moves.txt", 100);
}

#[allow(unused)]
fn bench_five_moves_iddfs(c: &mut Criterion) {
    bench_board(c, Method::Iddfs, "boards/five-moves.txt", 100);
}

#[allow(unused)]
fn bench_assignment_misplaced(c: &mut Criterion) {
    // 26 moves with the empty cell first
    bench_board(
        c,
        Method::AStar(Heuristic::MisplacedTiles),
        "boards/assignment.txt",
        10,
    );
}

#[allow(unused)]
fn bench_assignment_manhattan(c: &mut Criterion) {
    bench_board(
        c,
        Method::AStar(Heuristic::Manhattan),
        "boards/assignment.txt",
        20,
    );
}

fn bench_board(c: &mut Criterion, method: Method, board_path: &str, samples: usize) {
    let board = board_path.load_board().unwrap();
    let goal = GoalLayout::from_kind(GoalKind::EmptyFirst, board.rows(), board.cols()).unwrap();

    let mut group = c.benchmark_group(method.to_string());
    group.sample_size(samples);
    group.bench_function(board_path, |b| {
        b.iter(|| {
            criterion::black_box(board.solve(
                criterion::black_box(method),
                &goal,
                criterion::black_box(false),
            ))
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_five_moves_bfs,
    bench_five_moves_iddfs,
    bench_assignment_manhattan,
    //bench_assignment_misplaced,
);
criterion_main!(benches);
