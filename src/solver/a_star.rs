use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fnv::FnvHashSet;
use log::debug;

use crate::rules::{CostEstimator, Goal};
use crate::state::Board;

use super::stats::Stats;
use super::{report_progress, SearchResult};

#[derive(Debug)]
struct SearchNode {
    board: Board,
    // moves so far + estimate of the remaining moves
    cost: u32,
}

impl SearchNode {
    fn new<H: CostEstimator + ?Sized>(board: Board, heuristic: &H) -> Self {
        let cost = board.moves() + heuristic.estimate(&board);
        SearchNode { board, cost }
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        other.cost.cmp(&self.cost)
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for SearchNode {}

/// A* search ordered by moves so far plus the heuristic's estimate.
///
/// The order of boards with the same cost is unspecified. Boards are marked visited when popped
/// and never reopened, so the solution is only guaranteed optimal with an admissible heuristic.
pub fn a_star<G, H, P>(root: &Board, goal: &G, heuristic: &H, mut progress: P) -> SearchResult
where
    G: Goal + ?Sized,
    H: CostEstimator + ?Sized,
    P: FnMut(u64),
{
    debug!("A* called");

    let mut stats = Stats::new();
    let mut iterations = 0;
    let mut visited = FnvHashSet::default();
    let mut to_visit = BinaryHeap::new();

    stats.add_created(root.moves());
    to_visit.push(SearchNode::new(root.clone(), heuristic));

    while let Some(SearchNode { board: cur, .. }) = to_visit.pop() {
        iterations += 1;
        report_progress(&mut progress, iterations);

        visited.insert(cur.fingerprint());
        if stats.add_expanded(cur.moves()) {
            debug!("Expanding new depth: {}", cur.moves());
        }

        if cur.is_goal(goal) {
            debug!("Solved after {} iterations", iterations);
            return SearchResult::solved(iterations, to_visit.len(), cur.moves(), stats);
        }

        for child in cur.successors() {
            if visited.contains(&child.fingerprint()) {
                stats.add_pruned(child.moves());
            } else {
                stats.add_created(child.moves());
                to_visit.push(SearchNode::new(child, heuristic));
            }
        }
    }

    debug!("Search space exhausted after {} iterations", iterations);
    SearchResult::exhausted(iterations, to_visit.len(), stats)
}
