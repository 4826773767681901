use std::collections::VecDeque;

use fnv::FnvHashSet;
use log::debug;

use crate::rules::Goal;
use crate::state::Board;

use super::stats::Stats;
use super::{report_progress, SearchResult};

/// Uninformed breadth-first search.
///
/// Boards are marked visited when they're popped, not when they're queued,
/// so the same board can be queued (and expanded) more than once
/// if several boards at the same depth lead to it.
pub fn bfs<G, P>(root: &Board, goal: &G, mut progress: P) -> SearchResult
where
    G: Goal + ?Sized,
    P: FnMut(u64),
{
    debug!("BFS called");

    let mut stats = Stats::new();
    let mut iterations = 0;
    let mut visited = FnvHashSet::default();
    let mut to_visit = VecDeque::new();

    stats.add_created(root.moves());
    to_visit.push_back(root.clone());

    while let Some(cur) = to_visit.pop_front() {
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
                to_visit.push_back(child);
            }
        }
    }

    debug!("Search space exhausted after {} iterations", iterations);
    SearchResult::exhausted(iterations, to_visit.len(), stats)
}
