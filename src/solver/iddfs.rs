use std::collections::hash_map::Entry;

use fnv::FnvHashMap;
use log::debug;

use crate::rules::Goal;
use crate::state::Board;

use super::stats::Stats;
use super::{report_progress, SearchResult};

/// Iterative deepening depth-first search.
///
/// Runs a depth-limited DFS with bounds 0, 1, 2, ... so the first solution found is optimal.
/// The bound limits the board's move count, not the distance from root.
/// There is no maximum depth. If a whole iteration finishes without cutting off any board
/// at the bound then every reachable board has been seen and the search gives up.
/// Each bound walks the whole reachable space again, so in practice that only happens
/// on tiny grids. An unsolvable 3x3 board keeps running far longer than anyone will wait.
pub fn iddfs<G, P>(root: &Board, goal: &G, mut progress: P) -> SearchResult
where
    G: Goal + ?Sized,
    P: FnMut(u64),
{
    debug!("IDDFS called");

    let mut stats = Stats::new();
    let mut iterations = 0;
    let mut bound = 0;

    loop {
        debug!("Depth bound: {}", bound);

        let mut to_visit = vec![root.clone()];
        // shallowest move count each board was popped at during this iteration
        let mut visited = FnvHashMap::default();
        let mut cut_off = false;
        stats.add_created(root.moves());

        while let Some(cur) = to_visit.pop() {
            iterations += 1;
            report_progress(&mut progress, iterations);

            match visited.entry(cur.fingerprint()) {
                Entry::Occupied(mut entry) => {
                    if *entry.get() > cur.moves() {
                        entry.insert(cur.moves());
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(cur.moves());
                }
            }
            stats.add_expanded(cur.moves());

            if cur.is_goal(goal) {
                debug!("Solved at depth bound {} after {} iterations", bound, iterations);
                return SearchResult::solved(iterations, to_visit.len(), cur.moves(), stats);
            }

            if cur.moves() >= bound {
                cut_off = true;
                continue;
            }

            for child in cur.successors() {
                match visited.get(&child.fingerprint()) {
                    Some(&seen) if seen <= child.moves() => {
                        stats.add_pruned(child.moves());
                    }
                    _ => {
                        stats.add_created(child.moves());
                        to_visit.push(child);
                    }
                }
            }
        }

        if !cut_off {
            debug!("Search space exhausted after {} iterations", iterations);
            return SearchResult::exhausted(iterations, to_visit.len(), stats);
        }
        bound += 1;
    }
}
