//! Best-first searches driven by a priority queue: A*, Weighted A*, Greedy
//! Best-First and Anytime (ARA*-style) A*.

use std::time::{Duration, Instant};

use evac_core::{Path, Position};

use crate::node::{NodePool, OpenList};
use crate::traits::AstarPather;

/// How a node's queue priority is derived from its costs.
#[derive(Clone, Copy, Debug)]
enum Priority {
    /// `g + weight·h`. A* uses weight 1.
    Cost { weight: f64 },
    /// `h` only; the first route found to a node is kept.
    Greedy,
}

impl Priority {
    #[inline]
    fn score(self, g: f64, h: f64) -> f64 {
        match self {
            Self::Cost { weight } => g + weight * h,
            Self::Greedy => h,
        }
    }
}

fn best_first<P: AstarPather>(
    pather: &P,
    from: Position,
    to: Position,
    priority: Priority,
) -> Option<Path> {
    let mut pool = NodePool::new(pather.extent());
    let start_idx = pool.idx(from)?;
    let goal_idx = pool.idx(to)?;

    if start_idx == goal_idx {
        return Some(vec![from]);
    }

    let f0 = priority.score(0.0, pather.estimate(from, to));
    pool.seed(start_idx, f0);

    let mut open = OpenList::new();
    open.push(start_idx, f0);

    let mut nbuf = Vec::with_capacity(10);

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip stale entries.
        if !pool.nodes[ci].open {
            continue;
        }

        if ci == goal_idx {
            return Some(pool.path_to(goal_idx));
        }

        pool.nodes[ci].open = false;
        let current_g = pool.nodes[ci].g;
        let current_point = pool.point(ci);

        nbuf.clear();
        pather.neighbors(current_point, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = pool.idx(np) else {
                continue;
            };
            let tentative_g = current_g + pather.cost(current_point, np);

            let n = &mut pool.nodes[ni];
            if n.seen {
                match priority {
                    Priority::Greedy => continue,
                    // Closed nodes are reopened on a strictly better g:
                    // the heuristic may overestimate across floors.
                    Priority::Cost { .. } if tentative_g >= n.g => continue,
                    Priority::Cost { .. } => {}
                }
            }

            n.seen = true;
            n.g = tentative_g;
            n.f = priority.score(tentative_g, pather.estimate(np, to));
            n.parent = ci;
            n.open = true;

            open.push(ni, n.f);
        }
    }

    None
}

/// Compute a path from `from` to `to` using A* (`f = g + h`).
///
/// Returns the full path (including both endpoints) or `None` if the goal
/// is unreachable or either endpoint lies outside the pather's extent.
pub fn astar_path<P: AstarPather>(pather: &P, from: Position, to: Position) -> Option<Path> {
    best_first(pather, from, to, Priority::Cost { weight: 1.0 })
}

/// A* with an inflated heuristic: `f = g + weight·h`.
///
/// Negative or NaN weights are treated as 0 (plain uniform-cost search).
pub fn weighted_astar_path<P: AstarPather>(
    pather: &P,
    from: Position,
    to: Position,
    weight: f64,
) -> Option<Path> {
    let weight = if weight.is_nan() { 0.0 } else { weight.max(0.0) };
    best_first(pather, from, to, Priority::Cost { weight })
}

/// Greedy Best-First Search: nodes are ordered by heuristic only.
///
/// Fast but not shortest-path correct.
pub fn greedy_path<P: AstarPather>(pather: &P, from: Position, to: Position) -> Option<Path> {
    best_first(pather, from, to, Priority::Greedy)
}

/// Largest weight decay accepted by [`anytime_astar_path`].
pub const MAX_ANYTIME_DECAY: f64 = 0.95;

/// Anytime A*: repeated Weighted A* with a decaying weight.
///
/// Starts at `initial_weight` (at least 1), multiplies it by `decay` after
/// every successful round and stops once a round at weight 1 completes,
/// a round fails, or `budget` has elapsed. The budget is only checked
/// between rounds, and the first round always runs. Returns the path of
/// the last successful round.
///
/// `decay` is capped at [`MAX_ANYTIME_DECAY`] so the weight always reaches
/// 1. A NaN decay is read as the cap; a non-positive one drops to weight 1
/// after the first round.
pub fn anytime_astar_path<P: AstarPather>(
    pather: &P,
    from: Position,
    to: Position,
    initial_weight: f64,
    decay: f64,
    budget: Duration,
) -> Option<Path> {
    let started = Instant::now();
    let mut weight = if initial_weight.is_nan() {
        1.0
    } else {
        initial_weight.max(1.0)
    };
    let decay = decay.min(MAX_ANYTIME_DECAY);
    let mut best = None;
    let mut round = 0u32;

    loop {
        let Some(path) = weighted_astar_path(pather, from, to, weight) else {
            break;
        };
        log::debug!(
            "anytime A* round {round}: weight {weight:.3}, {} positions",
            path.len()
        );
        best = Some(path);
        round += 1;
        if weight <= 1.0 || started.elapsed() >= budget {
            break;
        }
        weight = (weight * decay).max(1.0);
    }

    best
}
