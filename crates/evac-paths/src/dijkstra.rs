use evac_core::{Path, Position};

use crate::node::{NodePool, OpenList};
use crate::traits::WeightedPather;

/// Compute the cheapest path from `from` to `to` using Dijkstra's algorithm.
///
/// Every cell starts at infinite distance; the search settles nodes in
/// order of accumulated cost and stops as soon as the goal is settled or
/// no reachable node remains.
pub fn dijkstra_path<P: WeightedPather>(pather: &P, from: Position, to: Position) -> Option<Path> {
    let mut pool = NodePool::new(pather.extent());
    let start_idx = pool.idx(from)?;
    let goal_idx = pool.idx(to)?;

    if start_idx == goal_idx {
        return Some(vec![from]);
    }

    pool.seed(start_idx, 0.0);
    let mut open = OpenList::new();
    open.push(start_idx, 0.0);

    let mut nbuf = Vec::with_capacity(10);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if !pool.nodes[ci].open {
            continue;
        }
        if ci == goal_idx {
            return Some(pool.path_to(goal_idx));
        }
        pool.nodes[ci].open = false;
        let current_g = pool.nodes[ci].g;
        let cp = pool.point(ci);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = pool.idx(np) else {
                continue;
            };
            let tentative = current_g + pather.cost(cp, np);

            let n = &mut pool.nodes[ni];
            // Settled nodes already hold their final distance.
            if n.seen && (!n.open || tentative >= n.g) {
                continue;
            }

            n.seen = true;
            n.g = tentative;
            n.f = tentative;
            n.parent = ci;
            n.open = true;
            open.push(ni, tentative);
        }
    }

    None
}
