use std::collections::VecDeque;

use evac_core::{Path, Position};

use crate::node::NO_PARENT;
use crate::traits::Pather;

/// One breadth-first frontier. `parent[i]` is `None` until cell `i` is
/// reached; the root holds `Some(NO_PARENT)`.
struct Side {
    parent: Vec<Option<usize>>,
    queue: VecDeque<usize>,
}

impl Side {
    fn new(len: usize, root: usize) -> Self {
        let mut parent = vec![None; len];
        parent[root] = Some(NO_PARENT);
        Self {
            parent,
            queue: VecDeque::from([root]),
        }
    }

    fn reached(&self, idx: usize) -> bool {
        self.parent[idx].is_some()
    }

    /// Chain of indices from `idx` back to this side's root.
    fn chain(&self, mut idx: usize) -> Vec<usize> {
        let mut out = Vec::new();
        while idx != NO_PARENT {
            out.push(idx);
            idx = self.parent[idx].unwrap_or(NO_PARENT);
        }
        out
    }
}

/// Bidirectional breadth-first search.
///
/// Alternates one expansion from the start side with one from the goal
/// side (start side first). When a dequeued position has already been
/// reached by the other side, the two half-routes are spliced at it.
pub fn bidirectional_path<P: Pather>(pather: &P, from: Position, to: Position) -> Option<Path> {
    let extent = pather.extent();
    let start_idx = extent.idx(from)?;
    let goal_idx = extent.idx(to)?;

    if start_idx == goal_idx {
        return Some(vec![from]);
    }
    // The goal side walks edges backwards; that is only sound if the goal
    // can be entered.
    if !pather.passable(to) {
        return None;
    }

    let mut sides = [
        Side::new(extent.len(), start_idx),
        Side::new(extent.len(), goal_idx),
    ];
    let mut nbuf = Vec::with_capacity(10);

    while !sides[0].queue.is_empty() && !sides[1].queue.is_empty() {
        for this in 0..2 {
            let other = 1 - this;
            let Some(ci) = sides[this].queue.pop_front() else {
                continue;
            };
            if sides[other].reached(ci) {
                let mut forward = sides[0].chain(ci);
                forward.reverse();
                let backward = sides[1].chain(ci);
                let path = forward
                    .into_iter()
                    .chain(backward.into_iter().skip(1))
                    .map(|i| extent.position(i))
                    .collect();
                return Some(path);
            }

            nbuf.clear();
            pather.neighbors(extent.position(ci), &mut nbuf);
            let side = &mut sides[this];
            for &np in nbuf.iter() {
                let Some(ni) = extent.idx(np) else {
                    continue;
                };
                if side.reached(ni) {
                    continue;
                }
                side.parent[ni] = Some(ci);
                side.queue.push_back(ni);
            }
        }
    }

    None
}
