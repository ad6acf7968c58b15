//! Uninformed searches: breadth-first and depth-first.
//!
//! Each frontier entry carries its own route, stored as a link to the
//! entry it was generated from. Positions are marked visited when they are
//! taken off the frontier, so a position may sit in the frontier several
//! times; the first copy to come off wins.

use std::collections::VecDeque;

use evac_core::{Path, Position};

use crate::node::NO_PARENT;
use crate::traits::Pather;

#[derive(Clone, Copy)]
enum Frontier {
    /// FIFO queue.
    Queue,
    /// LIFO stack.
    Stack,
}

/// A frontier entry: a position plus the entry it was reached from.
struct Trail {
    pos: Position,
    parent: usize,
}

fn unwind(trails: &[Trail], mut ti: usize) -> Path {
    let mut path = Vec::new();
    while ti != NO_PARENT {
        path.push(trails[ti].pos);
        ti = trails[ti].parent;
    }
    path.reverse();
    path
}

fn uninformed<P: Pather>(pather: &P, from: Position, to: Position, order: Frontier) -> Option<Path> {
    let extent = pather.extent();
    extent.idx(from)?;
    extent.idx(to)?;

    let mut visited = vec![false; extent.len()];
    let mut trails = vec![Trail {
        pos: from,
        parent: NO_PARENT,
    }];
    let mut frontier: VecDeque<usize> = VecDeque::from([0]);
    let mut nbuf = Vec::with_capacity(10);

    loop {
        let next = match order {
            Frontier::Queue => frontier.pop_front(),
            Frontier::Stack => frontier.pop_back(),
        };
        let Some(ti) = next else {
            return None;
        };
        let cp = trails[ti].pos;

        if cp == to {
            return Some(unwind(&trails, ti));
        }

        let Some(ci) = extent.idx(cp) else {
            continue;
        };
        if visited[ci] {
            continue;
        }
        visited[ci] = true;

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = extent.idx(np) else {
                continue;
            };
            if visited[ni] {
                continue;
            }
            trails.push(Trail {
                pos: np,
                parent: ti,
            });
            frontier.push_back(trails.len() - 1);
        }
    }
}

/// Breadth-First Search. Returns a path with the fewest moves, treating
/// every move (including stair moves) as cost 1.
pub fn bfs_path<P: Pather>(pather: &P, from: Position, to: Position) -> Option<Path> {
    uninformed(pather, from, to, Frontier::Queue)
}

/// Depth-First Search. Finds *a* path, usually a long one.
pub fn dfs_path<P: Pather>(pather: &P, from: Position, to: Position) -> Option<Path> {
    uninformed(pather, from, to, Frontier::Stack)
}
