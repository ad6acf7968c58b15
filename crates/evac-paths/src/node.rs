use std::collections::BinaryHeap;

use evac_core::{Extent, Path, Position};

/// Parent sentinel for the root of a search tree.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal node for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    /// Touched by the current search.
    pub(crate) seen: bool,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            f: f64::INFINITY,
            parent: NO_PARENT,
            seen: false,
            open: false,
        }
    }
}

/// Node arena for one search invocation, indexed by [`Extent::idx`].
///
/// Parent links are arena indices, so the search tree needs no pointers.
pub(crate) struct NodePool {
    extent: Extent,
    pub(crate) nodes: Vec<Node>,
}

impl NodePool {
    pub(crate) fn new(extent: Extent) -> Self {
        Self {
            extent,
            nodes: vec![Node::default(); extent.len()],
        }
    }

    #[inline]
    pub(crate) fn idx(&self, p: Position) -> Option<usize> {
        self.extent.idx(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Position {
        self.extent.position(idx)
    }

    /// Seed `idx` as the root of the search tree.
    pub(crate) fn seed(&mut self, idx: usize, f: f64) {
        let n = &mut self.nodes[idx];
        n.g = 0.0;
        n.f = f;
        n.parent = NO_PARENT;
        n.seen = true;
        n.open = true;
    }

    /// Walk parent links from `goal` back to the root, then reverse.
    pub(crate) fn path_to(&self, goal: usize) -> Path {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// Open list
// ---------------------------------------------------------------------------

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
///
/// Equal `f` values pop in insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    seq: u64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest seq.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of [`NodeRef`]s with stable tie-breaking.
///
/// Updated nodes are pushed again instead of decreased in place; callers
/// skip stale entries on pop (lazy deletion).
#[derive(Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<NodeRef>,
    seq: u64,
}

impl OpenList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, f: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(NodeRef { idx, f, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }
}
