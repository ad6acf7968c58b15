use evac_core::{Extent, Position};

/// Minimal pathfinding interface: provides bounds and neighbor enumeration.
pub trait Pather {
    /// Bounds of the searchable space. Positions outside are never visited.
    fn extent(&self) -> Extent;

    /// Append positions reachable in one move from `p` into `buf`. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);

    /// Whether `p` may be entered at all. Used by searches that expand
    /// backwards from the goal.
    fn passable(&self, p: Position) -> bool;
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Position, to: Position) -> f64;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    ///
    /// Unlike the usual A* contract this is not required to be admissible;
    /// searches tolerate overestimates and reopen closed nodes when a
    /// cheaper route turns up.
    fn estimate(&self, from: Position, to: Position) -> f64;
}
