//! Building-grid implementation of the pather traits.
//!
//! From any cell an agent may step to the eight surrounding cells of the
//! same floor if they are walkable, stairs or exits. Standing on stairs it
//! may also move straight up or down when the cell above/below is stairs
//! too. Fire and walls are never neighbors, so a burning cell simply drops
//! out of every search.

use evac_core::{CellKind, Extent, Grid, Position};

use crate::distance;
use crate::traits::{AstarPather, Pather, WeightedPather};

impl Pather for Grid {
    fn extent(&self) -> Extent {
        Grid::extent(self)
    }

    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        for n in p.neighbors_8() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
        if self.at(p) == Some(CellKind::Stairs) {
            for floor in [p.floor - 1, p.floor + 1] {
                let q = p.on_floor(floor);
                if self.at(q) == Some(CellKind::Stairs) {
                    buf.push(q);
                }
            }
        }
    }

    fn passable(&self, p: Position) -> bool {
        self.is_passable(p)
    }
}

impl WeightedPather for Grid {
    fn cost(&self, from: Position, to: Position) -> f64 {
        distance::movement_cost(from, to)
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Position, to: Position) -> f64 {
        distance::heuristic(from, to)
    }
}

/// Convenience wrapper returning the neighbors of `p` in a fresh vector.
pub fn neighbors<P: Pather>(pather: &P, p: Position) -> Vec<Position> {
    let mut buf = Vec::with_capacity(10);
    pather.neighbors(p, &mut buf);
    buf
}
