//! Fire spread.

use std::collections::BTreeSet;

use evac_core::{CellKind, Grid, Position};
use rand::{Rng, RngExt};

/// Advance the fire by one tick and return the cells that ignited, in
/// position order.
///
/// Every burning cell tries each of its eight same-floor neighbors; a
/// walkable neighbor ignites with probability `rate` (clamped to `[0, 1]`).
/// Candidates are drawn from the fire set as it stood before the tick, and
/// only applied once every draw is done, so fire never jumps two cells in a
/// single tick. Fire never goes out: `fire` only grows.
pub fn spread_fire(
    grid: &mut Grid,
    fire: &mut BTreeSet<Position>,
    rate: f64,
    rng: &mut impl Rng,
) -> Vec<Position> {
    let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
    let mut ignited = BTreeSet::new();

    for &burning in fire.iter() {
        for n in burning.neighbors_8() {
            if grid.at(n) != Some(CellKind::Walkable) || ignited.contains(&n) {
                continue;
            }
            if rng.random_bool(rate) {
                ignited.insert(n);
            }
        }
    }

    for &p in &ignited {
        // Candidates were checked walkable above.
        if grid.set(p, CellKind::Fire).is_ok() {
            log::trace!("fire spreads to {p}");
            fire.insert(p);
        }
    }

    ignited.into_iter().collect()
}

/// Whether any cell of `path` is currently on fire.
pub fn path_has_fire(grid: &Grid, path: &[Position]) -> bool {
    path.iter().any(|&p| grid.is_fire(p))
}
