//! Derived, side-effect free statistics over paths and buildings.

use evac_core::{CellKind, Extent, Grid, Position};
use evac_paths::{floor_changes, path_cost};

use crate::agent::Person;

/// Assumed walking speed, in grid units per second.
pub const WALKING_SPEED: f64 = 1.4;

/// Summary of a single route.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStats {
    /// Number of positions, endpoints included.
    pub length: usize,
    /// Total movement cost.
    pub distance: f64,
    pub floor_changes: usize,
    /// `distance / WALKING_SPEED`.
    pub estimated_seconds: f64,
}

/// Statistics for `path`. An empty path yields all zeros.
pub fn path_statistics(path: &[Position]) -> PathStats {
    if path.is_empty() {
        return PathStats::default();
    }
    let distance = path_cost(path);
    PathStats {
        length: path.len(),
        distance,
        floor_changes: floor_changes(path),
        estimated_seconds: distance / WALKING_SPEED,
    }
}

/// Snapshot of a building and the people in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingStats {
    pub extent: Extent,
    /// Cells of kind walkable (stairs and exits not included).
    pub walkable_cells: usize,
    pub fire_cells: usize,
    pub exits: usize,
    pub stairs: usize,
    pub total_people: usize,
    pub evacuated: usize,
    /// Not evacuated and currently without an escape route.
    pub trapped: usize,
    /// Not evacuated yet, trapped or not.
    pub remaining: usize,
    pub tick: u64,
}

/// Collect [`BuildingStats`] for `grid` and `people` at `tick`.
pub fn building_stats(grid: &Grid, people: &[Person], tick: u64) -> BuildingStats {
    let mut stats = BuildingStats {
        extent: grid.extent(),
        walkable_cells: 0,
        fire_cells: 0,
        exits: 0,
        stairs: 0,
        total_people: people.len(),
        evacuated: 0,
        trapped: 0,
        remaining: 0,
        tick,
    };
    for (_, kind) in grid.iter() {
        match kind {
            CellKind::Walkable => stats.walkable_cells += 1,
            CellKind::Fire => stats.fire_cells += 1,
            CellKind::Exit => stats.exits += 1,
            CellKind::Stairs => stats.stairs += 1,
            CellKind::Wall => {}
        }
    }
    for p in people {
        if p.evacuated {
            stats.evacuated += 1;
        } else {
            stats.remaining += 1;
            if p.trapped {
                stats.trapped += 1;
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentId;

    #[test]
    fn empty_path_is_all_zero() {
        let s = path_statistics(&[]);
        assert_eq!(s, PathStats::default());
        assert_eq!(s.length, 0);
        assert_eq!(s.floor_changes, 0);
        assert_eq!(s.estimated_seconds, 0.0);
    }

    #[test]
    fn single_position() {
        let s = path_statistics(&[Position::new(1, 1, 0)]);
        assert_eq!(s.length, 1);
        assert_eq!(s.distance, 0.0);
    }

    #[test]
    fn mixed_moves() {
        let path = [
            Position::new(1, 1, 1),
            Position::new(2, 1, 1),
            Position::new(3, 2, 1),
            Position::new(3, 2, 0),
        ];
        let s = path_statistics(&path);
        assert_eq!(s.length, 4);
        assert_eq!(s.floor_changes, 1);
        let expected = 1.0 + 1.414 + 6.0;
        assert!((s.distance - expected).abs() < 1e-9);
        assert!((s.estimated_seconds - expected / 1.4).abs() < 1e-9);
    }

    #[test]
    fn counts_cells_and_people() {
        let g = Grid::from_floors(&["\
#####
#.FS#
#E..#
#####"])
        .unwrap();
        let mut people = vec![
            Person::new(AgentId(0), "a", Position::new(1, 1, 0), 1),
            Person::new(AgentId(1), "b", Position::new(2, 2, 0), 1),
            Person::new(AgentId(2), "c", Position::new(3, 2, 0), 1),
        ];
        people[0].evacuated = true;
        people[1].trapped = true;
        let s = building_stats(&g, &people, 4);
        assert_eq!(s.extent, g.extent());
        assert_eq!(s.walkable_cells, 3);
        assert_eq!(s.fire_cells, 1);
        assert_eq!(s.exits, 1);
        assert_eq!(s.stairs, 1);
        assert_eq!(s.total_people, 3);
        assert_eq!(s.evacuated, 1);
        assert_eq!(s.trapped, 1);
        assert_eq!(s.remaining, 2);
        assert_eq!(s.tick, 4);
    }
}
