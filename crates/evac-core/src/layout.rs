//! Default building layout generator.
//!
//! Produces a multi-floor office-like building: a walled perimeter, four
//! interior walls per floor splitting it into rooms (each with one door), a
//! 2×2 stairwell in the middle of every floor and two ground-floor exits
//! on the west and east walls.

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::Position;
use crate::grid::Grid;

/// Smallest width/height for which the room layout does not degenerate.
pub const MIN_SIDE: i32 = 8;

/// Dimensions of a generated building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub width: i32,
    pub height: i32,
    pub floors: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            floors: 3,
        }
    }
}

impl LayoutConfig {
    pub fn new(width: i32, height: i32, floors: i32) -> Self {
        Self {
            width,
            height,
            floors,
        }
    }
}

/// Generate the default building for the given dimensions.
///
/// Fails with [`GridError::InvalidDimensions`] if width or height is below
/// [`MIN_SIDE`] or there are no floors.
pub fn generate_building(cfg: &LayoutConfig) -> Result<Grid, GridError> {
    let LayoutConfig {
        width: w,
        height: h,
        floors,
    } = *cfg;
    if w < MIN_SIDE || h < MIN_SIDE || floors < 1 {
        return Err(GridError::InvalidDimensions {
            width: w,
            height: h,
            floors,
        });
    }

    let mut grid = Grid::new(w, h, floors);
    let extent = grid.extent();
    grid.fill_fn(|p| {
        if extent.on_perimeter(p) {
            CellKind::Wall
        } else {
            CellKind::Walkable
        }
    });

    for floor in 0..floors {
        // Interior walls.
        for y in 2..h / 2 {
            grid.set(Position::new(w / 3, y, floor), CellKind::Wall)?;
        }
        for y in h / 2..h - 2 {
            grid.set(Position::new(2 * w / 3, y, floor), CellKind::Wall)?;
        }
        for x in 2..w / 2 {
            grid.set(Position::new(x, h / 3, floor), CellKind::Wall)?;
        }
        for x in w / 2..w - 2 {
            grid.set(Position::new(x, 2 * h / 3, floor), CellKind::Wall)?;
        }

        // Doors.
        for door in [
            Position::new(w / 3, h / 4, floor),
            Position::new(2 * w / 3, 3 * h / 4, floor),
            Position::new(w / 4, h / 3, floor),
            Position::new(3 * w / 4, 2 * h / 3, floor),
        ] {
            grid.set(door, CellKind::Walkable)?;
        }

        // Stairwell.
        for dy in 0..2 {
            for dx in 0..2 {
                grid.set(Position::new(w / 2 + dx, h / 2 + dy, floor), CellKind::Stairs)?;
            }
        }
    }

    grid.set(Position::new(1, h / 2, 0), CellKind::Exit)?;
    grid.set(Position::new(w - 2, h / 2, 0), CellKind::Exit)?;

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_building_invariants() {
        let g = generate_building(&LayoutConfig::default()).unwrap();
        let e = g.extent();
        for (p, kind) in g.iter() {
            if e.on_perimeter(p) {
                assert_eq!(kind, CellKind::Wall, "perimeter cell {p} is {kind}");
            }
        }
        for floor in 0..e.floors - 1 {
            let linked = (0..e.height).any(|y| {
                (0..e.width).any(|x| {
                    g.at(Position::new(x, y, floor)) == Some(CellKind::Stairs)
                        && g.at(Position::new(x, y, floor + 1)) == Some(CellKind::Stairs)
                })
            });
            assert!(linked, "floors {floor} and {} are not linked", floor + 1);
        }
        assert_eq!(
            g.exits(),
            vec![Position::new(1, 10, 0), Position::new(18, 10, 0)]
        );
        assert_eq!(g.count(CellKind::Stairs), 12);
        assert_eq!(g.count(CellKind::Fire), 0);
    }

    #[test]
    fn doors_are_open() {
        let g = generate_building(&LayoutConfig::default()).unwrap();
        assert_eq!(g.at(Position::new(6, 5, 1)), Some(CellKind::Walkable));
        assert_eq!(g.at(Position::new(6, 4, 1)), Some(CellKind::Wall));
    }

    #[test]
    fn smallest_building() {
        let g = generate_building(&LayoutConfig::new(MIN_SIDE, MIN_SIDE, 1)).unwrap();
        assert_eq!(g.exits().len(), 2);
    }

    #[test]
    fn rejects_tiny_dimensions() {
        for cfg in [
            LayoutConfig::new(5, 20, 1),
            LayoutConfig::new(20, 7, 1),
            LayoutConfig::new(20, 20, 0),
        ] {
            assert!(matches!(
                generate_building(&cfg),
                Err(GridError::InvalidDimensions { .. })
            ));
        }
    }
}
