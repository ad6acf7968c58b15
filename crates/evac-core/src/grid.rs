//! The building occupancy grid.
//!
//! [`Grid`] stores one [`CellKind`] per cell of an [`Extent`]. Its
//! dimensions are fixed at creation; after construction the only intended
//! mutation is flipping cells between [`CellKind::Walkable`] and
//! [`CellKind::Fire`] (see [`Grid::ignite`] and [`Grid::extinguish_all`]).

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::{Extent, Position};

/// A 3D grid of [`CellKind`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    extent: Extent,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Create a new grid filled with [`CellKind::Walkable`].
    ///
    /// Non-positive dimensions yield an empty grid.
    pub fn new(width: i32, height: i32, floors: i32) -> Self {
        let extent = Extent::new(width, height, floors);
        Self {
            extent,
            cells: vec![CellKind::Walkable; extent.len()],
        }
    }

    /// Returns the dimensions of the grid.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn width(&self) -> i32 {
        self.extent.width
    }

    pub fn height(&self) -> i32 {
        self.extent.height
    }

    pub fn floors(&self) -> i32 {
        self.extent.floors
    }

    /// Whether this grid contains the given position.
    pub fn contains(&self, p: Position) -> bool {
        self.extent.contains(p)
    }

    /// Fail with [`GridError::InvalidPosition`] if `p` is out of bounds.
    pub fn check(&self, p: Position) -> Result<(), GridError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(GridError::InvalidPosition {
                pos: p,
                extent: self.extent,
            })
        }
    }

    /// Get the cell at a position, or `None` if out of bounds.
    pub fn at(&self, p: Position) -> Option<CellKind> {
        self.extent.idx(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and passable (walkable, stairs or exit).
    pub fn is_passable(&self, p: Position) -> bool {
        self.at(p).is_some_and(CellKind::is_passable)
    }

    /// Whether `p` is in bounds and currently on fire.
    pub fn is_fire(&self, p: Position) -> bool {
        self.at(p) == Some(CellKind::Fire)
    }

    /// Set the cell at a position.
    pub fn set(&mut self, p: Position, kind: CellKind) -> Result<(), GridError> {
        let idx = self.extent.idx(p).ok_or(GridError::InvalidPosition {
            pos: p,
            extent: self.extent,
        })?;
        self.cells[idx] = kind;
        Ok(())
    }

    /// Fill the entire grid with the given kind.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(kind);
    }

    /// Fill the grid using a function that takes each position.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Position) -> CellKind) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(self.extent.position(i));
        }
    }

    /// Turn a walkable cell into fire.
    ///
    /// Returns `Ok(true)` if the cell ignited, `Ok(false)` if it was already
    /// burning, and [`GridError::IllegalTransition`] for walls, stairs and
    /// exits.
    pub fn ignite(&mut self, p: Position) -> Result<bool, GridError> {
        self.check(p)?;
        match self.at(p) {
            Some(CellKind::Walkable) => {
                self.set(p, CellKind::Fire)?;
                Ok(true)
            }
            Some(CellKind::Fire) => Ok(false),
            Some(from) => Err(GridError::IllegalTransition {
                pos: p,
                from,
                to: CellKind::Fire,
            }),
            None => Ok(false),
        }
    }

    /// Turn every fire cell back into a walkable cell. Returns how many
    /// cells were extinguished.
    pub fn extinguish_all(&mut self) -> usize {
        let mut n = 0;
        for cell in self.cells.iter_mut() {
            if *cell == CellKind::Fire {
                *cell = CellKind::Walkable;
                n += 1;
            }
        }
        n
    }

    /// Count how many cells equal the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// All positions holding the given kind, in [`Extent::iter`] order.
    pub fn positions_of(&self, kind: CellKind) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == kind)
            .map(|(i, _)| self.extent.position(i))
            .collect()
    }

    /// All exit positions.
    pub fn exits(&self) -> Vec<Position> {
        self.positions_of(CellKind::Exit)
    }

    /// Iterate over `(Position, CellKind)` pairs, floor by floor.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.extent.position(i), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5, 2);
        assert_eq!(g.extent(), Extent::new(10, 5, 2));
        assert_eq!(g.count(CellKind::Walkable), 100);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4, 2);
        let p = Position::new(2, 3, 1);
        g.set(p, CellKind::Stairs).unwrap();
        assert_eq!(g.at(p), Some(CellKind::Stairs));
        assert_eq!(g.at(Position::new(2, 3, 0)), Some(CellKind::Walkable));
        assert_eq!(g.at(Position::new(10, 10, 0)), None);
    }

    #[test]
    fn set_out_of_bounds_fails_without_effect() {
        let mut g = Grid::new(3, 3, 1);
        let before = g.clone();
        let err = g.set(Position::new(3, 0, 0), CellKind::Wall).unwrap_err();
        assert!(matches!(err, GridError::InvalidPosition { .. }));
        assert_eq!(g, before);
    }

    #[test]
    fn ignite_only_walkable() {
        let mut g = Grid::new(3, 3, 1);
        g.set(Position::new(0, 0, 0), CellKind::Wall).unwrap();
        g.set(Position::new(1, 0, 0), CellKind::Exit).unwrap();

        assert_eq!(g.ignite(Position::new(1, 1, 0)), Ok(true));
        assert_eq!(g.ignite(Position::new(1, 1, 0)), Ok(false));
        assert!(g.ignite(Position::new(0, 0, 0)).is_err());
        assert!(g.ignite(Position::new(1, 0, 0)).is_err());
        assert!(g.ignite(Position::new(9, 0, 0)).is_err());
        assert_eq!(g.count(CellKind::Fire), 1);
    }

    #[test]
    fn extinguish_restores_walkable() {
        let mut g = Grid::new(3, 3, 1);
        g.ignite(Position::new(1, 1, 0)).unwrap();
        g.ignite(Position::new(2, 1, 0)).unwrap();
        assert_eq!(g.extinguish_all(), 2);
        assert_eq!(g.count(CellKind::Fire), 0);
        assert_eq!(g.count(CellKind::Walkable), 9);
    }

    #[test]
    fn positions_of_in_order() {
        let mut g = Grid::new(3, 3, 2);
        g.set(Position::new(2, 2, 1), CellKind::Exit).unwrap();
        g.set(Position::new(1, 0, 0), CellKind::Exit).unwrap();
        assert_eq!(
            g.exits(),
            vec![Position::new(1, 0, 0), Position::new(2, 2, 1)]
        );
    }

    #[test]
    fn fill_fn_perimeter() {
        let mut g = Grid::new(4, 4, 1);
        let e = g.extent();
        g.fill_fn(|p| {
            if e.on_perimeter(p) {
                CellKind::Wall
            } else {
                CellKind::Walkable
            }
        });
        assert_eq!(g.count(CellKind::Wall), 12);
        assert_eq!(g.count(CellKind::Walkable), 4);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(3, 2, 2);
        g.set(Position::new(1, 1, 1), CellKind::Stairs).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
