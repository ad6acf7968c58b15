//! ASCII floor plans.
//!
//! A floor plan is one string per floor, one line per row. Every line of
//! every floor must have the same width and every floor the same number of
//! rows. Runes: `#` wall, `.` walkable, `F` fire, `S` stairs, `E` exit.
//!
//! ```
//! use evac_core::{CellKind, Grid, Position};
//!
//! let grid = Grid::from_floors(&["\
//! ######
//! #E..#
//! ######"])
//! .unwrap();
//! assert_eq!(grid.at(Position::new(1, 1, 0)), Some(CellKind::Exit));
//! ```

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::Position;
use crate::grid::Grid;

impl Grid {
    /// Parse a grid from per-floor ASCII plans (floor 0 first).
    ///
    /// Surrounding whitespace is trimmed from each floor and from each
    /// line.
    pub fn from_floors(floors: &[&str]) -> Result<Grid, GridError> {
        let mut rows: Vec<Vec<Vec<char>>> = Vec::with_capacity(floors.len());
        for plan in floors {
            let lines: Vec<Vec<char>> = plan
                .trim()
                .lines()
                .map(|line| line.trim().chars().collect())
                .collect();
            rows.push(lines);
        }

        let height = rows.first().map_or(0, |f| f.len());
        let width = rows
            .first()
            .and_then(|f| f.first())
            .map_or(0, |line| line.len());
        for (floor, lines) in rows.iter().enumerate() {
            if lines.len() != height || lines.iter().any(|line| line.len() != width) {
                return Err(GridError::InconsistentSize(floors[floor].to_string()));
            }
        }

        let mut grid = Grid::new(width as i32, height as i32, rows.len() as i32);
        for (floor, lines) in rows.iter().enumerate() {
            for (y, line) in lines.iter().enumerate() {
                for (x, &ch) in line.iter().enumerate() {
                    let (x, y, floor) = (x as i32, y as i32, floor as i32);
                    let kind = CellKind::from_rune(ch)
                        .ok_or(GridError::InvalidRune { ch, x, y, floor })?;
                    grid.set(Position::new(x, y, floor), kind)?;
                }
            }
        }
        Ok(grid)
    }

    /// Render one floor back into its ASCII plan. Out-of-range floors
    /// render as an empty string.
    pub fn floor_plan(&self, floor: i32) -> String {
        if floor < 0 || floor >= self.floors() {
            return String::new();
        }
        let mut s = String::with_capacity(self.extent().floor_len() + self.height() as usize);
        for y in 0..self.height() {
            if y > 0 {
                s.push('\n');
            }
            for x in 0..self.width() {
                let kind = self
                    .at(Position::new(x, y, floor))
                    .unwrap_or(CellKind::Wall);
                s.push(kind.rune());
            }
        }
        s
    }
}
