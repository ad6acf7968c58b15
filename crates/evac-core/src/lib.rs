//! **evac-core**: building grid model for evacuation planning (core types).
//!
//! This crate provides the foundational types used across the *evac*
//! workspace: 3D positions and extents, cell kinds, the occupancy grid,
//! ASCII floor plans and the default building layout generator.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod plan;

pub use cell::CellKind;
pub use error::GridError;
pub use geom::{Extent, ParsePositionError, Position};
pub use grid::Grid;
pub use layout::{LayoutConfig, generate_building};

/// An ordered sequence of positions from start to goal, inclusive.
pub type Path = Vec<Position>;

/// Build the default building grid (see [`generate_building`]).
pub fn initialize_grid(width: i32, height: i32, floors: i32) -> Result<Grid, GridError> {
    generate_building(&LayoutConfig::new(width, height, floors))
}
