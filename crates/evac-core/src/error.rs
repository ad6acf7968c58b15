use crate::cell::CellKind;
use crate::geom::{Extent, Position};

/// Errors raised by grid construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Coordinates outside the grid bounds. Never silently clamped.
    #[error("position {pos} is outside the {extent} grid")]
    InvalidPosition { pos: Position, extent: Extent },
    /// Requested building dimensions cannot hold a valid layout.
    #[error("invalid building dimensions {width}x{height}x{floors}")]
    InvalidDimensions { width: i32, height: i32, floors: i32 },
    /// Floor-plan lines or floors have inconsistent sizes.
    #[error("floor plan: inconsistent size:\n{0}")]
    InconsistentSize(String),
    /// A character not mapping to any [`CellKind`] was found.
    #[error("floor plan contains invalid rune \u{201c}{ch}\u{201d} at floor {floor}, ({x}, {y})")]
    InvalidRune { ch: char, x: i32, y: i32, floor: i32 },
    /// A cell transition the grid does not allow (e.g. igniting a wall).
    #[error("cannot turn {from} cell at {pos} into {to}")]
    IllegalTransition {
        pos: Position,
        from: CellKind,
        to: CellKind,
    },
}
