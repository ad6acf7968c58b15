use evac_core::{CellKind, GridError, Position};

use crate::agent::AgentId;

/// Errors raised by simulation operations. A failed operation leaves the
/// simulation unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error(transparent)]
    Grid(#[from] GridError),
    /// People may only stand on walkable, stairs or exit cells.
    #[error("cannot place a person on a {kind} cell at {pos}")]
    IllegalPlacement { pos: Position, kind: CellKind },
    #[error("no person with id {0}")]
    UnknownAgent(AgentId),
}
