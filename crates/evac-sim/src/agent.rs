use std::fmt;

use evac_core::{Path, Position};

/// Handle to a [`Person`] inside a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Someone to be evacuated.
///
/// `path[path_index]` is the waypoint the person stands on; everything
/// after it is still ahead. An empty path means no route was planned yet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id: AgentId,
    pub name: String,
    pub position: Position,
    /// Exit the current path leads to.
    pub target: Option<Position>,
    pub path: Path,
    pub path_index: usize,
    /// Cells advanced per tick.
    pub speed: usize,
    pub evacuated: bool,
    /// No fire-free route to any exit was found on the last attempt.
    pub trapped: bool,
}

impl Person {
    pub fn new(id: AgentId, name: impl Into<String>, position: Position, speed: usize) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            target: None,
            path: Vec::new(),
            path_index: 0,
            speed,
            evacuated: false,
            trapped: false,
        }
    }

    /// Waypoints from the current one onwards.
    pub fn remaining(&self) -> &[Position] {
        self.path.get(self.path_index..).unwrap_or(&[])
    }

    /// The waypoint after the current one, if any.
    pub fn next_waypoint(&self) -> Option<Position> {
        self.path.get(self.path_index + 1).copied()
    }

    /// Replace the route, restarting progress at its first waypoint.
    pub fn set_path(&mut self, path: Path) {
        self.target = path.last().copied();
        self.path = path;
        self.path_index = 0;
    }
}
