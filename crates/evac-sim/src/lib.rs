//! **evac-sim**: fire spread and evacuation replanning.
//!
//! A [`Simulation`] owns a building [`Grid`](evac_core::Grid), the set of
//! burning cells and the people inside. Each [`Simulation::step`] runs one
//! tick in a fixed order:
//!
//! 1. fire spreads to walkable neighbors ([`spread_fire`]);
//! 2. every person whose path is stale gets the shortest fire-free A*
//!    route to any exit, or is marked trapped ([`replan`]);
//! 3. people advance along their paths ([`advance`]);
//! 4. statistics are collected ([`building_stats`]).
//!
//! The tick returns a [`StepReport`] describing what changed; nothing is
//! pushed to observers. [`step`] runs the same tick over caller-owned
//! state.

mod agent;
mod config;
mod error;
mod fire;
mod movement;
mod replan;
mod simulation;
mod stats;

pub use agent::{AgentId, Person};
pub use config::SimConfig;
pub use error::SimError;
pub use fire::{path_has_fire, spread_fire};
pub use movement::{MoveOutcome, advance};
pub use replan::{Replan, is_stale, plan_escape, replan};
pub use simulation::{Simulation, StepReport, step};
pub use stats::{BuildingStats, PathStats, WALKING_SPEED, building_stats, path_statistics};
