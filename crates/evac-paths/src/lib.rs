//! Pathfinding algorithms for multi-floor building grids.
//!
//! Every search here is a pure function of a start, a goal and a grid
//! snapshot (plus tunables). Fire is never consulted directly: burning
//! cells are simply not neighbors, so a route blocked by fire is the same
//! as no route at all and comes back as `None`.
//!
//! | Family | Functions |
//! |---|---|
//! | Best-first | [`astar_path`], [`weighted_astar_path`], [`greedy_path`], [`anytime_astar_path`] |
//! | Uniform cost | [`dijkstra_path`] |
//! | Uninformed | [`bfs_path`], [`dfs_path`], [`bidirectional_path`] |
//! | Randomized | [`random_walk_path`], [`ant_colony_path`], [`genetic_path`], [`swarm_path`] |
//!
//! [`find_path`] dispatches on an [`Algorithm`] name, and
//! [`compare_algorithms`] runs several of them over the same query.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, bidirectional, random walk, genetic, swarm |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* family, ant colony |
//!
//! [`Grid`](evac_core::Grid) implements all three.
//!
//! # Cost model
//!
//! A straight step costs 1, a diagonal one 1.414 and a stair move adds 5.
//! The heuristic is the Euclidean distance with floor differences scaled
//! by 10, which can overestimate across floors; the A* family reopens
//! closed nodes to cope with it.

mod algorithm;
mod astar;
mod bfs;
mod bidirectional;
mod compare;
mod dijkstra;
mod distance;
mod error;
mod neighbors;
mod node;
mod params;
mod random;
mod traits;

#[cfg(test)]
mod fixtures;

pub use algorithm::{Algorithm, find_path};
pub use astar::{
    MAX_ANYTIME_DECAY, anytime_astar_path, astar_path, greedy_path, weighted_astar_path,
};
pub use bfs::{bfs_path, dfs_path};
pub use bidirectional::bidirectional_path;
pub use compare::{AlgorithmReport, alternate_paths, compare_algorithms};
pub use dijkstra::dijkstra_path;
pub use distance::{
    DIAGONAL_COST, FLOOR_CHANGE_PENALTY, FLOOR_HEURISTIC_FACTOR, STRAIGHT_COST, floor_changes,
    heuristic, movement_cost, path_cost,
};
pub use error::SearchError;
pub use neighbors::neighbors;
pub use params::SearchParams;
pub use random::{ant_colony_path, genetic_path, random_walk_path, swarm_path};
pub use traits::{AstarPather, Pather, WeightedPather};
