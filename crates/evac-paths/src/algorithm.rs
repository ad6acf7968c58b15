//! Name-addressable dispatch over every search in the crate.

use std::fmt;
use std::str::FromStr;

use evac_core::{GridError, Path, Position};
use rand::Rng;

use crate::astar::{anytime_astar_path, astar_path, greedy_path, weighted_astar_path};
use crate::bfs::{bfs_path, dfs_path};
use crate::bidirectional::bidirectional_path;
use crate::dijkstra::dijkstra_path;
use crate::error::SearchError;
use crate::params::SearchParams;
use crate::random::{ant_colony_path, genetic_path, random_walk_path, swarm_path};
use crate::traits::AstarPather;

/// Every search the crate can run.
///
/// `JumpPoint`, `ThetaStar`, `Fringe`, `DStar`, `DStarLite` and `LpaStar`
/// are aliases of [`Algorithm::AStar`]: they return exactly the A* result.
/// The incremental searches replan from scratch on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AStar,
    Dijkstra,
    Bfs,
    Dfs,
    GreedyBestFirst,
    Bidirectional,
    WeightedAStar,
    AnytimeAStar,
    RandomWalk,
    AntColony,
    Genetic,
    Swarm,
    JumpPoint,
    ThetaStar,
    Fringe,
    DStar,
    DStarLite,
    LpaStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 18] = [
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::GreedyBestFirst,
        Algorithm::Bidirectional,
        Algorithm::WeightedAStar,
        Algorithm::AnytimeAStar,
        Algorithm::RandomWalk,
        Algorithm::AntColony,
        Algorithm::Genetic,
        Algorithm::Swarm,
        Algorithm::JumpPoint,
        Algorithm::ThetaStar,
        Algorithm::Fringe,
        Algorithm::DStar,
        Algorithm::DStarLite,
        Algorithm::LpaStar,
    ];

    /// Display name, as shown in comparison tables.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::GreedyBestFirst => "Greedy BFS",
            Algorithm::Bidirectional => "Bidirectional",
            Algorithm::WeightedAStar => "Weighted A*",
            Algorithm::AnytimeAStar => "Anytime A*",
            Algorithm::RandomWalk => "Random Walk",
            Algorithm::AntColony => "Ant Colony",
            Algorithm::Genetic => "Genetic",
            Algorithm::Swarm => "Swarm",
            Algorithm::JumpPoint => "Jump Point",
            Algorithm::ThetaStar => "Theta*",
            Algorithm::Fringe => "Fringe",
            Algorithm::DStar => "D*",
            Algorithm::DStarLite => "D* Lite",
            Algorithm::LpaStar => "LPA*",
        }
    }

    /// Whether results depend on the random source.
    pub fn is_randomized(self) -> bool {
        matches!(
            self,
            Algorithm::RandomWalk | Algorithm::AntColony | Algorithm::Genetic | Algorithm::Swarm
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    /// Case-insensitive; spaces, `-` and `_` are ignored and `*` reads as
    /// "star", so `"A*"`, `"a-star"` and `"astar"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .replace('*', "star")
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        let algorithm = match key.as_str() {
            "astar" => Algorithm::AStar,
            "dijkstra" => Algorithm::Dijkstra,
            "bfs" | "breadthfirst" | "breadthfirstsearch" => Algorithm::Bfs,
            "dfs" | "depthfirst" | "depthfirstsearch" => Algorithm::Dfs,
            "greedy" | "greedybfs" | "greedybestfirst" | "greedybestfirstsearch" => {
                Algorithm::GreedyBestFirst
            }
            "bidirectional" | "bidirectionalsearch" => Algorithm::Bidirectional,
            "weightedastar" => Algorithm::WeightedAStar,
            "anytimeastar" | "arastar" => Algorithm::AnytimeAStar,
            "randomwalk" => Algorithm::RandomWalk,
            "antcolony" | "antcolonyoptimization" | "aco" => Algorithm::AntColony,
            "genetic" | "geneticalgorithm" | "ga" => Algorithm::Genetic,
            "swarm" | "swarmintelligence" => Algorithm::Swarm,
            "jumppoint" | "jumppointsearch" | "jps" => Algorithm::JumpPoint,
            "thetastar" => Algorithm::ThetaStar,
            "fringe" | "fringesearch" => Algorithm::Fringe,
            "dstar" => Algorithm::DStar,
            "dstarlite" => Algorithm::DStarLite,
            "lpastar" | "lifelongplanningastar" => Algorithm::LpaStar,
            _ => return Err(SearchError::UnknownAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}

/// Run `algorithm` from `start` to `goal`.
///
/// Fails only if an endpoint lies outside the pather's extent. `Ok(None)`
/// means the goal is unreachable (or, for the randomized searches, was not
/// reached within their budget). The random source is only drawn from by
/// randomized algorithms.
pub fn find_path<P: AstarPather>(
    algorithm: Algorithm,
    pather: &P,
    start: Position,
    goal: Position,
    params: &SearchParams,
    rng: &mut impl Rng,
) -> Result<Option<Path>, SearchError> {
    let extent = pather.extent();
    for pos in [start, goal] {
        if !extent.contains(pos) {
            return Err(GridError::InvalidPosition { pos, extent }.into());
        }
    }

    let path = match algorithm {
        Algorithm::AStar
        | Algorithm::JumpPoint
        | Algorithm::ThetaStar
        | Algorithm::Fringe
        | Algorithm::DStar
        | Algorithm::DStarLite
        | Algorithm::LpaStar => astar_path(pather, start, goal),
        Algorithm::Dijkstra => dijkstra_path(pather, start, goal),
        Algorithm::Bfs => bfs_path(pather, start, goal),
        Algorithm::Dfs => dfs_path(pather, start, goal),
        Algorithm::GreedyBestFirst => greedy_path(pather, start, goal),
        Algorithm::Bidirectional => bidirectional_path(pather, start, goal),
        Algorithm::WeightedAStar => weighted_astar_path(pather, start, goal, params.weight),
        Algorithm::AnytimeAStar => anytime_astar_path(
            pather,
            start,
            goal,
            params.anytime_initial_weight,
            params.anytime_decay,
            params.anytime_budget,
        ),
        Algorithm::RandomWalk => {
            random_walk_path(pather, start, goal, params.random_walk_max_steps, rng)
        }
        Algorithm::AntColony => ant_colony_path(pather, start, goal, params, rng),
        Algorithm::Genetic => genetic_path(pather, start, goal, params, rng),
        Algorithm::Swarm => swarm_path(pather, start, goal, params, rng),
    };
    Ok(path)
}
