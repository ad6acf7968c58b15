//! Side-by-side runs of several algorithms over the same query.

use std::time::{Duration, Instant};

use evac_core::{Path, Position};
use rand::Rng;

use crate::algorithm::{Algorithm, find_path};
use crate::astar::{astar_path, greedy_path};
use crate::bfs::bfs_path;
use crate::bidirectional::bidirectional_path;
use crate::dijkstra::dijkstra_path;
use crate::distance::path_cost;
use crate::error::SearchError;
use crate::params::SearchParams;
use crate::traits::AstarPather;

/// Result of one algorithm in a comparison.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub path: Option<Path>,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
}

impl AlgorithmReport {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of positions in the path, 0 if none was found.
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Total movement cost, `None` if no path was found.
    pub fn cost(&self) -> Option<f64> {
        self.path.as_deref().map(path_cost)
    }
}

/// Run each of `algorithms` in order on the same query and time it.
///
/// Randomized algorithms draw from `rng` in sequence, so the whole
/// comparison is reproducible from one seed.
pub fn compare_algorithms<P: AstarPather>(
    algorithms: &[Algorithm],
    pather: &P,
    start: Position,
    goal: Position,
    params: &SearchParams,
    rng: &mut impl Rng,
) -> Result<Vec<AlgorithmReport>, SearchError> {
    let mut reports = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let started = Instant::now();
        let path = find_path(algorithm, pather, start, goal, params, rng)?;
        let elapsed = started.elapsed();
        log::debug!(
            "{algorithm}: {} positions in {elapsed:?}",
            path.as_ref().map_or(0, Vec::len)
        );
        reports.push(AlgorithmReport {
            algorithm,
            path,
            elapsed,
        });
    }
    Ok(reports)
}

/// Up to `n` distinct routes from `start` to `goal`, taken from A*,
/// Dijkstra, BFS, Greedy Best-First and Bidirectional search, in that
/// order. A route equal to an earlier one is skipped.
pub fn alternate_paths<P: AstarPather>(
    pather: &P,
    start: Position,
    goal: Position,
    n: usize,
) -> Vec<Path> {
    let searches: [fn(&P, Position, Position) -> Option<Path>; 5] = [
        astar_path,
        dijkstra_path,
        bfs_path,
        greedy_path,
        bidirectional_path,
    ];
    let mut paths: Vec<Path> = Vec::new();
    for search in searches {
        if paths.len() >= n {
            break;
        }
        if let Some(path) = search(pather, start, goal) {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}
