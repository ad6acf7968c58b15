//! Randomized searches: random walk, ant colony, genetic and swarm.
//!
//! None of these are complete or optimal. Every function takes the random
//! source explicitly, so a run can be replayed from a seeded generator.

use evac_core::{Path, Position};
use rand::{Rng, RngExt};

use crate::params::SearchParams;
use crate::traits::{AstarPather, Pather};

/// Walk from `from` without revisiting cells until `to` is reached, no
/// unvisited neighbor remains, or `max_steps` moves were made. `choose`
/// picks an index into the candidate list.
fn walk<P: Pather>(
    pather: &P,
    from: Position,
    to: Position,
    max_steps: usize,
    mut choose: impl FnMut(&[Position]) -> usize,
) -> Path {
    let extent = pather.extent();
    let mut visited = vec![false; extent.len()];
    if let Some(i) = extent.idx(from) {
        visited[i] = true;
    }

    let mut path = vec![from];
    let mut nbuf = Vec::with_capacity(10);
    let mut candidates = Vec::with_capacity(10);
    let mut current = from;

    for _ in 0..max_steps {
        if current == to {
            break;
        }
        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        candidates.clear();
        candidates.extend(
            nbuf.iter()
                .copied()
                .filter(|&n| extent.idx(n).is_some_and(|i| !visited[i])),
        );
        if candidates.is_empty() {
            break;
        }
        current = candidates[choose(&candidates).min(candidates.len() - 1)];
        if let Some(i) = extent.idx(current) {
            visited[i] = true;
        }
        path.push(current);
    }

    path
}

fn uniform_walk<P: Pather>(
    pather: &P,
    from: Position,
    to: Position,
    max_steps: usize,
    rng: &mut impl Rng,
) -> Path {
    walk(pather, from, to, max_steps, |c| rng.random_range(0..c.len()))
}

/// Roulette-wheel selection; falls back to a uniform pick when the weights
/// are degenerate.
fn weighted_choice(
    rng: &mut impl Rng,
    candidates: &[Position],
    weight: impl Fn(Position) -> f64,
) -> usize {
    let weights: Vec<f64> = candidates.iter().map(|&p| weight(p).max(0.0)).collect();
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return rng.random_range(0..candidates.len());
    }
    let mut r = rng.random::<f64>() * total;
    for (i, w) in weights.iter().enumerate() {
        if r < *w {
            return i;
        }
        r -= w;
    }
    candidates.len() - 1
}

#[inline]
fn reached(path: &[Position], to: Position) -> bool {
    path.last() == Some(&to)
}

/// Keep `candidate` if it reaches `to` and is strictly shorter than `best`.
fn keep_shorter(best: &mut Option<Path>, candidate: &[Position], to: Position) {
    if reached(candidate, to) && best.as_ref().is_none_or(|b| candidate.len() < b.len()) {
        *best = Some(candidate.to_vec());
    }
}

fn in_bounds<P: Pather>(pather: &P, from: Position, to: Position) -> bool {
    let extent = pather.extent();
    extent.contains(from) && extent.contains(to)
}

/// A single random walk: step to a uniformly chosen unvisited neighbor
/// until the goal is reached, the walker is stuck, or `max_steps` moves
/// have been made. Only a walk that ends on the goal is returned.
pub fn random_walk_path<P: Pather>(
    pather: &P,
    from: Position,
    to: Position,
    max_steps: usize,
    rng: &mut impl Rng,
) -> Option<Path> {
    if !in_bounds(pather, from, to) {
        return None;
    }
    let path = uniform_walk(pather, from, to, max_steps, rng);
    reached(&path, to).then_some(path)
}

/// Ant Colony Optimization.
///
/// Runs `ant_count` walks per iteration for `aco_iterations` iterations and
/// returns the shortest walk that reached the goal (ties keep the first).
/// By default every ant walks uniformly. With `aco_guided` set, a
/// pheromone level is kept per cell: ants pick a neighbor with probability
/// proportional to `pheromone / (h + 1)`, and after each iteration all
/// levels evaporate by `aco_evaporation` before each successful ant
/// deposits `1 / len` on every cell of its route.
pub fn ant_colony_path<P: AstarPather>(
    pather: &P,
    from: Position,
    to: Position,
    params: &SearchParams,
    rng: &mut impl Rng,
) -> Option<Path> {
    if !in_bounds(pather, from, to) {
        return None;
    }
    if from == to {
        return Some(vec![from]);
    }

    let extent = pather.extent();
    let evaporation = if params.aco_evaporation.is_nan() {
        0.0
    } else {
        params.aco_evaporation.clamp(0.0, 1.0)
    };
    let mut pheromone = params.aco_guided.then(|| vec![1.0_f64; extent.len()]);
    let mut best: Option<Path> = None;
    let mut successful: Vec<Path> = Vec::new();

    for _ in 0..params.aco_iterations {
        successful.clear();
        for _ in 0..params.ant_count {
            let path = match &pheromone {
                Some(tau) => walk(pather, from, to, params.random_walk_max_steps, |c| {
                    weighted_choice(rng, c, |n| {
                        let level = extent.idx(n).map_or(0.0, |i| tau[i]);
                        level / (pather.estimate(n, to) + 1.0)
                    })
                }),
                None => uniform_walk(pather, from, to, params.random_walk_max_steps, rng),
            };
            if reached(&path, to) {
                keep_shorter(&mut best, &path, to);
                successful.push(path);
            }
        }

        if let Some(tau) = pheromone.as_mut() {
            for level in tau.iter_mut() {
                *level *= 1.0 - evaporation;
            }
            for path in &successful {
                let deposit = 1.0 / path.len() as f64;
                for &p in path {
                    if let Some(i) = extent.idx(p) {
                        tau[i] += deposit;
                    }
                }
            }
        }
    }

    best
}

/// Remove cycles: whenever a position repeats, cut back to its first
/// occurrence. The result stays connected and keeps both endpoints.
fn prune_loops(path: Path) -> Path {
    let mut out: Path = Vec::with_capacity(path.len());
    for p in path {
        match out.iter().position(|&q| q == p) {
            Some(i) => out.truncate(i + 1),
            None => out.push(p),
        }
    }
    out
}

/// First half of `first` joined to the second half of `second`. If the two
/// halves do not meet (same cell or one legal move apart) the child is the
/// first half alone.
fn crossover<P: Pather>(pather: &P, first: &[Position], second: &[Position]) -> Path {
    let cut = (first.len() / 2).max(1).min(first.len());
    let mut child = first[..cut].to_vec();
    let tail = &second[second.len() / 2..];
    if let (Some(&a), Some(&b)) = (child.last(), tail.first()) {
        if a == b {
            child.extend_from_slice(&tail[1..]);
        } else {
            let mut nbuf = Vec::with_capacity(10);
            pather.neighbors(a, &mut nbuf);
            if nbuf.contains(&b) {
                child.extend_from_slice(tail);
            }
        }
    }
    prune_loops(child)
}

/// Genetic Algorithm over random-walk paths.
///
/// The population is seeded with `population_size` random walks. Each
/// generation sorts it (routes that reach the goal first, then by length),
/// keeps the better half, and refills it with children of two distinct
/// parents from the top ten. A child that does not reach the goal is, with
/// probability `mutation_rate`, extended from its tail by a random walk of
/// `mutation_steps`. The shortest complete route ever seen is returned.
pub fn genetic_path<P: Pather>(
    pather: &P,
    from: Position,
    to: Position,
    params: &SearchParams,
    rng: &mut impl Rng,
) -> Option<Path> {
    if !in_bounds(pather, from, to) {
        return None;
    }
    if from == to {
        return Some(vec![from]);
    }

    let size = params.population_size.max(1);
    let max_steps = params.random_walk_max_steps;
    let fitness = move |p: &Path| (!reached(p, to), p.len());

    let mut population: Vec<Path> = (0..size)
        .map(|_| uniform_walk(pather, from, to, max_steps, rng))
        .collect();
    let mut best = None;

    for _ in 0..params.generations {
        population.sort_by_key(fitness);
        keep_shorter(&mut best, &population[0], to);

        let elite = (population.len() / 2).max(1);
        population.truncate(elite);
        let parents = elite.min(10);

        while population.len() < size {
            let child = if parents < 2 {
                uniform_walk(pather, from, to, max_steps, rng)
            } else {
                let i = rng.random_range(0..parents);
                let mut j = rng.random_range(0..parents - 1);
                if j >= i {
                    j += 1;
                }
                let mut child = crossover(pather, &population[i], &population[j]);
                if !reached(&child, to) && rng.random::<f64>() < params.mutation_rate {
                    if let Some(&tail) = child.last() {
                        let ext = uniform_walk(pather, tail, to, params.mutation_steps, rng);
                        child.extend_from_slice(&ext[1..]);
                        child = prune_loops(child);
                    }
                }
                child
            };
            population.push(child);
        }
    }

    population.sort_by_key(fitness);
    keep_shorter(&mut best, &population[0], to);
    best
}

/// Swarm search: `swarm_size` independent agents each take up to
/// `swarm_iterations` uniformly random steps (revisits allowed) and stop on
/// the goal. Returns the shortest route among agents that got there.
pub fn swarm_path<P: Pather>(
    pather: &P,
    from: Position,
    to: Position,
    params: &SearchParams,
    rng: &mut impl Rng,
) -> Option<Path> {
    if !in_bounds(pather, from, to) {
        return None;
    }
    if from == to {
        return Some(vec![from]);
    }

    let mut best = None;
    let mut nbuf = Vec::with_capacity(10);

    for _ in 0..params.swarm_size {
        let mut path = vec![from];
        let mut current = from;
        for _ in 0..params.swarm_iterations {
            nbuf.clear();
            pather.neighbors(current, &mut nbuf);
            if nbuf.is_empty() {
                break;
            }
            current = nbuf[rng.random_range(0..nbuf.len())];
            path.push(current);
            if current == to {
                break;
            }
        }
        keep_shorter(&mut best, &path, to);
    }

    best
}
