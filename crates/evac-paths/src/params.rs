use std::time::Duration;

/// Tunables for the configurable and randomized searches.
///
/// The defaults reproduce the reference evacuation tool. Deterministic
/// algorithms ignore the fields that do not concern them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Heuristic weight for Weighted A*.
    pub weight: f64,
    /// First weight tried by Anytime A*; values below 1 are raised to 1.
    pub anytime_initial_weight: f64,
    /// Factor applied to the Anytime A* weight after each round, capped at
    /// [`MAX_ANYTIME_DECAY`](crate::MAX_ANYTIME_DECAY).
    pub anytime_decay: f64,
    /// Wall-clock budget for Anytime A*, checked between rounds.
    pub anytime_budget: Duration,
    /// Step cap for a single random walk (also used per ant and for GA seeds).
    pub random_walk_max_steps: usize,
    pub ant_count: usize,
    pub aco_iterations: usize,
    /// Fraction of pheromone lost per iteration in guided mode.
    pub aco_evaporation: f64,
    /// Bias ant steps by pheromone and heuristic instead of walking uniformly.
    pub aco_guided: bool,
    pub population_size: usize,
    pub generations: usize,
    /// Probability that a child is extended by a short random walk.
    pub mutation_rate: f64,
    /// Length of that extension.
    pub mutation_steps: usize,
    pub swarm_size: usize,
    /// Steps each swarm agent may take.
    pub swarm_iterations: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            weight: 1.0,
            anytime_initial_weight: 2.0,
            anytime_decay: 0.8,
            anytime_budget: Duration::from_millis(500),
            random_walk_max_steps: 100,
            ant_count: 50,
            aco_iterations: 20,
            aco_evaporation: 0.1,
            aco_guided: false,
            population_size: 50,
            generations: 20,
            mutation_rate: 0.3,
            mutation_steps: 10,
            swarm_size: 20,
            swarm_iterations: 50,
        }
    }
}
