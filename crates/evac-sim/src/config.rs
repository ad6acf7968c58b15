use evac_paths::SearchParams;

/// Simulation settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Probability, per tick and per burning neighbor, that a walkable
    /// cell ignites. Clamped to `[0, 1]`.
    pub fire_spread_rate: f64,
    /// Speed given to newly added people, in cells per tick.
    pub movement_speed: usize,
    /// Seed for the simulation's generators (fire spread and randomized
    /// searches). `None` draws one from the thread rng.
    pub seed: Option<u64>,
    pub search: SearchParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fire_spread_rate: 0.1,
            movement_speed: 1,
            seed: None,
            search: SearchParams::default(),
        }
    }
}

impl SimConfig {
    /// Default settings with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
