use std::collections::BTreeSet;

use evac_core::{CellKind, Grid, Path, Position};
use evac_paths::{Algorithm, SearchError, find_path};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::agent::{AgentId, Person};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::fire::spread_fire;
use crate::movement::advance;
use crate::replan::{Replan, replan};
use crate::stats::{BuildingStats, PathStats, building_stats, path_statistics};

/// Changes made by one tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// Cells that caught fire, in position order.
    pub ignited: Vec<Position>,
    /// People given a new route, by replanning or mid-move.
    pub rerouted: Vec<AgentId>,
    /// People who became trapped this tick.
    pub trapped: Vec<AgentId>,
    /// People who reached an exit this tick.
    pub evacuated: Vec<AgentId>,
    /// State after the tick.
    pub stats: BuildingStats,
}

fn run_tick(
    grid: &mut Grid,
    fire: &mut BTreeSet<Position>,
    people: &mut [Person],
    rate: f64,
    rng: &mut impl Rng,
    tick: u64,
) -> StepReport {
    let was_trapped: Vec<bool> = people.iter().map(|p| p.trapped).collect();

    // 1. Fire.
    let ignited = spread_fire(grid, fire, rate, rng);

    // 2. Replanning. Exits never burn, so one lookup serves the tick.
    let exits = grid.exits();
    let mut rerouted = Vec::new();
    for person in people.iter_mut() {
        if replan(grid, &exits, person) == Replan::Rerouted {
            rerouted.push(person.id);
        }
    }

    // 3. Movement.
    let mut evacuated = Vec::new();
    for person in people.iter_mut() {
        let outcome = advance(grid, &exits, person);
        if outcome.rerouted && !rerouted.contains(&person.id) {
            rerouted.push(person.id);
        }
        if outcome.evacuated {
            log::info!("{} {} evacuated at {}", person.id, person.name, person.position);
            evacuated.push(person.id);
        }
    }

    let trapped: Vec<AgentId> = people
        .iter()
        .zip(was_trapped)
        .filter(|(p, was)| p.trapped && !was && !p.evacuated)
        .map(|(p, _)| p.id)
        .collect();
    for id in &trapped {
        log::warn!("{id} is trapped: no fire-free route to any exit");
    }

    // 4. Statistics.
    let stats = building_stats(grid, people, tick);
    log::debug!(
        "tick {tick}: {} ignited, {} rerouted, {} evacuated, {} remaining, {} trapped",
        ignited.len(),
        rerouted.len(),
        stats.evacuated,
        stats.remaining,
        stats.trapped
    );

    StepReport {
        ignited,
        rerouted,
        trapped,
        evacuated,
        stats,
    }
}

/// Run one tick over externally owned state: fire spread, replanning,
/// movement, statistics, strictly in that order.
///
/// `fire` must hold exactly the grid's fire cells. The returned stats
/// carry tick 0; [`Simulation::step`] numbers its own ticks.
pub fn step(
    grid: &mut Grid,
    fire: &mut BTreeSet<Position>,
    people: &mut [Person],
    fire_spread_rate: f64,
    rng: &mut impl Rng,
) -> StepReport {
    run_tick(grid, fire, people, fire_spread_rate, rng, 0)
}

/// Mixed into the seed of the generator used by [`Simulation::find_path`].
const SEARCH_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// A building on fire and the people inside it.
///
/// Owns the grid, the fire set, every person and two random sources, one
/// for fire spread and one for [`Simulation::find_path`], both derived from
/// the configured seed. All mutation goes through its methods.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    fire: BTreeSet<Position>,
    people: Vec<Person>,
    config: SimConfig,
    rng: StdRng,
    search_rng: StdRng,
    tick: u64,
    next_id: u32,
}

impl Simulation {
    /// Cells of `grid` already on fire seed the fire set.
    pub fn new(grid: Grid, config: SimConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let fire = grid.positions_of(CellKind::Fire).into_iter().collect();
        Self {
            grid,
            fire,
            people: Vec::new(),
            config,
            rng: StdRng::seed_from_u64(seed),
            search_rng: StdRng::seed_from_u64(seed ^ SEARCH_STREAM),
            tick: 0,
            next_id: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn fire(&self) -> &BTreeSet<Position> {
        &self.fire
    }

    /// Ticks run since creation or the last [`reset`](Self::reset).
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Place a new person at `pos`. Without a name they are called
    /// `Person_<n>`, `n` counting the people present including them.
    pub fn add_person(&mut self, pos: Position, name: Option<&str>) -> Result<AgentId, SimError> {
        self.grid.check(pos)?;
        let kind = self.grid.at(pos).unwrap_or(CellKind::Wall);
        if !kind.is_passable() {
            return Err(SimError::IllegalPlacement { pos, kind });
        }

        let id = AgentId(self.next_id);
        self.next_id += 1;
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("Person_{}", self.people.len() + 1),
        };
        log::debug!("{id} {name} placed at {pos}");
        self.people
            .push(Person::new(id, name, pos, self.config.movement_speed));
        Ok(id)
    }

    pub fn remove_person(&mut self, id: AgentId) -> Result<Person, SimError> {
        let i = self.index_of(id)?;
        Ok(self.people.remove(i))
    }

    pub fn person(&self, id: AgentId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn set_speed(&mut self, id: AgentId, speed: usize) -> Result<(), SimError> {
        let i = self.index_of(id)?;
        self.people[i].speed = speed;
        Ok(())
    }

    fn index_of(&self, id: AgentId) -> Result<usize, SimError> {
        self.people
            .iter()
            .position(|p| p.id == id)
            .ok_or(SimError::UnknownAgent(id))
    }

    /// Set a walkable cell on fire. Returns `false` if it was burning already.
    pub fn ignite(&mut self, pos: Position) -> Result<bool, SimError> {
        let lit = self.grid.ignite(pos)?;
        if lit {
            log::trace!("fire started at {pos}");
            self.fire.insert(pos);
        }
        Ok(lit)
    }

    /// Put out every fire. People and their routes are kept.
    pub fn reset_fire(&mut self) {
        let n = self.grid.extinguish_all();
        self.fire.clear();
        log::debug!("extinguished {n} cells");
    }

    /// Remove all fire and all people and restart the tick counter.
    pub fn reset(&mut self) {
        self.reset_fire();
        self.people.clear();
        self.tick = 0;
        self.next_id = 0;
    }

    pub fn exit_positions(&self) -> Vec<Position> {
        self.grid.exits()
    }

    pub fn building_stats(&self) -> BuildingStats {
        building_stats(&self.grid, &self.people, self.tick)
    }

    /// Statistics of the route currently assigned to `id`.
    pub fn path_statistics(&self, id: AgentId) -> Result<PathStats, SimError> {
        let i = self.index_of(id)?;
        Ok(path_statistics(&self.people[i].path))
    }

    /// Run `algorithm` on the current grid with the configured tunables.
    ///
    /// Randomized searches draw from a generator of their own, so calling
    /// this never changes how the fire spreads.
    pub fn find_path(
        &mut self,
        algorithm: Algorithm,
        start: Position,
        goal: Position,
    ) -> Result<Option<Path>, SearchError> {
        find_path(
            algorithm,
            &self.grid,
            start,
            goal,
            &self.config.search,
            &mut self.search_rng,
        )
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) -> StepReport {
        self.tick += 1;
        run_tick(
            &mut self.grid,
            &mut self.fire,
            &mut self.people,
            self.config.fire_spread_rate,
            &mut self.rng,
            self.tick,
        )
    }

    /// Whether everyone has either left or is trapped.
    pub fn is_settled(&self) -> bool {
        self.people.iter().all(|p| p.evacuated || p.trapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fire::path_has_fire;
    use evac_core::{GridError, LayoutConfig, generate_building};

    fn building() -> Grid {
        generate_building(&LayoutConfig::default()).unwrap()
    }

    fn calm(grid: Grid) -> Simulation {
        Simulation::new(
            grid,
            SimConfig {
                fire_spread_rate: 0.0,
                ..SimConfig::seeded(1)
            },
        )
    }

    #[test]
    fn placement_is_validated() {
        let mut sim = calm(building());
        let outside = Position::new(20, 0, 0);
        assert_eq!(
            sim.add_person(outside, None),
            Err(SimError::Grid(GridError::InvalidPosition {
                pos: outside,
                extent: sim.grid().extent()
            }))
        );
        assert_eq!(
            sim.add_person(Position::new(0, 0, 0), None),
            Err(SimError::IllegalPlacement {
                pos: Position::new(0, 0, 0),
                kind: CellKind::Wall
            })
        );
        sim.ignite(Position::new(3, 3, 0)).unwrap();
        assert!(matches!(
            sim.add_person(Position::new(3, 3, 0), None),
            Err(SimError::IllegalPlacement {
                kind: CellKind::Fire,
                ..
            })
        ));
        assert!(sim.people().is_empty());

        // Stairs and exits are fine.
        sim.add_person(Position::new(10, 10, 2), None).unwrap();
        sim.add_person(Position::new(1, 10, 0), None).unwrap();
        assert_eq!(sim.people().len(), 2);
    }

    #[test]
    fn default_names_and_ids() {
        let mut sim = calm(building());
        let a = sim.add_person(Position::new(3, 3, 0), None).unwrap();
        let b = sim.add_person(Position::new(4, 3, 0), Some("Ada")).unwrap();
        let c = sim.add_person(Position::new(5, 3, 0), None).unwrap();
        assert_ne!(a, b);
        assert_eq!(sim.person(a).unwrap().name, "Person_1");
        assert_eq!(sim.person(b).unwrap().name, "Ada");
        assert_eq!(sim.person(c).unwrap().name, "Person_3");

        let removed = sim.remove_person(b).unwrap();
        assert_eq!(removed.name, "Ada");
        assert_eq!(sim.remove_person(b), Err(SimError::UnknownAgent(b)));
        assert_eq!(sim.set_speed(b, 2), Err(SimError::UnknownAgent(b)));
        sim.set_speed(a, 3).unwrap();
        assert_eq!(sim.person(a).unwrap().speed, 3);
    }

    #[test]
    fn everyone_gets_out_without_fire() {
        let mut sim = calm(building());
        for p in [
            Position::new(3, 3, 2),
            Position::new(16, 16, 1),
            Position::new(10, 10, 2),
            Position::new(9, 4, 0),
        ] {
            sim.add_person(p, None).unwrap();
        }
        let mut evacuated = 0;
        for _ in 0..200 {
            evacuated += sim.step().evacuated.len();
            if sim.is_settled() {
                break;
            }
        }
        assert_eq!(evacuated, 4);
        let stats = sim.building_stats();
        assert_eq!(stats.evacuated, 4);
        assert_eq!(stats.remaining, 0);
        assert_eq!(stats.trapped, 0);
        for p in sim.people() {
            assert!(sim.exit_positions().contains(&p.position));
        }
    }

    #[test]
    fn first_tick_plans_a_route() {
        let mut sim = calm(building());
        let id = sim.add_person(Position::new(3, 3, 0), None).unwrap();
        let report = sim.step();
        assert_eq!(report.rerouted, vec![id]);
        assert_eq!(report.stats.tick, 1);
        let person = sim.person(id).unwrap();
        assert_eq!(person.target, Some(Position::new(1, 10, 0)));
        assert_eq!(person.path_index, 1);
        let stats = sim.path_statistics(id).unwrap();
        assert_eq!(stats.length, person.path.len());
        assert_eq!(stats.floor_changes, 0);
    }

    #[test]
    fn fire_on_route_forces_reroute_or_trap() {
        let mut sim = calm(building());
        let id = sim.add_person(Position::new(5, 10, 0), None).unwrap();
        sim.step();
        let ahead = sim.person(id).unwrap().next_waypoint().unwrap();
        sim.ignite(ahead).unwrap();
        let report = sim.step();
        let person = sim.person(id).unwrap();
        assert!(person.trapped || !path_has_fire(sim.grid(), person.remaining()));
        if !person.trapped {
            assert_eq!(report.rerouted, vec![id]);
            assert!(sim.exit_positions().contains(&person.target.unwrap()));
        }
    }

    #[test]
    fn surrounded_person_is_trapped_once() {
        let grid = Grid::from_floors(&["\
#######
#E....#
#.FFF.#
#.F.F.#
#.FFF.#
#######"])
        .unwrap();
        let mut sim = calm(grid);
        assert_eq!(sim.fire().len(), 8);
        let id = sim.add_person(Position::new(3, 3, 0), None).unwrap();
        let report = sim.step();
        assert_eq!(report.trapped, vec![id]);
        assert!(report.rerouted.is_empty());
        assert!(sim.person(id).unwrap().trapped);
        // Still trapped, but not newly.
        assert!(sim.step().trapped.is_empty());
        assert_eq!(sim.building_stats().trapped, 1);
        assert!(sim.is_settled());
    }

    #[test]
    fn invariants_hold_while_fire_spreads() {
        for seed in 0..5 {
            let mut sim = Simulation::new(
                building(),
                SimConfig {
                    fire_spread_rate: 0.3,
                    ..SimConfig::seeded(seed)
                },
            );
            sim.ignite(Position::new(8, 8, 0)).unwrap();
            sim.ignite(Position::new(4, 15, 1)).unwrap();
            for p in [
                Position::new(3, 3, 0),
                Position::new(16, 3, 0),
                Position::new(3, 16, 1),
                Position::new(15, 16, 2),
            ] {
                sim.add_person(p, None).unwrap();
            }
            for _ in 0..60 {
                let before = sim.fire().clone();
                sim.step();
                assert!(sim.fire().is_superset(&before));
                assert_eq!(sim.fire().len(), sim.grid().count(CellKind::Fire));
                for p in sim.people() {
                    if p.evacuated {
                        assert_eq!(sim.grid().at(p.position), Some(CellKind::Exit));
                    } else {
                        assert!(p.trapped || !path_has_fire(sim.grid(), p.remaining()));
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut sim = Simulation::new(building(), SimConfig::seeded(99));
            sim.ignite(Position::new(8, 8, 0)).unwrap();
            sim.add_person(Position::new(3, 3, 0), None).unwrap();
            sim.add_person(Position::new(16, 16, 2), None).unwrap();
            (0..30).map(|_| sim.step()).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn searches_do_not_disturb_fire_spread() {
        let run = |explore: bool| {
            let mut sim = Simulation::new(building(), SimConfig::seeded(7));
            sim.ignite(Position::new(8, 8, 0)).unwrap();
            sim.add_person(Position::new(3, 3, 0), None).unwrap();
            if explore {
                for a in [Algorithm::AntColony, Algorithm::Genetic, Algorithm::RandomWalk] {
                    sim.find_path(a, Position::new(3, 3, 2), Position::new(16, 16, 0))
                        .unwrap();
                }
            }
            (0..20).map(|_| sim.step()).collect::<Vec<_>>()
        };
        assert_eq!(run(false), run(true));
    }

    #[test]
    fn resets() {
        let mut sim = calm(building());
        sim.ignite(Position::new(3, 3, 0)).unwrap();
        assert!(!sim.ignite(Position::new(3, 3, 0)).unwrap());
        assert!(matches!(
            sim.ignite(Position::new(0, 0, 0)),
            Err(SimError::Grid(GridError::IllegalTransition { .. }))
        ));
        sim.add_person(Position::new(5, 5, 0), None).unwrap();
        sim.step();

        sim.reset_fire();
        assert!(sim.fire().is_empty());
        assert_eq!(sim.grid().count(CellKind::Fire), 0);
        assert_eq!(sim.people().len(), 1);

        sim.ignite(Position::new(3, 3, 0)).unwrap();
        sim.reset();
        assert!(sim.fire().is_empty());
        assert!(sim.people().is_empty());
        assert_eq!(sim.tick(), 0);
        assert_eq!(sim.building_stats().walkable_cells, building().count(CellKind::Walkable));
    }

    #[test]
    fn stateless_step() {
        let mut grid = building();
        grid.ignite(Position::new(8, 8, 0)).unwrap();
        let mut fire = BTreeSet::from([Position::new(8, 8, 0)]);
        let mut people = vec![Person::new(AgentId(0), "solo", Position::new(3, 3, 0), 1)];
        let mut rng = StdRng::seed_from_u64(4);
        let report = step(&mut grid, &mut fire, &mut people, 1.0, &mut rng);
        assert_eq!(report.ignited.len(), 8);
        assert_eq!(fire.len(), 9);
        assert_eq!(report.rerouted, vec![AgentId(0)]);
        assert_eq!(report.stats.tick, 0);
        assert_eq!(report.stats.fire_cells, 9);
    }

    #[test]
    fn search_through_the_context() {
        let mut sim = calm(building());
        let path = sim
            .find_path(Algorithm::AStar, Position::new(3, 3, 2), Position::new(1, 10, 0))
            .unwrap()
            .unwrap();
        assert_eq!(path_statistics(&path).floor_changes, 2);
        assert!(sim
            .find_path(Algorithm::Bfs, Position::new(3, 3, 9), Position::new(1, 10, 0))
            .is_err());
    }
}
