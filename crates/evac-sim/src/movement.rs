use evac_core::{CellKind, Grid, Position};

use crate::agent::Person;
use crate::replan::plan_escape;

/// What happened to a person during one movement phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cells advanced.
    pub steps: usize,
    /// Fire on the next waypoint forced an immediate new route.
    pub rerouted: bool,
    /// Fire on the next waypoint and no route left.
    pub trapped: bool,
    /// Reached an exit this phase.
    pub evacuated: bool,
}

/// Advance `person` up to `speed` waypoints along their path.
///
/// Someone already standing on an exit is evacuated without moving.
/// Trapped people hold their position. If the next waypoint has caught
/// fire, an immediate any-exit reroute is attempted before the person is
/// marked trapped. Reaching an exit cell ends the movement.
pub fn advance(grid: &Grid, exits: &[Position], person: &mut Person) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    if person.evacuated || person.trapped {
        return outcome;
    }
    if grid.at(person.position) == Some(CellKind::Exit) {
        person.evacuated = true;
        outcome.evacuated = true;
        return outcome;
    }

    while outcome.steps < person.speed {
        let Some(next) = person.next_waypoint() else {
            break;
        };
        if grid.is_fire(next) {
            match plan_escape(grid, exits, person.position) {
                Some(path) => {
                    log::debug!("{} {}: fire ahead at {next}, rerouting", person.id, person.name);
                    person.set_path(path);
                    outcome.rerouted = true;
                    continue;
                }
                None => {
                    person.trapped = true;
                    outcome.trapped = true;
                    break;
                }
            }
        }

        person.position = next;
        person.path_index += 1;
        outcome.steps += 1;

        if grid.at(next) == Some(CellKind::Exit) {
            person.evacuated = true;
            outcome.evacuated = true;
            break;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentId;

    fn corridor() -> Grid {
        Grid::from_floors(&["\
#########
#E.....E#
#########"])
        .unwrap()
    }

    fn walking(from: i32, to: i32, speed: usize) -> Person {
        let mut p = Person::new(AgentId(0), "p", Position::new(from, 1, 0), speed);
        let step = if to >= from { 1 } else { -1 };
        let mut path = Vec::new();
        let mut x = from;
        loop {
            path.push(Position::new(x, 1, 0));
            if x == to {
                break;
            }
            x += step;
        }
        p.set_path(path);
        p
    }

    #[test]
    fn moves_one_cell_per_speed_unit() {
        let g = corridor();
        let exits = g.exits();
        let mut p = walking(4, 1, 1);
        let out = advance(&g, &exits, &mut p);
        assert_eq!(out.steps, 1);
        assert_eq!(p.position, Position::new(3, 1, 0));
        assert_eq!(p.path_index, 1);

        let mut fast = walking(6, 1, 2);
        advance(&g, &exits, &mut fast);
        assert_eq!(fast.position, Position::new(4, 1, 0));
    }

    #[test]
    fn stops_on_exit() {
        let g = corridor();
        let exits = g.exits();
        let mut p = walking(3, 1, 5);
        let out = advance(&g, &exits, &mut p);
        assert!(out.evacuated && p.evacuated);
        assert_eq!(out.steps, 2);
        assert_eq!(p.position, Position::new(1, 1, 0));
        // Evacuated people no longer move.
        assert_eq!(advance(&g, &exits, &mut p), MoveOutcome::default());
    }

    #[test]
    fn standing_on_exit_evacuates() {
        let g = corridor();
        let mut p = Person::new(AgentId(0), "p", Position::new(7, 1, 0), 1);
        let out = advance(&g, &g.exits(), &mut p);
        assert!(out.evacuated);
        assert_eq!(out.steps, 0);
    }

    #[test]
    fn fire_ahead_triggers_reroute() {
        let mut g = corridor();
        let mut p = walking(3, 1, 1);
        g.ignite(Position::new(2, 1, 0)).unwrap();
        let out = advance(&g, &g.exits(), &mut p);
        assert!(out.rerouted);
        assert!(!out.trapped);
        assert_eq!(p.target, Some(Position::new(7, 1, 0)));
        assert_eq!(p.position, Position::new(4, 1, 0));
        assert_eq!(p.path_index, 1);
    }

    #[test]
    fn fire_ahead_without_escape_traps() {
        let mut g = corridor();
        let mut p = walking(3, 1, 1);
        g.ignite(Position::new(2, 1, 0)).unwrap();
        g.ignite(Position::new(4, 1, 0)).unwrap();
        let out = advance(&g, &g.exits(), &mut p);
        assert!(out.trapped && p.trapped);
        assert_eq!(out.steps, 0);
        assert_eq!(p.position, Position::new(3, 1, 0));
        // Trapped people wait for the next replanning phase.
        assert_eq!(advance(&g, &g.exits(), &mut p), MoveOutcome::default());
    }

    #[test]
    fn no_path_no_movement() {
        let g = corridor();
        let mut p = Person::new(AgentId(0), "p", Position::new(4, 1, 0), 3);
        assert_eq!(advance(&g, &g.exits(), &mut p), MoveOutcome::default());
        assert_eq!(p.position, Position::new(4, 1, 0));
    }
}
