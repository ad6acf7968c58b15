//! Path staleness and the any-exit replanning policy.

use evac_core::{Grid, Path, Position};
use evac_paths::astar_path;

use crate::agent::Person;
use crate::fire::path_has_fire;

/// A path is stale when it is empty or fire sits anywhere from the
/// person's current waypoint onwards.
pub fn is_stale(grid: &Grid, person: &Person) -> bool {
    person.path.is_empty() || path_has_fire(grid, person.remaining())
}

/// Shortest fire-free A* route from `from` to any exit.
///
/// Every exit is tried; routes touching fire are discarded (so a person
/// standing in fire has no escape). The route with the fewest positions
/// wins, ties going to the earlier exit in `exits` order.
pub fn plan_escape(grid: &Grid, exits: &[Position], from: Position) -> Option<Path> {
    let mut best: Option<Path> = None;
    for &exit in exits {
        let Some(path) = astar_path(grid, from, exit) else {
            continue;
        };
        if path_has_fire(grid, &path) {
            continue;
        }
        if best.as_ref().is_none_or(|b| path.len() < b.len()) {
            best = Some(path);
        }
    }
    best
}

/// What [`replan`] did to a person.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Replan {
    /// Evacuated, or the current path is still safe.
    Kept,
    /// A new fire-free path was assigned.
    Rerouted,
    /// No exit is reachable; the path was left untouched.
    Trapped,
}

/// Re-plan `person` if their path is stale.
///
/// On success the new path replaces the old one (progress restarts at its
/// first waypoint) and the trapped flag is cleared. Otherwise the person
/// is marked trapped and keeps the stale path.
pub fn replan(grid: &Grid, exits: &[Position], person: &mut Person) -> Replan {
    if person.evacuated || !is_stale(grid, person) {
        return Replan::Kept;
    }
    match plan_escape(grid, exits, person.position) {
        Some(path) => {
            log::debug!(
                "{} {}: rerouted, {} waypoints to {}",
                person.id,
                person.name,
                path.len(),
                path.last().copied().unwrap_or(person.position)
            );
            person.set_path(path);
            person.trapped = false;
            Replan::Rerouted
        }
        None => {
            person.trapped = true;
            Replan::Trapped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentId;

    /// Exits at both ends of a corridor; the west one is nearer to (3, 1).
    fn corridor() -> Grid {
        Grid::from_floors(&["\
#########
#E.....E#
#########"])
        .unwrap()
    }

    fn person_at(p: Position) -> Person {
        Person::new(AgentId(0), "p", p, 1)
    }

    #[test]
    fn empty_path_is_stale() {
        let g = corridor();
        assert!(is_stale(&g, &person_at(Position::new(3, 1, 0))));
    }

    #[test]
    fn fire_behind_does_not_matter() {
        let mut g = corridor();
        let mut p = person_at(Position::new(3, 1, 0));
        p.set_path((2..=7).map(|x| Position::new(x, 1, 0)).collect());
        p.path_index = 2;
        assert!(!is_stale(&g, &p));
        g.ignite(Position::new(2, 1, 0)).unwrap();
        assert!(!is_stale(&g, &p));
        g.ignite(Position::new(6, 1, 0)).unwrap();
        assert!(is_stale(&g, &p));
    }

    #[test]
    fn picks_the_nearest_exit() {
        let g = corridor();
        let exits = g.exits();
        let mut p = person_at(Position::new(3, 1, 0));
        assert_eq!(replan(&g, &exits, &mut p), Replan::Rerouted);
        assert_eq!(p.target, Some(Position::new(1, 1, 0)));
        assert_eq!(p.path.first(), Some(&Position::new(3, 1, 0)));
        assert_eq!(p.path_index, 0);
        // Safe path: nothing to do.
        assert_eq!(replan(&g, &exits, &mut p), Replan::Kept);
    }

    #[test]
    fn ties_go_to_the_first_exit() {
        let g = corridor();
        let exits = g.exits();
        let path = plan_escape(&g, &exits, Position::new(4, 1, 0)).unwrap();
        assert_eq!(path.last(), Some(&Position::new(1, 1, 0)));
    }

    #[test]
    fn reroutes_around_new_fire() {
        let mut g = corridor();
        let exits = g.exits();
        let mut p = person_at(Position::new(3, 1, 0));
        replan(&g, &exits, &mut p);
        g.ignite(Position::new(2, 1, 0)).unwrap();
        assert_eq!(replan(&g, &exits, &mut p), Replan::Rerouted);
        assert_eq!(p.target, Some(Position::new(7, 1, 0)));
        assert!(!path_has_fire(&g, &p.path));
        assert!(!p.trapped);
    }

    #[test]
    fn trapped_keeps_old_path() {
        let mut g = corridor();
        let exits = g.exits();
        let mut p = person_at(Position::new(3, 1, 0));
        replan(&g, &exits, &mut p);
        let old = p.path.clone();
        g.ignite(Position::new(2, 1, 0)).unwrap();
        g.ignite(Position::new(4, 1, 0)).unwrap();
        assert_eq!(replan(&g, &exits, &mut p), Replan::Trapped);
        assert!(p.trapped);
        assert_eq!(p.path, old);
        // Still stale: re-evaluated on every call.
        assert_eq!(replan(&g, &exits, &mut p), Replan::Trapped);
    }

    #[test]
    fn standing_in_fire_means_trapped() {
        let mut g = corridor();
        g.ignite(Position::new(3, 1, 0)).unwrap();
        let exits = g.exits();
        assert_eq!(plan_escape(&g, &exits, Position::new(3, 1, 0)), None);
    }

    #[test]
    fn evacuated_are_left_alone() {
        let g = corridor();
        let mut p = person_at(Position::new(1, 1, 0));
        p.evacuated = true;
        assert_eq!(replan(&g, &g.exits(), &mut p), Replan::Kept);
        assert!(p.path.is_empty());
    }
}
