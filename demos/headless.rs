//! Headless evacuation demo: compares every search on the default building,
//! then runs a seeded fire scenario.
//!
//! Run: cargo run --bin evac-headless
//! Set `RUST_LOG=debug` to see reroutes and per-tick summaries.

use std::error::Error;

use evac_core::{LayoutConfig, Position, generate_building};
use evac_paths::{Algorithm, SearchParams, compare_algorithms};
use evac_sim::{SimConfig, Simulation, path_statistics, plan_escape};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEED: u64 = 42;
const TICKS: u64 = 60;

const PEOPLE: [Position; 4] = [
    Position::new(3, 3, 2),
    Position::new(16, 16, 1),
    Position::new(9, 4, 0),
    Position::new(15, 3, 2),
];

const FIRES: [Position; 2] = [Position::new(8, 8, 0), Position::new(4, 15, 1)];

fn run() -> Result<(), Box<dyn Error>> {
    let grid = generate_building(&LayoutConfig::default())?;
    let exits = grid.exits();
    println!("Building {}: exits at {exits:?}", grid.extent());
    println!("{}", grid.floor_plan(0));

    let params = SearchParams::default();
    let mut rng = StdRng::seed_from_u64(SEED);

    for &start in &PEOPLE {
        let Some(exit) = plan_escape(&grid, &exits, start).and_then(|p| p.last().copied()) else {
            println!("{start}: no exit reachable");
            continue;
        };
        println!("\n{start} -> {exit}");
        println!(
            "{:<14} {:>6} {:>8} {:>7} {:>10}",
            "algorithm", "cells", "cost", "floors", "time"
        );
        let reports = compare_algorithms(&Algorithm::ALL, &grid, start, exit, &params, &mut rng)?;
        for r in &reports {
            match &r.path {
                Some(path) => {
                    let stats = path_statistics(path);
                    println!(
                        "{:<14} {:>6} {:>8.2} {:>7} {:>10}",
                        r.algorithm.name(),
                        stats.length,
                        stats.distance,
                        stats.floor_changes,
                        format!("{:.1?}", r.elapsed)
                    );
                }
                None => println!("{:<14} {:>6}", r.algorithm.name(), "-"),
            }
        }
    }

    let mut sim = Simulation::new(grid, SimConfig::seeded(SEED));
    for &p in &FIRES {
        sim.ignite(p)?;
    }
    for &p in &PEOPLE {
        sim.add_person(p, None)?;
    }

    log::info!("fire scenario: {} fires, {} people", FIRES.len(), PEOPLE.len());
    println!("\nFire scenario (seed {SEED})");
    for _ in 0..TICKS {
        let report = sim.step();
        let s = report.stats;
        println!(
            "tick {:>3}: fire {:>4}  evacuated {}/{}  trapped {}",
            s.tick, s.fire_cells, s.evacuated, s.total_people, s.trapped
        );
        if sim.is_settled() {
            break;
        }
    }

    for p in sim.people() {
        let state = if p.evacuated {
            "evacuated"
        } else if p.trapped {
            "trapped"
        } else {
            "still inside"
        };
        println!("{} at {}: {state}", p.name, p.position);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
