//! Tick system - runs one simulation step over every live agent
//!
//! Agents are updated once each, in name order. Agents killed during the
//! tick are removed from the world at its end.

use crate::combat::behavior;
use crate::combat::report::Report;
use crate::world::World;

/// Advance the world one tick, returning the reports it produced
pub fn run_simulation_tick(world: &mut World) -> Vec<Report> {
    for id in world.agent_ids() {
        // Agents killed earlier in this tick are skipped
        if world.agent(id).is_some_and(|a| a.is_alive()) {
            behavior::update(world, id);
        }
    }

    let removed = world.remove_dead();
    if !removed.is_empty() {
        tracing::debug!(
            "Tick {}: removed {} dead agent(s)",
            world.current_tick,
            removed.len()
        );
    }

    world.tick();
    world.drain_reports()
}

/// Run `ticks` ticks, stopping early once fewer than two agents are alive
pub fn run_until_settled(world: &mut World, ticks: u32) -> Vec<Report> {
    let mut reports = Vec::new();
    for _ in 0..ticks {
        reports.extend(run_simulation_tick(world));
        if world.living_count() < 2 {
            break;
        }
    }
    reports
}
