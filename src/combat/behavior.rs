//! Combat behavior - the per-tick attack/flee state machine
//!
//! Every operation takes the world explicitly and the acting agent's handle.
//! Role differences are selected by matching on `RoleKind`:
//!
//! - Melee counter-attacks its attacker when struck while idle.
//! - Ranged acquires the nearest agent in range on its own, and runs to
//!   the nearest structure when struck.
//!
//! Only `start_attacking` can fail. Everything that goes wrong mid-tick
//! (lost target, target out of range, death) becomes a state transition
//! plus a `Report`.

use crate::combat::report::Report;
use crate::combat::role::{CombatRole, RoleKind};
use crate::core::error::{Result, SimError, TargetRejection};
use crate::core::types::{AgentId, Point};
use crate::world::World;

/// Snapshot of a living combatant, taken before acting
struct Combatant {
    name: String,
    location: Point,
    role: CombatRole,
}

fn living_combatant(world: &World, id: AgentId) -> Option<Combatant> {
    let agent = world.agent(id).filter(|a| a.is_alive())?;
    let role = *agent.role()?;
    Some(Combatant {
        name: agent.name().to_string(),
        location: agent.location(),
        role,
    })
}

fn role_mut(world: &mut World, id: AgentId) -> Option<&mut CombatRole> {
    world.agent_mut(id)?.role.as_mut()
}

fn is_alive(world: &World, id: AgentId) -> bool {
    world.agent(id).is_some_and(|a| a.is_alive())
}

fn disengage(world: &mut World, id: AgentId) {
    if let Some(role) = role_mut(world, id) {
        role.disengage();
    }
}

fn engage(world: &mut World, id: AgentId, target: AgentId) {
    let Some(role) = role_mut(world, id) else {
        return;
    };
    role.engage(target);

    let agent = world.agent(id).map(|a| a.name().to_string());
    let target = world.agent(target).map(|a| a.name().to_string());
    if let (Some(agent), Some(target)) = (agent, target) {
        world.report(Report::Engaged { agent, target });
    }
}

/// Advance one agent by one tick
pub fn update(world: &mut World, id: AgentId) {
    let Some(agent) = world.agent_mut(id) else {
        return;
    };
    if !agent.is_alive() {
        return;
    }
    if let Some(report) = agent.advance() {
        world.report(report);
    }

    let Some(combatant) = living_combatant(world, id) else {
        return;
    };

    let outcome = if combatant.role.is_attacking() {
        resolve_attack(world, id, &combatant)
    } else {
        AttackOutcome::Idle
    };

    match combatant.role.kind {
        RoleKind::Melee => {}
        RoleKind::Ranged => {
            let free = matches!(outcome, AttackOutcome::Idle | AttackOutcome::Victory);
            if free && is_alive(world, id) {
                acquire_target(world, id);
            }
        }
    }
}

/// How an attack resolved this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttackOutcome {
    /// Was not attacking when the tick started
    Idle,
    Continuing,
    /// Target lost or out of range; the agent waits for the next tick
    Ended,
    Victory,
}

/// Strike the current target if it is still valid
fn resolve_attack(world: &mut World, id: AgentId, combatant: &Combatant) -> AttackOutcome {
    let agent = combatant.name.clone();
    let target = combatant
        .role
        .target()
        .and_then(|target| world.agent(target).filter(|a| a.is_alive()).map(|a| (target, a)))
        .map(|(target, a)| (target, a.name().to_string(), a.location()));

    let Some((target_id, target_name, target_location)) = target else {
        disengage(world, id);
        world.report(Report::TargetLost { agent });
        return AttackOutcome::Ended;
    };

    if !combatant.role.in_range(combatant.location, target_location) {
        disengage(world, id);
        world.report(Report::OutOfRange { agent });
        return AttackOutcome::Ended;
    }

    world.report(Report::Strike {
        agent: agent.clone(),
        target: target_name.clone(),
        role: combatant.role.kind,
    });
    take_hit(world, target_id, combatant.role.attack_strength, id);

    if !is_alive(world, target_id) {
        disengage(world, id);
        world.report(Report::Victory {
            agent,
            target: target_name,
        });
        return AttackOutcome::Victory;
    }
    AttackOutcome::Continuing
}

/// Lock onto the nearest living agent if it is within range
fn acquire_target(world: &mut World, id: AgentId) {
    let Some(combatant) = living_combatant(world, id) else {
        return;
    };
    let Some(closest) = world.find_closest_agent(id) else {
        return;
    };
    let Some(location) = world.agent(closest).map(|a| a.location()) else {
        return;
    };
    if combatant.role.in_range(combatant.location, location) {
        engage(world, id, closest);
    }
}

/// Command an agent to attack `target`
///
/// Rejected when the target is the agent itself, is not alive (or no longer
/// exists), or is beyond attack range.
pub fn start_attacking(world: &mut World, id: AgentId, target: AgentId) -> Result<()> {
    let agent = world
        .agent(id)
        .ok_or(SimError::AgentGone)?;
    let name = agent.name().to_string();
    let Some(role) = agent.role().copied().filter(|_| agent.is_alive()) else {
        return Err(SimError::CannotAttack(name));
    };

    if target == id {
        return Err(SimError::invalid_target(name, TargetRejection::SelfTarget));
    }
    let Some(target_agent) = world.agent(target).filter(|a| a.is_alive()) else {
        return Err(SimError::invalid_target(name, TargetRejection::NotAlive));
    };
    if !role.in_range(agent.location(), target_agent.location()) {
        return Err(SimError::invalid_target(name, TargetRejection::OutOfRange));
    }

    engage(world, id, target);
    Ok(())
}

/// Apply damage to `id` from `attacker` and run the role's reaction
pub fn take_hit(world: &mut World, id: AgentId, amount: u32, attacker: AgentId) {
    let Some(agent) = world.agent_mut(id) else {
        return;
    };
    if !agent.is_alive() {
        return;
    }
    let died = agent.lose_health(amount);
    let name = agent.name().to_string();
    let health = agent.health();
    let role = agent.role;

    if died {
        if role.is_some_and(|r| r.is_attacking()) {
            disengage(world, id);
        }
        world.report(Report::Died { agent: name });
        return;
    }
    world.report(Report::Wounded {
        agent: name,
        health,
    });

    let Some(role) = role else {
        return;
    };
    if attacker == id || !is_alive(world, attacker) {
        return;
    }

    match role.kind {
        RoleKind::Melee => {
            if !role.is_attacking() {
                engage(world, id, attacker);
            }
        }
        RoleKind::Ranged => flee(world, id),
    }
}

/// Run to the nearest structure. With no structure at all the agent
/// stays where it is.
fn flee(world: &mut World, id: AgentId) {
    let refuge = world
        .find_closest_structure(id)
        .and_then(|sid| world.structure(sid))
        .map(|s| (s.name().to_string(), s.location()));

    let Some(agent) = world.agent_mut(id) else {
        return;
    };
    let name = agent.name().to_string();
    match refuge {
        Some((structure, location)) => {
            let movement = agent.move_to(location);
            world.report(Report::Fleeing {
                agent: name,
                structure,
            });
            world.report(movement);
        }
        None => world.report(Report::NowhereToFlee { agent: name }),
    }
}

/// Ask an agent to cancel its current activity. Combatants refuse.
pub fn stop(world: &mut World, id: AgentId) {
    let Some(agent) = world.agent_mut(id) else {
        return;
    };
    let name = agent.name().to_string();
    if agent.role.is_some() {
        world.report(Report::RefusedStop { agent: name });
    } else {
        agent.stop_moving();
        world.report(Report::Stopped { agent: name });
    }
}

/// Human-readable state summary
pub fn describe(world: &World, id: AgentId) -> Option<String> {
    let agent = world.agent(id)?;
    let mut lines = agent.describe_identity();

    if let Some(role) = agent.role() {
        if role.is_attacking() {
            let target = role
                .target()
                .and_then(|t| world.agent(t))
                .filter(|t| t.is_alive());
            match target {
                Some(target) => lines.push(format!("   Attacking {}", target.name())),
                None => lines.push("   Attacking dead target".to_string()),
            }
        } else {
            lines.push("   Not attacking".to_string());
        }
    }

    Some(lines.join("\n"))
}
