//! Command execution against the world
//!
//! Command-time failures come back as errors and are never retried. Tick
//! effects come back as reports.

use crate::combat::behavior;
use crate::combat::report::Report;
use crate::command::parser::Command;
use crate::core::error::{Result, SimError};
use crate::core::types::{AgentId, Point};
use crate::simulation::tick::run_simulation_tick;
use crate::world::World;

/// Executes parsed commands
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn execute(world: &mut World, command: &Command) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::default();

        match command {
            Command::Attack { agent, target } => {
                let agent = lookup(world, agent)?;
                let target = lookup(world, target)?;
                behavior::start_attacking(world, agent, target)?;
            }
            Command::Stop { agent } => {
                let agent = lookup(world, agent)?;
                behavior::stop(world, agent);
            }
            Command::Move { agent, x, y } => {
                let id = lookup(world, agent)?;
                let mover = world
                    .agent_mut(id)
                    .ok_or_else(|| SimError::UnknownAgent(agent.clone()))?;
                if !mover.is_alive() {
                    return Err(SimError::AgentDead(agent.clone()));
                }
                let report = mover.move_to(Point::new(*x, *y));
                world.report(report);
            }
            Command::Describe { agent } => {
                let id = lookup(world, agent)?;
                result.output.extend(behavior::describe(world, id));
            }
            Command::Status => {
                result.output.push(format!("Tick {}", world.current_tick));
                let ids: Vec<AgentId> = world.agent_ids();
                result
                    .output
                    .extend(ids.into_iter().filter_map(|id| behavior::describe(world, id)));
                result
                    .output
                    .extend(world.structures().map(|(_, s)| s.describe()));
            }
            Command::Go => {
                result.reports.extend(run_simulation_tick(world));
            }
            Command::Run(n) => {
                for _ in 0..*n {
                    result.reports.extend(run_simulation_tick(world));
                }
            }
            Command::Create { name, kind, x, y } => {
                world.spawn(kind, name, Point::new(*x, *y))?;
            }
            Command::Structure { name, x, y } => {
                world.add_structure(name, Point::new(*x, *y))?;
            }
            Command::Quit => result.quit = true,
        }

        result.reports.extend(world.drain_reports());
        Ok(result)
    }
}

fn lookup(world: &World, name: &str) -> Result<AgentId> {
    world
        .agent_by_name(name)
        .ok_or_else(|| SimError::UnknownAgent(name.to_string()))
}

/// Result of executing a command
#[derive(Debug, Default)]
pub struct ExecutionResult {
    pub reports: Vec<Report>,
    /// Descriptions requested by the command
    pub output: Vec<String>,
    pub quit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parser::parse_command;
    use crate::core::error::TargetRejection;

    fn run(world: &mut World, line: &str) -> Result<ExecutionResult> {
        CommandExecutor::execute(world, &parse_command(line)?)
    }

    #[test]
    fn test_execute_attack_command() {
        let mut world = World::new();
        run(&mut world, "create Zug Soldier 0 0").unwrap();
        run(&mut world, "create Pat Peasant 1 0").unwrap();

        let result = run(&mut world, "Zug attack Pat").unwrap();
        assert_eq!(
            result.reports,
            vec![Report::Engaged {
                agent: "Zug".into(),
                target: "Pat".into()
            }]
        );

        let result = run(&mut world, "go").unwrap();
        assert!(result.reports.iter().any(|r| matches!(r, Report::Strike { .. })));
    }

    #[test]
    fn test_unknown_names_rejected() {
        let mut world = World::new();
        run(&mut world, "create Zug Soldier 0 0").unwrap();

        assert!(matches!(
            run(&mut world, "Zug attack Nobody"),
            Err(SimError::UnknownAgent(name)) if name == "Nobody"
        ));
        assert!(matches!(
            run(&mut world, "Nobody stop"),
            Err(SimError::UnknownAgent(_))
        ));
    }

    #[test]
    fn test_invalid_target_propagates() {
        let mut world = World::new();
        run(&mut world, "create Zug Soldier 0 0").unwrap();

        let err = run(&mut world, "Zug attack Zug").unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidTarget {
                reason: TargetRejection::SelfTarget,
                ..
            }
        ));
    }

    #[test]
    fn test_create_unknown_type() {
        let mut world = World::new();
        let err = run(&mut world, "create Merlin Wizard 0 0").unwrap_err();
        assert!(matches!(err, SimError::UnknownType(_)));
    }

    #[test]
    fn test_status_lists_agents_and_structures() {
        let mut world = World::new();
        run(&mut world, "create Zug Soldier 0 0").unwrap();
        run(&mut world, "structure Keep 5 5").unwrap();

        let result = run(&mut world, "status").unwrap();
        assert_eq!(result.output[0], "Tick 0");
        assert!(result.output.iter().any(|l| l.starts_with("Soldier Zug")));
        assert!(result.output.iter().any(|l| l.starts_with("Structure Keep")));
    }

    #[test]
    fn test_move_then_run() {
        let mut world = World::new();
        run(&mut world, "create Pat Peasant 0 0").unwrap();
        run(&mut world, "Pat move 10 0").unwrap();

        let result = run(&mut world, "run 2").unwrap();
        assert!(result
            .reports
            .contains(&Report::Arrived { agent: "Pat".into() }));
        assert_eq!(world.current_tick, 2);
    }

    #[test]
    fn test_move_rejected_for_dead_agent() {
        let mut world = World::new();
        run(&mut world, "create Pat Peasant 0 0").unwrap();
        let pat = lookup(&world, "Pat").unwrap();
        behavior::take_hit(&mut world, pat, 10, pat);
        world.drain_reports();

        let err = run(&mut world, "Pat move 10 0").unwrap_err();
        assert!(matches!(err, SimError::AgentDead(ref name) if name == "Pat"));
        assert_eq!(err.to_string(), "Pat is dead");
        assert_eq!(world.agent(pat).unwrap().destination(), None);
    }

    #[test]
    fn test_quit() {
        let mut world = World::new();
        assert!(run(&mut world, "quit").unwrap().quit);
    }
}
