//! Skirmish - Entry Point
//!
//! Loads a scenario (or a small built-in one), then either runs a fixed
//! number of ticks headless or drops into an interactive command prompt.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use skirmish::combat::Report;
use skirmish::command::{parse_command, CommandExecutor};
use skirmish::core::error::Result;
use skirmish::core::types::Point;
use skirmish::scenario::Scenario;
use skirmish::simulation::run_until_settled;
use skirmish::world::World;

#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Turn-based melee and ranged combat simulation")]
struct Args {
    /// Scenario TOML file (a built-in skirmish is used when omitted)
    #[arg(long, short = 's')]
    scenario: Option<PathBuf>,

    /// Run this many ticks without prompting, then print a summary
    #[arg(long)]
    ticks: Option<u32>,

    /// Summary format for headless runs
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct RunSummary {
    ticks: u64,
    survivors: Vec<Survivor>,
    reports: Vec<Report>,
}

#[derive(Serialize)]
struct Survivor {
    name: String,
    kind: String,
    health: u32,
    location: Point,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skirmish=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut world = match &args.scenario {
        Some(path) => Scenario::load(path)?.build_world()?,
        None => default_world()?,
    };
    tracing::info!("Skirmish starting with {} agents", world.agent_count());

    match args.ticks {
        Some(ticks) => run_headless(&mut world, ticks, args.format),
        None => run_interactive(&mut world),
    }
}

/// Built-in scenario: two soldiers, an archer, a peasant and two refuges
fn default_world() -> Result<World> {
    let mut world = World::new();
    world.add_structure("Keep", Point::new(20.0, 20.0))?;
    world.add_structure("Farm", Point::new(-10.0, 5.0))?;
    world.spawn("Soldier", "Zug", Point::new(0.0, 0.0))?;
    world.spawn("Soldier", "Bruk", Point::new(1.5, 0.0))?;
    world.spawn("Archer", "Iriel", Point::new(5.0, 3.0))?;
    world.spawn("Peasant", "Pat", Point::new(-4.0, 2.0))?;
    Ok(world)
}

fn run_headless(world: &mut World, ticks: u32, format: OutputFormat) -> Result<()> {
    let reports = run_until_settled(world, ticks);

    match format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report);
            }
            println!(
                "\nFinished after {} ticks, {} agent(s) remaining.",
                world.current_tick,
                world.agent_count()
            );
        }
        OutputFormat::Json => {
            let summary = RunSummary {
                ticks: world.current_tick,
                survivors: world
                    .agents()
                    .map(|(_, agent)| Survivor {
                        name: agent.name().to_string(),
                        kind: agent.kind().label().to_string(),
                        health: agent.health(),
                        location: agent.location(),
                    })
                    .collect(),
                reports,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn run_interactive(world: &mut World) -> Result<()> {
    println!("\n=== SKIRMISH ===");
    println!("Commands:");
    println!("  <agent> attack <target>    - Order an attack");
    println!("  <agent> move <x> <y>      - Move an agent");
    println!("  <agent> stop              - Ask an agent to stop");
    println!("  describe <agent>          - Describe one agent");
    println!("  create <name> <type> <x> <y> - Create a Soldier, Archer or Peasant");
    println!("  structure <name> <x> <y>  - Add a structure");
    println!("  status / s                - Describe everything");
    println!("  go / t                    - Advance one tick");
    println!("  run <n>                   - Advance n ticks");
    println!("  quit / q                  - Exit");
    println!();

    loop {
        print!("Tick {} > ", world.current_tick);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let result =
            parse_command(input).and_then(|command| CommandExecutor::execute(world, &command));
        match result {
            Ok(result) => {
                for line in &result.output {
                    println!("{}", line);
                }
                for report in &result.reports {
                    println!("{}", report);
                }
                if result.quit {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!("Command rejected: {}", e);
                println!("{}", e);
            }
        }
    }

    println!(
        "\nGoodbye! Final state: {} agents, {} ticks elapsed.",
        world.agent_count(),
        world.current_tick
    );
    Ok(())
}
