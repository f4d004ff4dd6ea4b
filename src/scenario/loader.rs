//! Load scenarios from TOML
//!
//! ```toml
//! [config]
//! ranged_range = 7.0
//!
//! [[structures]]
//! name = "Keep"
//! x = 10.0
//! y = 10.0
//!
//! [[agents]]
//! name = "Zug"
//! type = "Soldier"
//! x = 0.0
//! y = 0.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::Point;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureSpec {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: SimulationConfig,
    #[serde(default)]
    pub structures: Vec<StructureSpec>,
    #[serde(default)]
    pub agents: Vec<AgentSpec>,
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.config.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let scenario = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded scenario {} ({} agents, {} structures)",
            path.display(),
            scenario.agents.len(),
            scenario.structures.len()
        );
        Ok(scenario)
    }

    /// Build a fresh world. Structures are added before agents.
    pub fn build_world(&self) -> Result<World> {
        let mut world = World::with_config(self.config.clone());
        for structure in &self.structures {
            world.add_structure(&structure.name, Point::new(structure.x, structure.y))?;
        }
        for agent in &self.agents {
            world.spawn(&agent.kind, &agent.name, Point::new(agent.x, agent.y))?;
        }
        Ok(world)
    }
}
