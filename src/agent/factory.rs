//! Agent construction from type labels

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::combat::role::CombatRole;
use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::Point;

/// Agent types known to the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    /// Melee combatant
    Soldier,
    /// Ranged combatant
    Archer,
    /// Non-combatant with default agent behavior
    Peasant,
}

impl AgentKind {
    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            "Soldier" => Ok(AgentKind::Soldier),
            "Archer" => Ok(AgentKind::Archer),
            "Peasant" => Ok(AgentKind::Peasant),
            other => Err(SimError::UnknownType(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgentKind::Soldier => "Soldier",
            AgentKind::Archer => "Archer",
            AgentKind::Peasant => "Peasant",
        }
    }

    fn role(&self, config: &SimulationConfig) -> Option<CombatRole> {
        match self {
            AgentKind::Soldier => Some(CombatRole::melee(config)),
            AgentKind::Archer => Some(CombatRole::ranged(config)),
            AgentKind::Peasant => None,
        }
    }
}

/// Create an agent of the given type. Fails with `UnknownType` for an
/// unrecognized label.
pub fn create(
    type_tag: &str,
    name: impl Into<String>,
    location: Point,
    config: &SimulationConfig,
) -> Result<Agent> {
    let kind = AgentKind::from_label(type_tag)?;
    Ok(Agent::new(
        name,
        kind,
        location,
        config.initial_health,
        config.agent_speed,
        kind.role(config),
    ))
}
