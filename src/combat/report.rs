//! Reports produced by state transitions during commands and ticks
//!
//! Tick-time conditions never surface as errors; they show up here instead.

use serde::{Deserialize, Serialize};

use crate::combat::role::RoleKind;
use crate::core::types::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Report {
    /// Agent locked onto a target
    Engaged { agent: String, target: String },
    /// Agent struck its target
    Strike {
        agent: String,
        target: String,
        role: RoleKind,
    },
    /// Target died or disappeared before the strike
    TargetLost { agent: String },
    /// Target moved beyond attack range
    OutOfRange { agent: String },
    /// Target died from this agent's strike
    Victory { agent: String, target: String },
    /// Ranged agent running to a structure after being hit
    Fleeing { agent: String, structure: String },
    /// Ranged agent was hit but there is no structure to run to
    NowhereToFlee { agent: String },
    /// Combatant declined a stop request
    RefusedStop { agent: String },
    /// Non-combatant stopped moving
    Stopped { agent: String },
    Moving { agent: String, destination: Point },
    Arrived { agent: String },
    /// Agent took damage and survived
    Wounded { agent: String, health: u32 },
    Died { agent: String },
    /// Dead agent removed from the world
    Removed { agent: String },
}

impl Report {
    /// Name of the agent the report is about
    pub fn agent(&self) -> &str {
        match self {
            Report::Engaged { agent, .. }
            | Report::Strike { agent, .. }
            | Report::TargetLost { agent }
            | Report::OutOfRange { agent }
            | Report::Victory { agent, .. }
            | Report::Fleeing { agent, .. }
            | Report::NowhereToFlee { agent }
            | Report::RefusedStop { agent }
            | Report::Stopped { agent }
            | Report::Moving { agent, .. }
            | Report::Arrived { agent }
            | Report::Wounded { agent, .. }
            | Report::Died { agent }
            | Report::Removed { agent } => agent,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Engaged { agent, .. } => write!(f, "{}: I'm attacking!", agent),
            Report::Strike { agent, role, .. } => write!(f, "{}: {}", agent, role.strike_sound()),
            Report::TargetLost { agent } => write!(f, "{}: Target is dead", agent),
            Report::OutOfRange { agent } => write!(f, "{}: Target is now out of range", agent),
            Report::Victory { agent, .. } => write!(f, "{}: I triumph!", agent),
            Report::Fleeing { agent, structure } => {
                write!(f, "{}: I'm going to run away to {}", agent, structure)
            }
            Report::NowhereToFlee { agent } => write!(f, "{}: Nowhere to run!", agent),
            Report::RefusedStop { agent } => write!(f, "{}: Don't bother me", agent),
            Report::Stopped { agent } => write!(f, "{}: Stopped", agent),
            Report::Moving { agent, destination } => {
                write!(f, "{}: I'm on the way to {}", agent, destination)
            }
            Report::Arrived { agent } => write!(f, "{}: I'm there!", agent),
            Report::Wounded { agent, .. } => write!(f, "{}: Ouch!", agent),
            Report::Died { agent } => write!(f, "{}: Arrggh!", agent),
            Report::Removed { agent } => write!(f, "{} disappears", agent),
        }
    }
}
