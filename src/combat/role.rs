//! Combat role component for combat-capable agents
//!
//! The role set is closed: every agent that can fight is either Melee or
//! Ranged, and behavior differences are selected by matching on the tag.

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::types::{AgentId, Point};

/// Behavioral variant of a combat role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    /// Strikes adjacent targets and counter-attacks when struck
    Melee,
    /// Shoots at range, acquires targets on its own and flees when struck
    Ranged,
}

impl RoleKind {
    /// Sound made on each successful strike
    pub fn strike_sound(&self) -> &'static str {
        match self {
            RoleKind::Melee => "Clang!",
            RoleKind::Ranged => "Twang!",
        }
    }
}

/// Observable state of the combat state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatPhase {
    Idle,
    Attacking,
    /// Terminal
    Dead,
}

/// Combat role component
///
/// `target` is a non-owning handle. It is resolved through the world on
/// every use and may point at an agent that has died or been removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatRole {
    pub kind: RoleKind,
    pub attack_strength: u32,
    pub attack_range: f64,
    attacking: bool,
    target: Option<AgentId>,
}

impl CombatRole {
    pub fn new(kind: RoleKind, attack_strength: u32, attack_range: f64) -> Self {
        Self {
            kind,
            attack_strength,
            attack_range,
            attacking: false,
            target: None,
        }
    }

    pub fn melee(config: &SimulationConfig) -> Self {
        Self::new(RoleKind::Melee, config.melee_strength, config.melee_range)
    }

    pub fn ranged(config: &SimulationConfig) -> Self {
        Self::new(RoleKind::Ranged, config.ranged_strength, config.ranged_range)
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub fn target(&self) -> Option<AgentId> {
        self.target
    }

    /// Range check shared by command-time validation and tick-time resolution
    pub fn in_range(&self, from: Point, to: Point) -> bool {
        from.distance(&to) <= self.attack_range
    }

    /// Lock onto a target
    pub fn engage(&mut self, target: AgentId) {
        self.attacking = true;
        self.target = Some(target);
    }

    /// Back to Idle, forgetting the target
    pub fn disengage(&mut self) {
        self.attacking = false;
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_roles_start_idle() {
        let config = SimulationConfig::default();
        let melee = CombatRole::melee(&config);
        let ranged = CombatRole::ranged(&config);

        assert!(!melee.is_attacking());
        assert!(melee.target().is_none());
        assert_eq!(melee.attack_strength, 2);
        assert_eq!(ranged.attack_strength, 1);
        assert!(ranged.attack_range > melee.attack_range);
    }

    #[test]
    fn test_engage_then_disengage() {
        let mut ids: SlotMap<AgentId, ()> = SlotMap::with_key();
        let target = ids.insert(());

        let mut role = CombatRole::melee(&SimulationConfig::default());
        role.engage(target);
        assert!(role.is_attacking());
        assert_eq!(role.target(), Some(target));

        role.disengage();
        assert!(!role.is_attacking());
        assert_eq!(role.target(), None);
    }

    #[test]
    fn test_range_boundary_is_inclusive() {
        let role = CombatRole::new(RoleKind::Melee, 2, 2.0);
        let origin = Point::new(0.0, 0.0);
        assert!(role.in_range(origin, Point::new(2.0, 0.0)));
        assert!(!role.in_range(origin, Point::new(2.0, 0.1)));
    }

    #[test]
    fn test_strike_sounds_differ() {
        assert_eq!(RoleKind::Melee.strike_sound(), "Clang!");
        assert_eq!(RoleKind::Ranged.strike_sound(), "Twang!");
    }
}
