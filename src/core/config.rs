//! Simulation configuration with documented constants
//!
//! Role constants are fixed when an agent is created, so changing them
//! only affects agents spawned afterwards.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Configuration for agent construction
///
/// Scenario files may override any field through a `[config]` table;
/// missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === AGENT IDENTITY ===
    /// Health every agent starts with
    pub initial_health: u32,

    /// Distance covered per tick while moving (world units)
    pub agent_speed: f64,

    // === MELEE ROLE ===
    /// Damage dealt per strike by a Soldier
    pub melee_strength: u32,

    /// Maximum strike distance for a Soldier
    pub melee_range: f64,

    // === RANGED ROLE ===
    /// Damage dealt per shot by an Archer
    pub ranged_strength: u32,

    /// Maximum shot distance for an Archer. Also bounds autonomous
    /// target acquisition.
    pub ranged_range: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_health: 5,
            agent_speed: 5.0,

            melee_strength: 2,
            melee_range: 2.0,

            ranged_strength: 1,
            ranged_range: 6.0,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.initial_health == 0 {
            return Err(SimError::Config("initial_health must be positive".into()));
        }
        if self.melee_strength == 0 || self.ranged_strength == 0 {
            return Err(SimError::Config("attack strengths must be positive".into()));
        }
        for (field, value) in [
            ("agent_speed", self.agent_speed),
            ("melee_range", self.melee_range),
            ("ranged_range", self.ranged_range),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::Config(format!(
                    "{} must be a positive finite number, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.ranged_range > config.melee_range);
    }

    #[test]
    fn test_zero_strength_rejected() {
        let config = SimulationConfig {
            melee_strength: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn test_non_finite_range_rejected() {
        let config = SimulationConfig {
            ranged_range: f64::NAN,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SimulationConfig = toml::from_str("melee_range = 3.5").unwrap();
        assert_eq!(config.melee_range, 3.5);
        assert_eq!(config.initial_health, 5);
    }
}
