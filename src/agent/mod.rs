//! Agent identity: name, location, health and movement
//!
//! Combat behavior lives in `crate::combat`; an agent only carries the
//! role component.

pub mod factory;

pub use factory::{create, AgentKind};

use crate::combat::report::Report;
use crate::combat::role::{CombatPhase, CombatRole};
use crate::core::types::Point;

/// An actor in the simulation
#[derive(Debug, Clone)]
pub struct Agent {
    name: String,
    kind: AgentKind,
    location: Point,
    health: u32,
    speed: f64,
    destination: Option<Point>,
    pub(crate) role: Option<CombatRole>,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        kind: AgentKind,
        location: Point,
        health: u32,
        speed: f64,
        role: Option<CombatRole>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            location,
            health,
            speed,
            destination: None,
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_moving(&self) -> bool {
        self.destination.is_some()
    }

    pub fn destination(&self) -> Option<Point> {
        self.destination
    }

    pub fn role(&self) -> Option<&CombatRole> {
        self.role.as_ref()
    }

    /// Combat state, or `None` for agents that cannot fight
    pub fn combat_phase(&self) -> Option<CombatPhase> {
        let role = self.role.as_ref()?;
        Some(if !self.is_alive() {
            CombatPhase::Dead
        } else if role.is_attacking() {
            CombatPhase::Attacking
        } else {
            CombatPhase::Idle
        })
    }

    /// Subtract damage, flooring at zero. Returns true if this hit killed.
    pub fn lose_health(&mut self, amount: u32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        if self.is_alive() {
            return false;
        }
        self.destination = None;
        true
    }

    /// Start straight-line movement toward `destination`
    pub fn move_to(&mut self, destination: Point) -> Report {
        if destination == self.location {
            self.destination = None;
            return Report::Arrived {
                agent: self.name.clone(),
            };
        }
        self.destination = Some(destination);
        Report::Moving {
            agent: self.name.clone(),
            destination,
        }
    }

    pub fn stop_moving(&mut self) {
        self.destination = None;
    }

    /// Advance one tick of movement; reports arrival
    pub fn advance(&mut self) -> Option<Report> {
        let destination = self.destination?;
        let remaining = self.location.distance(&destination);
        if remaining <= self.speed {
            self.location = destination;
            self.destination = None;
            return Some(Report::Arrived {
                agent: self.name.clone(),
            });
        }
        self.location = self.location + (destination - self.location).normalize() * self.speed;
        None
    }

    /// Identity part of the description, without combat state
    pub(crate) fn describe_identity(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} {} at {}", self.kind.label(), self.name, self.location),
            format!("   Health is {}", self.health),
        ];
        if !self.is_alive() {
            lines.push("   Is dead".to_string());
        } else if let Some(destination) = self.destination {
            lines.push(format!(
                "   Moving at speed {} to {}",
                self.speed, destination
            ));
        } else {
            lines.push("   Stopped".to_string());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;

    fn peasant(location: Point) -> Agent {
        create("Peasant", "Pat", location, &SimulationConfig::default()).unwrap()
    }

    #[test]
    fn test_lose_health_is_exact_then_floors() {
        let mut agent = peasant(Point::default());
        assert!(!agent.lose_health(2));
        assert_eq!(agent.health(), 3);
        assert!(agent.is_alive());

        assert!(agent.lose_health(7));
        assert_eq!(agent.health(), 0);
        assert!(!agent.is_alive());
    }

    #[test]
    fn test_death_is_reported_once() {
        let mut agent = peasant(Point::default());
        assert!(agent.lose_health(5));
        assert!(!agent.lose_health(5));
        assert_eq!(agent.health(), 0);
    }

    #[test]
    fn test_movement_reaches_destination() {
        let mut agent = peasant(Point::new(0.0, 0.0));
        agent.move_to(Point::new(8.0, 0.0));
        assert!(agent.is_moving());

        assert!(agent.advance().is_none());
        assert_eq!(agent.location(), Point::new(5.0, 0.0));

        let arrived = agent.advance();
        assert!(matches!(arrived, Some(Report::Arrived { .. })));
        assert_eq!(agent.location(), Point::new(8.0, 0.0));
        assert!(!agent.is_moving());
    }

    #[test]
    fn test_move_to_current_location_arrives_immediately() {
        let mut agent = peasant(Point::new(1.0, 1.0));
        let report = agent.move_to(Point::new(1.0, 1.0));
        assert!(matches!(report, Report::Arrived { .. }));
        assert!(!agent.is_moving());
    }

    #[test]
    fn test_death_stops_movement() {
        let mut agent = peasant(Point::default());
        agent.move_to(Point::new(10.0, 0.0));
        agent.lose_health(10);
        assert!(!agent.is_moving());
    }

    #[test]
    fn test_non_combatant_has_no_phase() {
        let agent = peasant(Point::default());
        assert!(agent.combat_phase().is_none());
    }
}
