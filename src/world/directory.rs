//! World directory - owns every agent and structure
//!
//! Agents live in a generational slot map. Handles held by other agents
//! stop resolving once the agent is removed, so stale targets look the same
//! as dead ones.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use slotmap::SlotMap;

use crate::agent::{self, Agent};
use crate::combat::report::Report;
use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::{AgentId, Point, StructureId, Tick};
use crate::world::structure::Structure;

/// The simulation world containing all agents and structures
pub struct World {
    pub current_tick: Tick,
    config: SimulationConfig,
    agents: SlotMap<AgentId, Agent>,
    structures: SlotMap<StructureId, Structure>,
    // Name indices double as the fixed enumeration order
    agent_names: BTreeMap<String, AgentId>,
    structure_names: BTreeMap<String, StructureId>,
    reports: Vec<Report>,
}

impl World {
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            current_tick: 0,
            config,
            agents: SlotMap::with_key(),
            structures: SlotMap::with_key(),
            agent_names: BTreeMap::new(),
            structure_names: BTreeMap::new(),
            reports: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn ensure_name_free(&self, name: &str) -> Result<()> {
        if self.agent_names.contains_key(name) || self.structure_names.contains_key(name) {
            return Err(SimError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Insert an already constructed agent
    pub fn add_agent(&mut self, agent: Agent) -> Result<AgentId> {
        self.ensure_name_free(agent.name())?;
        let name = agent.name().to_string();
        let id = self.agents.insert(agent);
        self.agent_names.insert(name, id);
        Ok(id)
    }

    /// Construct an agent through the factory and insert it
    pub fn spawn(&mut self, type_tag: &str, name: &str, location: Point) -> Result<AgentId> {
        self.ensure_name_free(name)?;
        let agent = agent::create(type_tag, name, location, &self.config)?;
        tracing::debug!("Spawned {} {} at {}", type_tag, name, location);
        self.add_agent(agent)
    }

    pub fn add_structure(&mut self, name: &str, location: Point) -> Result<StructureId> {
        self.ensure_name_free(name)?;
        let id = self.structures.insert(Structure::new(name, location));
        self.structure_names.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id)
    }

    pub fn structure(&self, id: StructureId) -> Option<&Structure> {
        self.structures.get(id)
    }

    pub fn agent_by_name(&self, name: &str) -> Option<AgentId> {
        self.agent_names.get(name).copied()
    }

    pub fn structure_by_name(&self, name: &str) -> Option<StructureId> {
        self.structure_names.get(name).copied()
    }

    /// Agent handles in enumeration (name) order
    pub fn agent_ids(&self) -> Vec<AgentId> {
        self.agent_names.values().copied().collect()
    }

    /// Agents in enumeration order
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, &Agent)> + '_ {
        self.agent_names
            .values()
            .filter_map(move |&id| self.agents.get(id).map(|agent| (id, agent)))
    }

    /// Structures in enumeration order
    pub fn structures(&self) -> impl Iterator<Item = (StructureId, &Structure)> + '_ {
        self.structure_names
            .values()
            .filter_map(move |&id| self.structures.get(id).map(|s| (id, s)))
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn living_count(&self) -> usize {
        self.agents.values().filter(|a| a.is_alive()).count()
    }

    /// Nearest living agent other than `excluding`, ties broken by
    /// enumeration order
    pub fn find_closest_agent(&self, excluding: AgentId) -> Option<AgentId> {
        let origin = self.agents.get(excluding)?.location();
        self.agents()
            .filter(|&(id, agent)| id != excluding && agent.is_alive())
            .min_by_key(|(_, agent)| OrderedFloat(origin.distance(&agent.location())))
            .map(|(id, _)| id)
    }

    /// Nearest structure to the given agent
    pub fn find_closest_structure(&self, from: AgentId) -> Option<StructureId> {
        let origin = self.agents.get(from)?.location();
        self.structures()
            .min_by_key(|(_, structure)| OrderedFloat(origin.distance(&structure.location())))
            .map(|(id, _)| id)
    }

    /// Record a report for the current command or tick
    pub fn report(&mut self, report: Report) {
        tracing::debug!(tick = self.current_tick, "{}", report);
        self.reports.push(report);
    }

    pub fn drain_reports(&mut self) -> Vec<Report> {
        std::mem::take(&mut self.reports)
    }

    /// Remove every dead agent, returning their names
    pub fn remove_dead(&mut self) -> Vec<String> {
        let dead: Vec<(String, AgentId)> = self
            .agents()
            .filter(|(_, agent)| !agent.is_alive())
            .map(|(id, agent)| (agent.name().to_string(), id))
            .collect();

        for (name, id) in &dead {
            self.agents.remove(*id);
            self.agent_names.remove(name);
            tracing::info!("{} removed from the world", name);
            self.report(Report::Removed {
                agent: name.clone(),
            });
        }

        dead.into_iter().map(|(name, _)| name).collect()
    }

    pub fn tick(&mut self) {
        self.current_tick += 1;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique_across_agents_and_structures() {
        let mut world = World::new();
        world.spawn("Soldier", "Zug", Point::default()).unwrap();
        world.add_structure("Keep", Point::new(5.0, 5.0)).unwrap();

        assert!(matches!(
            world.spawn("Archer", "Zug", Point::default()),
            Err(SimError::DuplicateName(_))
        ));
        assert!(matches!(
            world.spawn("Peasant", "Keep", Point::default()),
            Err(SimError::DuplicateName(_))
        ));
        assert!(world.add_structure("Zug", Point::default()).is_err());
    }

    #[test]
    fn test_spawn_unknown_type_leaves_world_unchanged() {
        let mut world = World::new();
        let result = world.spawn("Dragon", "Smaug", Point::default());
        assert!(matches!(result, Err(SimError::UnknownType(_))));
        assert_eq!(world.agent_count(), 0);
        assert!(world.agent_by_name("Smaug").is_none());
    }

    #[test]
    fn test_enumeration_order_is_by_name() {
        let mut world = World::new();
        world.spawn("Peasant", "Cleo", Point::default()).unwrap();
        world.spawn("Peasant", "Abe", Point::default()).unwrap();
        world.spawn("Peasant", "Bea", Point::default()).unwrap();

        let names: Vec<&str> = world.agents().map(|(_, a)| a.name()).collect();
        assert_eq!(names, vec!["Abe", "Bea", "Cleo"]);
    }

    #[test]
    fn test_find_closest_agent_excludes_self_and_dead() {
        let mut world = World::new();
        let me = world.spawn("Archer", "Iriel", Point::new(0.0, 0.0)).unwrap();
        let near = world.spawn("Peasant", "Near", Point::new(1.0, 0.0)).unwrap();
        let far = world.spawn("Peasant", "Far", Point::new(4.0, 0.0)).unwrap();

        assert_eq!(world.find_closest_agent(me), Some(near));

        world.agent_mut(near).unwrap().lose_health(100);
        assert_eq!(world.find_closest_agent(me), Some(far));

        world.agent_mut(far).unwrap().lose_health(100);
        assert_eq!(world.find_closest_agent(me), None);
    }

    #[test]
    fn test_find_closest_ties_use_enumeration_order() {
        let mut world = World::new();
        let me = world.spawn("Archer", "Iriel", Point::new(0.0, 0.0)).unwrap();
        world.spawn("Peasant", "West", Point::new(-2.0, 0.0)).unwrap();
        let east = world.spawn("Peasant", "East", Point::new(2.0, 0.0)).unwrap();

        assert_eq!(world.find_closest_agent(me), Some(east));
    }

    #[test]
    fn test_find_closest_structure() {
        let mut world = World::new();
        let me = world.spawn("Archer", "Iriel", Point::new(0.0, 0.0)).unwrap();
        assert_eq!(world.find_closest_structure(me), None);

        world.add_structure("Farm", Point::new(10.0, 0.0)).unwrap();
        let keep = world.add_structure("Keep", Point::new(0.0, 3.0)).unwrap();
        assert_eq!(world.find_closest_structure(me), Some(keep));
    }

    #[test]
    fn test_removed_handle_never_resolves() {
        let mut world = World::new();
        let victim = world.spawn("Peasant", "Pat", Point::default()).unwrap();
        world.agent_mut(victim).unwrap().lose_health(5);

        let removed = world.remove_dead();
        assert_eq!(removed, vec!["Pat".to_string()]);
        assert!(world.agent(victim).is_none());

        // The freed slot is reused with a new generation
        let newcomer = world.spawn("Peasant", "Pip", Point::default()).unwrap();
        assert_ne!(newcomer, victim);
        assert!(world.agent(victim).is_none());
        assert!(world.agent(newcomer).is_some());
    }
}
