//! Skirmish - turn-based melee and ranged combat simulation

pub mod agent;
pub mod combat;
pub mod command;
pub mod core;
pub mod scenario;
pub mod simulation;
pub mod world;
