//! Scenario files: a starting world described in TOML

mod loader;

pub use loader::{AgentSpec, Scenario, StructureSpec};
