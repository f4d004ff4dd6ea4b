pub mod config;
pub mod error;
pub mod types;

pub use config::SimulationConfig;
pub use error::{Result, SimError, TargetRejection};
pub use types::{AgentId, Point, StructureId, Tick};
