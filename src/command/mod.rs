//! Command pipeline: text line -> Command -> execution against the world

pub mod executor;
pub mod parser;

pub use executor::{CommandExecutor, ExecutionResult};
pub use parser::{parse_command, Command};
