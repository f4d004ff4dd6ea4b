//! Combat roles and the attack/flee state machine

pub mod behavior;
pub mod report;
pub mod role;

pub use behavior::{describe, start_attacking, stop, take_hit, update};
pub use report::Report;
pub use role::{CombatPhase, CombatRole, RoleKind};
