pub mod tick;

pub use tick::{run_simulation_tick, run_until_settled};
