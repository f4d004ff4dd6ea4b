//! World directory and structures

pub mod directory;
pub mod structure;

pub use directory::World;
pub use structure::Structure;
