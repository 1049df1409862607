mod constants;
pub use constants::*;
mod error;
pub use error::*;
mod objects;
pub use objects::*;
mod table;
pub use table::*;
mod simulation;
pub use simulation::*;

pub mod physics_utils;
pub mod shot;
pub mod config;
