//! Domain models for the Warehouse Management Platform

mod material;
mod movement;
mod purchase;

pub use material::*;
pub use movement::*;
pub use purchase::*;
