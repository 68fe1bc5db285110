//! HTTP handlers for the Warehouse Management Platform

pub mod health;
pub mod materials;
pub mod purchases;

pub use health::*;
pub use materials::*;
pub use purchases::*;
