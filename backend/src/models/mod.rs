//! Database models for the Warehouse Management Platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
