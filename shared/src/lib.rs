//! Shared types and domain logic for the Warehouse Management Platform
//!
//! This crate contains the domain models, common types, and the pure
//! purchase-to-stock reconciliation logic shared between the backend and
//! its test suites. Nothing in here performs I/O.

pub mod models;
pub mod reconcile;
pub mod types;
pub mod validation;

pub use models::*;
pub use reconcile::*;
pub use types::*;
pub use validation::*;
