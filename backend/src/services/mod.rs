//! Business logic services for the Warehouse Management Platform

pub mod materials;
pub mod purchases;

pub use materials::MaterialService;
pub use purchases::PurchaseService;
