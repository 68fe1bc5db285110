//! Material catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A raw material tracked in the warehouse
///
/// `qty_on_hand` is the single authoritative stock number for the
/// material. It is maintained incrementally by the reconciliation
/// engine and is never recomputed from the movement ledger on reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: Uuid,
    pub name: String,
    /// Unit of measure, e.g. "meter", "pcs", "kg"
    pub unit: String,
    pub qty_on_hand: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact material view embedded in purchase responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSummary {
    pub id: Uuid,
    pub name: String,
    pub unit: String,
}
