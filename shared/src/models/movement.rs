//! Stock movement ledger models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementDirection {
    In,
    Out,
}

impl MovementDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementDirection::In => "in",
            MovementDirection::Out => "out",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(MovementDirection::In),
            "out" => Some(MovementDirection::Out),
            _ => None,
        }
    }
}

/// An entry in the stock movement ledger
///
/// Entries are append-only: once created they are never mutated except
/// for flipping `is_active` to false on reversal, and never deleted.
/// At most one entry with `is_active = true` references a given
/// purchase at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: Uuid,
    pub material_id: Uuid,
    /// Present only for purchase-derived movements
    pub purchase_id: Option<Uuid>,
    pub direction: MovementDirection,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    pub total_cost: Decimal,
    /// Stock level immediately after this movement was applied, kept
    /// for audit
    pub qty_after: Decimal,
    pub occurred_at: DateTime<Utc>,
    /// True while the movement contributes to stock; false once reversed
    pub is_active: bool,
}
