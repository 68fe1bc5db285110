//! Purchase record models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MaterialSummary;

/// Lifecycle status of a purchase record
///
/// Any status may transition to any other status; only entering or
/// leaving `Received` has a ledger/stock effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Pending,
    Received,
    Cancelled,
}

impl PurchaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "pending",
            PurchaseStatus::Received => "received",
            PurchaseStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PurchaseStatus::Pending),
            "received" => Some(PurchaseStatus::Received),
            "cancelled" => Some(PurchaseStatus::Cancelled),
            _ => None,
        }
    }
}

/// A purchase record: an intent to acquire material, with a lifecycle
/// status kept in sync with the stock movement ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Uuid,
    pub material_id: Uuid,
    pub supplier: String,
    pub quantity: Decimal,
    pub unit: String,
    pub price_per_unit: Decimal,
    /// Derived: round2(quantity * price_per_unit)
    pub total_cost: Decimal,
    pub purchase_date: NaiveDate,
    pub status: PurchaseStatus,
    pub invoice_number: String,
    pub delivery_date: Option<NaiveDate>,
    /// Quantity actually received; falls back to `quantity` when absent
    pub received_quantity: Option<Decimal>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Purchase {
    /// The quantity a receipt applies to stock
    pub fn effective_quantity(&self) -> Decimal {
        self.received_quantity.unwrap_or(self.quantity)
    }
}

/// Purchase with its material summary, as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseWithMaterial {
    #[serde(flatten)]
    pub purchase: Purchase,
    pub material: MaterialSummary,
}
