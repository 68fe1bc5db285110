//! Purchase record service and reconciliation engine
//!
//! Owns the purchase lifecycle and keeps three stores mutually
//! consistent: the purchase record, the stock movement ledger, and the
//! materialized `qty_on_hand` on the material. Every status transition
//! runs as a single transaction; stock is only ever touched through
//! atomic `qty_on_hand = qty_on_hand +/- delta` updates so concurrent
//! receipts on the same material cannot lose an update.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use uuid::Uuid;
use validator::Validate;

use shared::reconcile::{plan_transition, LedgerAction};
use shared::types::{PaginatedResponse, Pagination, PaginationMeta};
use shared::validation::{compute_total_cost, round2, validate_quantity};

use crate::error::{AppError, AppResult};
use crate::models::{MaterialSummary, Purchase, PurchaseStatus, PurchaseWithMaterial, StockMovement};
use crate::services::materials::MovementRow;

/// Purchase service: create/read/update/delete plus the atomic
/// status-transition protocol
#[derive(Clone)]
pub struct PurchaseService {
    db: PgPool,
}

/// Input for creating a purchase record
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePurchaseInput {
    pub material_id: Uuid,
    #[validate(length(min = 1, message = "Supplier is required"))]
    pub supplier: String,
    pub quantity: Decimal,
    pub unit: Option<String>,
    pub price_per_unit: Decimal,
    pub purchase_date: NaiveDate,
    pub invoice_number: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub received_quantity: Option<Decimal>,
    pub notes: Option<String>,
}

/// Input for updating a purchase record; absent fields keep their
/// current value. `status` is a raw string so unknown values surface as
/// a validation error rather than a deserialization failure. The
/// nullable fields (`delivery_date`, `notes`) take an explicit JSON
/// null to clear the stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePurchaseInput {
    pub material_id: Option<Uuid>,
    pub supplier: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit: Option<String>,
    pub price_per_unit: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub invoice_number: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub delivery_date: Option<Option<NaiveDate>>,
    pub received_quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

/// Maps an absent field to `None` (keep the current value) and an
/// explicit null to `Some(None)` (clear it)
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Query parameters for listing purchases
#[derive(Debug, Default, Deserialize)]
pub struct PurchaseListQuery {
    pub status: Option<String>,
    /// Case-insensitive substring match
    pub supplier: Option<String>,
    pub material_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Joined purchase + material row
#[derive(Debug, FromRow)]
struct PurchaseRow {
    id: Uuid,
    material_id: Uuid,
    supplier: String,
    quantity: Decimal,
    unit: String,
    price_per_unit: Decimal,
    total_cost: Decimal,
    purchase_date: NaiveDate,
    status: String,
    invoice_number: String,
    delivery_date: Option<NaiveDate>,
    received_quantity: Option<Decimal>,
    notes: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    material_name: String,
    material_unit: String,
}

impl PurchaseRow {
    fn into_model(self) -> AppResult<PurchaseWithMaterial> {
        let status = PurchaseStatus::from_str(&self.status)
            .ok_or_else(|| AppError::Internal(format!("Unknown purchase status '{}'", self.status)))?;
        Ok(PurchaseWithMaterial {
            purchase: Purchase {
                id: self.id,
                material_id: self.material_id,
                supplier: self.supplier,
                quantity: self.quantity,
                unit: self.unit,
                price_per_unit: self.price_per_unit,
                total_cost: self.total_cost,
                purchase_date: self.purchase_date,
                status,
                invoice_number: self.invoice_number,
                delivery_date: self.delivery_date,
                received_quantity: self.received_quantity,
                notes: self.notes,
                is_active: self.is_active,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            material: MaterialSummary {
                id: self.material_id,
                name: self.material_name,
                unit: self.material_unit,
            },
        })
    }
}

/// Active ledger entry loaded (and locked) during a transition
#[derive(Debug, FromRow)]
struct ActiveMovement {
    id: Uuid,
    material_id: Uuid,
    quantity: Decimal,
}

const PURCHASE_COLUMNS: &str = r#"
    p.id, p.material_id, p.supplier, p.quantity, p.unit, p.price_per_unit,
    p.total_cost, p.purchase_date, p.status, p.invoice_number, p.delivery_date,
    p.received_quantity, p.notes, p.is_active, p.created_at, p.updated_at,
    m.name AS material_name, m.unit AS material_unit
"#;

/// Sortable columns for the list endpoint, mapped to their SQL names
fn sort_column(requested: Option<&str>) -> AppResult<&'static str> {
    match requested {
        None => Ok("p.purchase_date"),
        Some("purchase_date") => Ok("p.purchase_date"),
        Some("supplier") => Ok("p.supplier"),
        Some("total_cost") => Ok("p.total_cost"),
        Some("status") => Ok("p.status"),
        Some("created_at") => Ok("p.created_at"),
        Some(other) => Err(AppError::Validation {
            field: "sort_by".to_string(),
            message: format!("'{}' is not a sortable field", other),
        }),
    }
}

/// Generate a best-effort unique invoice number: time-based plus a
/// random suffix. Uniqueness is not enforced.
fn generate_invoice_number() -> String {
    let ts = Utc::now().format("%Y%m%d%H%M%S");
    let random = Uuid::new_v4().simple().to_string();
    format!("INV-{}-{}", ts, random[..6].to_uppercase())
}

impl PurchaseService {
    /// Create a new PurchaseService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a purchase record in `pending` status
    ///
    /// No ledger entry is written at creation time; stock is only
    /// affected when the purchase later reaches `received`.
    pub async fn create(&self, input: CreatePurchaseInput) -> AppResult<PurchaseWithMaterial> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let total_cost = compute_total_cost(input.quantity, input.price_per_unit)
            .map_err(|msg| AppError::Validation {
                field: "quantity/price_per_unit".to_string(),
                message: msg.to_string(),
            })?;

        if let Some(received) = input.received_quantity {
            validate_quantity(received).map_err(|msg| AppError::Validation {
                field: "received_quantity".to_string(),
                message: msg.to_string(),
            })?;
        }

        let material = sqlx::query_as::<_, (String, String)>(
            "SELECT name, unit FROM materials WHERE id = $1",
        )
        .bind(input.material_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Material".to_string()))?;

        let unit = input
            .unit
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| material.1.clone());
        let invoice_number = input
            .invoice_number
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(generate_invoice_number);

        let row = sqlx::query_as::<_, PurchaseRow>(&format!(
            r#"
            WITH inserted AS (
                INSERT INTO purchases (
                    material_id, supplier, quantity, unit, price_per_unit, total_cost,
                    purchase_date, status, invoice_number, delivery_date, received_quantity, notes
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', $8, $9, $10, $11)
                RETURNING *
            )
            SELECT {columns}
            FROM inserted p
            JOIN materials m ON m.id = p.material_id
            "#,
            columns = PURCHASE_COLUMNS
        ))
        .bind(input.material_id)
        .bind(input.supplier.trim())
        .bind(input.quantity)
        .bind(&unit)
        .bind(input.price_per_unit)
        .bind(total_cost)
        .bind(input.purchase_date)
        .bind(&invoice_number)
        .bind(input.delivery_date)
        .bind(input.received_quantity)
        .bind(&input.notes)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(purchase_id = %row.id, supplier = %row.supplier, "Purchase created");
        row.into_model()
    }

    /// List purchases with filters, pagination, and sorting
    pub async fn list(&self, query: PurchaseListQuery) -> AppResult<PaginatedResponse<PurchaseWithMaterial>> {
        let status = match &query.status {
            Some(s) => Some(
                PurchaseStatus::from_str(s)
                    .ok_or_else(|| AppError::Validation {
                        field: "status".to_string(),
                        message: format!("'{}' is not a valid status", s),
                    })?
                    .as_str()
                    .to_string(),
            ),
            None => None,
        };

        let order_column = sort_column(query.sort_by.as_deref())?;
        let order_dir = match query.sort_order.as_deref() {
            None | Some("desc") => "DESC",
            Some("asc") => "ASC",
            Some(other) => {
                return Err(AppError::Validation {
                    field: "sort_order".to_string(),
                    message: format!("'{}' is not a valid sort order (use asc or desc)", other),
                })
            }
        };

        let pagination = Pagination {
            page: query.page.unwrap_or(1),
            limit: query.limit.unwrap_or(20),
        };

        let filter_clause = r#"
            WHERE p.is_active = TRUE
              AND ($1::text IS NULL OR p.status = $1)
              AND ($2::text IS NULL OR p.supplier ILIKE '%' || $2 || '%')
              AND ($3::uuid IS NULL OR p.material_id = $3)
              AND ($4::date IS NULL OR p.purchase_date >= $4)
              AND ($5::date IS NULL OR p.purchase_date <= $5)
        "#;

        let total_items = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM purchases p {filter}",
            filter = filter_clause
        ))
        .bind(&status)
        .bind(&query.supplier)
        .bind(query.material_id)
        .bind(query.start_date)
        .bind(query.end_date)
        .fetch_one(&self.db)
        .await?;

        // Sort column and direction come from the allow-list above,
        // never from raw input
        let rows = sqlx::query_as::<_, PurchaseRow>(&format!(
            r#"
            SELECT {columns}
            FROM purchases p
            JOIN materials m ON m.id = p.material_id
            {filter}
            ORDER BY {order_column} {order_dir}, p.created_at DESC
            LIMIT $6 OFFSET $7
            "#,
            columns = PURCHASE_COLUMNS,
            filter = filter_clause,
            order_column = order_column,
            order_dir = order_dir,
        ))
        .bind(&status)
        .bind(&query.supplier)
        .bind(query.material_id)
        .bind(query.start_date)
        .bind(query.end_date)
        .bind(pagination.normalized().limit as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(&self.db)
        .await?;

        let data = rows
            .into_iter()
            .map(PurchaseRow::into_model)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PaginatedResponse {
            data,
            pagination: PaginationMeta::new(&pagination, total_items as u64),
        })
    }

    /// Get a purchase by ID; soft-deleted records are treated as absent
    pub async fn get(&self, purchase_id: Uuid) -> AppResult<PurchaseWithMaterial> {
        let row = sqlx::query_as::<_, PurchaseRow>(&format!(
            r#"
            SELECT {columns}
            FROM purchases p
            JOIN materials m ON m.id = p.material_id
            WHERE p.id = $1 AND p.is_active = TRUE
            "#,
            columns = PURCHASE_COLUMNS
        ))
        .bind(purchase_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Purchase".to_string()))?;

        row.into_model()
    }

    /// Full edit: merge fields and, when `status` is present, run the
    /// status transition in the same transaction
    ///
    /// Rejections (unknown status, negative-stock reversal, forbidden
    /// edit-after-receipt) roll back the whole operation; no field
    /// merge is persisted on failure.
    pub async fn update(&self, purchase_id: Uuid, input: UpdatePurchaseInput) -> AppResult<PurchaseWithMaterial> {
        // Validate requested status before opening the transaction
        let requested_status = match &input.status {
            Some(s) => Some(PurchaseStatus::from_str(s).ok_or_else(|| AppError::Validation {
                field: "status".to_string(),
                message: format!("'{}' is not a valid status", s),
            })?),
            None => None,
        };

        if let Some(supplier) = &input.supplier {
            if supplier.trim().is_empty() {
                return Err(AppError::Validation {
                    field: "supplier".to_string(),
                    message: "Supplier is required".to_string(),
                });
            }
        }

        let mut tx = self.db.begin().await?;

        // Lock the purchase row for the duration of the transition
        let current = sqlx::query_as::<_, PurchaseRow>(&format!(
            r#"
            SELECT {columns}
            FROM purchases p
            JOIN materials m ON m.id = p.material_id
            WHERE p.id = $1 AND p.is_active = TRUE
            FOR UPDATE OF p
            "#,
            columns = PURCHASE_COLUMNS
        ))
        .bind(purchase_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Purchase".to_string()))?
        .into_model()?;
        let current = current.purchase;

        // Lock the active ledger entry, if any
        let active = sqlx::query_as::<_, ActiveMovement>(
            r#"
            SELECT id, material_id, quantity
            FROM stock_movements
            WHERE purchase_id = $1 AND is_active = TRUE
            FOR UPDATE
            "#,
        )
        .bind(purchase_id)
        .fetch_optional(&mut *tx)
        .await?;

        let old_status = current.status;
        let new_status = requested_status.unwrap_or(old_status);
        let action = plan_transition(old_status, new_status, active.is_some());

        // Edit-after-receipt guard: while a movement stays applied, the
        // fields it was derived from must not drift away from the ledger
        let edits_applied_fields = input.quantity.is_some()
            || input.price_per_unit.is_some()
            || input.material_id.is_some()
            || input.received_quantity.is_some();
        if active.is_some() && action != LedgerAction::Reverse && edits_applied_fields {
            return Err(AppError::Conflict {
                resource: "purchase".to_string(),
                message: "Quantity, price, and material cannot be edited while a stock movement \
                          is applied; move the purchase out of 'received' first"
                    .to_string(),
            });
        }

        // Merge fields
        let material_id = input.material_id.unwrap_or(current.material_id);
        if material_id != current.material_id {
            let material_exists =
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM materials WHERE id = $1)")
                    .bind(material_id)
                    .fetch_one(&mut *tx)
                    .await?;
            if !material_exists {
                return Err(AppError::NotFound("Material".to_string()));
            }
        }

        let quantity = input.quantity.unwrap_or(current.quantity);
        let price_per_unit = input.price_per_unit.unwrap_or(current.price_per_unit);
        let total_cost = if input.quantity.is_some() || input.price_per_unit.is_some() {
            compute_total_cost(quantity, price_per_unit).map_err(|msg| AppError::Validation {
                field: "quantity/price_per_unit".to_string(),
                message: msg.to_string(),
            })?
        } else {
            current.total_cost
        };

        let received_quantity = match input.received_quantity {
            Some(received) => {
                validate_quantity(received).map_err(|msg| AppError::Validation {
                    field: "received_quantity".to_string(),
                    message: msg.to_string(),
                })?;
                Some(received)
            }
            None => current.received_quantity,
        };

        let supplier = input.supplier.map(|s| s.trim().to_string()).unwrap_or(current.supplier);
        let unit = input.unit.filter(|u| !u.trim().is_empty()).unwrap_or(current.unit);
        let invoice_number = input
            .invoice_number
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(current.invoice_number);
        let purchase_date = input.purchase_date.unwrap_or(current.purchase_date);
        let delivery_date = input.delivery_date.unwrap_or(current.delivery_date);
        let notes = input.notes.unwrap_or(current.notes);

        // Apply the planned ledger/stock effect
        match action {
            LedgerAction::Apply => {
                let apply_qty = received_quantity.unwrap_or(quantity);
                Self::apply_receipt(&mut tx, purchase_id, material_id, apply_qty, price_per_unit).await?;
            }
            LedgerAction::Reverse => {
                // Guard above ensures this is only reached when active exists
                let movement = active.as_ref().ok_or_else(|| {
                    AppError::Internal("Reversal planned without an active movement".to_string())
                })?;
                Self::reverse_receipt(&mut tx, movement).await?;
            }
            LedgerAction::None => {}
        }

        sqlx::query(
            r#"
            UPDATE purchases
            SET material_id = $1, supplier = $2, quantity = $3, unit = $4,
                price_per_unit = $5, total_cost = $6, purchase_date = $7, status = $8,
                invoice_number = $9, delivery_date = $10, received_quantity = $11,
                notes = $12, updated_at = NOW()
            WHERE id = $13
            "#,
        )
        .bind(material_id)
        .bind(&supplier)
        .bind(quantity)
        .bind(&unit)
        .bind(price_per_unit)
        .bind(total_cost)
        .bind(purchase_date)
        .bind(new_status.as_str())
        .bind(&invoice_number)
        .bind(delivery_date)
        .bind(received_quantity)
        .bind(&notes)
        .bind(purchase_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        if old_status != new_status {
            tracing::info!(
                purchase_id = %purchase_id,
                from = old_status.as_str(),
                to = new_status.as_str(),
                "Purchase status transitioned"
            );
        }

        self.get(purchase_id).await
    }

    /// Status-only transition, same semantics and guarantees as the
    /// full update
    pub async fn update_status(&self, purchase_id: Uuid, status: String) -> AppResult<PurchaseWithMaterial> {
        self.update(
            purchase_id,
            UpdatePurchaseInput {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// Soft-delete a purchase
    ///
    /// Allowed only when no stock movement, active or reversed, has
    /// ever been linked to it; the ledger history is retained forever.
    pub async fn delete(&self, purchase_id: Uuid) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM purchases WHERE id = $1 AND is_active = TRUE FOR UPDATE",
        )
        .bind(purchase_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Purchase".to_string()))?;

        let has_movement = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM stock_movements WHERE purchase_id = $1)",
        )
        .bind(purchase_id)
        .fetch_one(&mut *tx)
        .await?;

        if has_movement {
            return Err(AppError::Conflict {
                resource: "purchase".to_string(),
                message: "Purchase has linked stock movements and cannot be deleted".to_string(),
            });
        }

        sqlx::query("UPDATE purchases SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(purchase_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(purchase_id = %purchase_id, "Purchase soft-deleted");
        Ok(())
    }

    /// Movement history for a purchase, newest first (audit read)
    pub async fn movements(&self, purchase_id: Uuid) -> AppResult<Vec<StockMovement>> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM purchases WHERE id = $1 AND is_active = TRUE)",
        )
        .bind(purchase_id)
        .fetch_one(&self.db)
        .await?;

        if !exists {
            return Err(AppError::NotFound("Purchase".to_string()));
        }

        let rows = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT id, material_id, purchase_id, direction, quantity, unit_cost,
                   total_cost, qty_after, occurred_at, is_active
            FROM stock_movements
            WHERE purchase_id = $1
            ORDER BY occurred_at DESC
            "#,
        )
        .bind(purchase_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(MovementRow::into_model).collect()
    }

    // ------------------------------------------------------------------
    // Atomic ledger/stock effects (always inside the caller's
    // transaction)
    // ------------------------------------------------------------------

    /// Create the IN movement for a receipt and increment the
    /// material's stock as a single atomic delta
    async fn apply_receipt(
        tx: &mut Transaction<'_, Postgres>,
        purchase_id: Uuid,
        material_id: Uuid,
        quantity: Decimal,
        unit_cost: Decimal,
    ) -> AppResult<()> {
        let qty_after = sqlx::query_scalar::<_, Decimal>(
            r#"
            UPDATE materials
            SET qty_on_hand = qty_on_hand + $1, updated_at = NOW()
            WHERE id = $2
            RETURNING qty_on_hand
            "#,
        )
        .bind(quantity)
        .bind(material_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Material".to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO stock_movements (
                material_id, purchase_id, direction, quantity, unit_cost, total_cost, qty_after
            )
            VALUES ($1, $2, 'in', $3, $4, $5, $6)
            "#,
        )
        .bind(material_id)
        .bind(purchase_id)
        .bind(quantity)
        .bind(unit_cost)
        .bind(round2(quantity * unit_cost))
        .bind(qty_after)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Reverse an applied movement: decrement stock with a negative
    /// guard in the WHERE clause, then deactivate the ledger entry.
    /// Zero rows updated means the decrement would drive stock
    /// negative; the error aborts the whole transaction.
    async fn reverse_receipt(
        tx: &mut Transaction<'_, Postgres>,
        movement: &ActiveMovement,
    ) -> AppResult<()> {
        let updated = sqlx::query(
            r#"
            UPDATE materials
            SET qty_on_hand = qty_on_hand - $1, updated_at = NOW()
            WHERE id = $2 AND qty_on_hand >= $1
            "#,
        )
        .bind(movement.quantity)
        .bind(movement.material_id)
        .execute(&mut **tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::InsufficientStock(format!(
                "Reversing {} would drive the material's stock negative",
                movement.quantity
            )));
        }

        sqlx::query("UPDATE stock_movements SET is_active = FALSE WHERE id = $1")
            .bind(movement.id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_number_format() {
        let invoice = generate_invoice_number();
        // INV- + 14 digit timestamp + - + 6 hex chars
        assert!(invoice.starts_with("INV-"));
        let parts: Vec<&str> = invoice.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].len(), 14);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn invoice_numbers_differ() {
        assert_ne!(generate_invoice_number(), generate_invoice_number());
    }

    #[test]
    fn update_input_distinguishes_absent_from_null() {
        let absent: UpdatePurchaseInput = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.notes, None);
        assert_eq!(absent.delivery_date, None);

        let cleared: UpdatePurchaseInput =
            serde_json::from_str(r#"{"notes": null, "delivery_date": null}"#).unwrap();
        assert_eq!(cleared.notes, Some(None));
        assert_eq!(cleared.delivery_date, Some(None));

        let set: UpdatePurchaseInput =
            serde_json::from_str(r#"{"notes": "rush order"}"#).unwrap();
        assert_eq!(set.notes, Some(Some("rush order".to_string())));
    }

    #[test]
    fn sort_column_allowlist() {
        assert_eq!(sort_column(None).unwrap(), "p.purchase_date");
        assert_eq!(sort_column(Some("supplier")).unwrap(), "p.supplier");
        assert!(sort_column(Some("id; DROP TABLE purchases")).is_err());
    }
}
