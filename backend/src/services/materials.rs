//! Material catalog service
//!
//! Minimal catalog surface: materials are created here with zero stock;
//! `qty_on_hand` is only ever changed by the reconciliation engine in
//! the purchase service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{Material, MovementDirection, StockMovement};

/// Material service for catalog reads and creation
#[derive(Clone)]
pub struct MaterialService {
    db: PgPool,
}

/// Input for creating a material
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaterialInput {
    #[validate(length(min = 1, message = "Material name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Unit is required"))]
    pub unit: String,
}

#[derive(Debug, FromRow)]
struct MaterialRow {
    id: Uuid,
    name: String,
    unit: String,
    qty_on_hand: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MaterialRow {
    fn into_model(self) -> Material {
        Material {
            id: self.id,
            name: self.name,
            unit: self.unit,
            qty_on_hand: self.qty_on_hand,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct MovementRow {
    id: Uuid,
    material_id: Uuid,
    purchase_id: Option<Uuid>,
    direction: String,
    quantity: Decimal,
    unit_cost: Decimal,
    total_cost: Decimal,
    qty_after: Decimal,
    occurred_at: DateTime<Utc>,
    is_active: bool,
}

impl MovementRow {
    pub(crate) fn into_model(self) -> AppResult<StockMovement> {
        let direction = MovementDirection::from_str(&self.direction)
            .ok_or_else(|| AppError::Internal(format!("Unknown movement direction '{}'", self.direction)))?;
        Ok(StockMovement {
            id: self.id,
            material_id: self.material_id,
            purchase_id: self.purchase_id,
            direction,
            quantity: self.quantity,
            unit_cost: self.unit_cost,
            total_cost: self.total_cost,
            qty_after: self.qty_after,
            occurred_at: self.occurred_at,
            is_active: self.is_active,
        })
    }
}

impl MaterialService {
    /// Create a new MaterialService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a material with zero stock on hand
    pub async fn create(&self, input: CreateMaterialInput) -> AppResult<Material> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let row = sqlx::query_as::<_, MaterialRow>(
            r#"
            INSERT INTO materials (name, unit)
            VALUES ($1, $2)
            RETURNING id, name, unit, qty_on_hand, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(input.unit.trim())
        .fetch_one(&self.db)
        .await?;

        Ok(row.into_model())
    }

    /// List all materials
    pub async fn list(&self) -> AppResult<Vec<Material>> {
        let rows = sqlx::query_as::<_, MaterialRow>(
            r#"
            SELECT id, name, unit, qty_on_hand, created_at, updated_at
            FROM materials
            ORDER BY name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(MaterialRow::into_model).collect())
    }

    /// Get a material by ID
    pub async fn get(&self, material_id: Uuid) -> AppResult<Material> {
        let row = sqlx::query_as::<_, MaterialRow>(
            r#"
            SELECT id, name, unit, qty_on_hand, created_at, updated_at
            FROM materials
            WHERE id = $1
            "#,
        )
        .bind(material_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Material".to_string()))?;

        Ok(row.into_model())
    }

    /// Movement ledger for a material, newest first (audit read)
    pub async fn movements(&self, material_id: Uuid) -> AppResult<Vec<StockMovement>> {
        let material_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM materials WHERE id = $1)",
        )
        .bind(material_id)
        .fetch_one(&self.db)
        .await?;

        if !material_exists {
            return Err(AppError::NotFound("Material".to_string()));
        }

        let rows = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT id, material_id, purchase_id, direction, quantity, unit_cost,
                   total_cost, qty_after, occurred_at, is_active
            FROM stock_movements
            WHERE material_id = $1
            ORDER BY occurred_at DESC
            "#,
        )
        .bind(material_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(MovementRow::into_model).collect()
    }
}
