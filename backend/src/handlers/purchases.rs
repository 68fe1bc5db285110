//! HTTP handlers for purchase record endpoints
//!
//! Thin wrappers over the purchase service; all transition/consistency
//! logic lives in the service layer.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use shared::types::PaginatedResponse;

use crate::error::AppResult;
use crate::models::{PurchaseWithMaterial, StockMovement};
use crate::services::purchases::{
    CreatePurchaseInput, PurchaseListQuery, PurchaseService, UpdatePurchaseInput,
};
use crate::AppState;

/// Body for the status-only transition endpoint
#[derive(Debug, Deserialize)]
pub struct UpdateStatusInput {
    pub status: String,
}

/// Query parameters for the by-date-range endpoint
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Create a purchase record (starts in `pending`)
pub async fn create_purchase(
    State(state): State<AppState>,
    Json(input): Json<CreatePurchaseInput>,
) -> AppResult<(StatusCode, Json<PurchaseWithMaterial>)> {
    let service = PurchaseService::new(state.db);
    let purchase = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(purchase)))
}

/// List purchases with filters, pagination, and sorting
pub async fn list_purchases(
    State(state): State<AppState>,
    Query(query): Query<PurchaseListQuery>,
) -> AppResult<Json<PaginatedResponse<PurchaseWithMaterial>>> {
    let service = PurchaseService::new(state.db);
    let page = service.list(query).await?;
    Ok(Json(page))
}

/// Get a purchase by ID
pub async fn get_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<Uuid>,
) -> AppResult<Json<PurchaseWithMaterial>> {
    let service = PurchaseService::new(state.db);
    let purchase = service.get(purchase_id).await?;
    Ok(Json(purchase))
}

/// Full edit of a purchase, including an optional status transition
pub async fn update_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<Uuid>,
    Json(input): Json<UpdatePurchaseInput>,
) -> AppResult<Json<PurchaseWithMaterial>> {
    let service = PurchaseService::new(state.db);
    let purchase = service.update(purchase_id, input).await?;
    Ok(Json(purchase))
}

/// Status-only transition
pub async fn update_purchase_status(
    State(state): State<AppState>,
    Path(purchase_id): Path<Uuid>,
    Json(input): Json<UpdateStatusInput>,
) -> AppResult<Json<PurchaseWithMaterial>> {
    let service = PurchaseService::new(state.db);
    let purchase = service.update_status(purchase_id, input.status).await?;
    Ok(Json(purchase))
}

/// Soft-delete a purchase (only when no ledger entry is linked)
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = PurchaseService::new(state.db);
    service.delete(purchase_id).await?;
    Ok(Json(()))
}

/// Movement history for a purchase
pub async fn get_purchase_movements(
    State(state): State<AppState>,
    Path(purchase_id): Path<Uuid>,
) -> AppResult<Json<Vec<StockMovement>>> {
    let service = PurchaseService::new(state.db);
    let movements = service.movements(purchase_id).await?;
    Ok(Json(movements))
}

/// Purchases for one material
pub async fn get_purchases_by_material(
    State(state): State<AppState>,
    Path(material_id): Path<Uuid>,
) -> AppResult<Json<PaginatedResponse<PurchaseWithMaterial>>> {
    let service = PurchaseService::new(state.db);
    let page = service
        .list(PurchaseListQuery {
            material_id: Some(material_id),
            ..Default::default()
        })
        .await?;
    Ok(Json(page))
}

/// Purchases matching a supplier name (case-insensitive substring)
pub async fn get_purchases_by_supplier(
    State(state): State<AppState>,
    Path(supplier): Path<String>,
) -> AppResult<Json<PaginatedResponse<PurchaseWithMaterial>>> {
    let service = PurchaseService::new(state.db);
    let page = service
        .list(PurchaseListQuery {
            supplier: Some(supplier),
            ..Default::default()
        })
        .await?;
    Ok(Json(page))
}

/// Purchases within an inclusive purchase-date range
pub async fn get_purchases_by_date_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> AppResult<Json<PaginatedResponse<PurchaseWithMaterial>>> {
    let service = PurchaseService::new(state.db);
    let page = service
        .list(PurchaseListQuery {
            start_date: Some(range.start_date),
            end_date: Some(range.end_date),
            ..Default::default()
        })
        .await?;
    Ok(Json(page))
}
