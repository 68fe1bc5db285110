//! HTTP handlers for the material catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Material, StockMovement};
use crate::services::materials::{CreateMaterialInput, MaterialService};
use crate::AppState;

/// Create a material
pub async fn create_material(
    State(state): State<AppState>,
    Json(input): Json<CreateMaterialInput>,
) -> AppResult<(StatusCode, Json<Material>)> {
    let service = MaterialService::new(state.db);
    let material = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// List all materials
pub async fn list_materials(State(state): State<AppState>) -> AppResult<Json<Vec<Material>>> {
    let service = MaterialService::new(state.db);
    let materials = service.list().await?;
    Ok(Json(materials))
}

/// Get a material by ID
pub async fn get_material(
    State(state): State<AppState>,
    Path(material_id): Path<Uuid>,
) -> AppResult<Json<Material>> {
    let service = MaterialService::new(state.db);
    let material = service.get(material_id).await?;
    Ok(Json(material))
}

/// Get the movement ledger for a material
pub async fn get_material_movements(
    State(state): State<AppState>,
    Path(material_id): Path<Uuid>,
) -> AppResult<Json<Vec<StockMovement>>> {
    let service = MaterialService::new(state.db);
    let movements = service.movements(material_id).await?;
    Ok(Json(movements))
}
