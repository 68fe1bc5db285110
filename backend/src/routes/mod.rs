//! Route definitions for the Warehouse Management Platform

use axum::{
    routing::{get, patch},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Material catalog
        .nest("/materials", material_routes())
        // Purchase records and reconciliation
        .nest("/purchases", purchase_routes())
}

/// Material catalog routes
fn material_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_materials).post(handlers::create_material))
        .route("/:material_id", get(handlers::get_material))
        .route("/:material_id/movements", get(handlers::get_material_movements))
}

/// Purchase management routes
fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_purchases).post(handlers::create_purchase))
        // Read-side convenience filters
        .route("/by-material/:material_id", get(handlers::get_purchases_by_material))
        .route("/by-supplier/:supplier", get(handlers::get_purchases_by_supplier))
        .route("/by-date-range", get(handlers::get_purchases_by_date_range))
        .route(
            "/:purchase_id",
            get(handlers::get_purchase)
                .put(handlers::update_purchase)
                .delete(handlers::delete_purchase),
        )
        .route("/:purchase_id/status", patch(handlers::update_purchase_status))
        .route("/:purchase_id/movements", get(handlers::get_purchase_movements))
}
