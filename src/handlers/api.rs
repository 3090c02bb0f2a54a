use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::models::{
    CategoryListResponse, DishListResponse, FullMenuResponse, Restaurant, ServiceError,
};
use crate::services::{CatalogService, MenuAssembler};

/// Shared application state for the public read-only endpoints
#[derive(Clone)]
pub struct ApiState {
    pub catalog_service: Arc<CatalogService>,
    pub menu_assembler: Arc<MenuAssembler>,
}

/// Create the public API router with all read-only endpoints
pub fn create_api_router(
    catalog_service: Arc<CatalogService>,
    menu_assembler: Arc<MenuAssembler>,
) -> Router {
    let state = ApiState {
        catalog_service,
        menu_assembler,
    };

    Router::new()
        .route("/api/menu", get(get_full_menu))
        .route("/api/restaurant", get(get_restaurant_info))
        .route("/api/categories", get(list_categories))
        .route(
            "/api/categories/:category_id/dishes",
            get(list_dishes_by_category),
        )
        .with_state(state)
}

/// Get the full menu: restaurant info plus every category with its dishes
#[instrument(name = "get_full_menu", skip(state))]
pub async fn get_full_menu(
    State(state): State<ApiState>,
) -> Result<Json<FullMenuResponse>, (StatusCode, Json<Value>)> {
    info!("Assembling full menu");

    match state.menu_assembler.get_full_menu().await {
        Ok(menu) => {
            info!(
                "Full menu assembled with {} categories and {} dishes",
                menu.categories.len(),
                menu.dish_count()
            );
            Ok(Json(menu))
        }
        Err(err) => {
            error!("Failed to assemble full menu: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// Get the restaurant profile
#[instrument(name = "get_restaurant_info", skip(state))]
pub async fn get_restaurant_info(
    State(state): State<ApiState>,
) -> Result<Json<Restaurant>, (StatusCode, Json<Value>)> {
    match state.catalog_service.get_restaurant_info().await {
        Ok(restaurant) => Ok(Json(restaurant)),
        Err(err) => {
            error!("Failed to get restaurant info: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// List all categories in display order
#[instrument(name = "list_categories", skip(state))]
pub async fn list_categories(
    State(state): State<ApiState>,
) -> Result<Json<CategoryListResponse>, (StatusCode, Json<Value>)> {
    match state.catalog_service.list_categories().await {
        Ok(response) => {
            info!("Successfully listed {} categories", response.total_count);
            Ok(Json(response))
        }
        Err(err) => {
            error!("Failed to list categories: {}", err);
            Err(service_error_to_response(err))
        }
    }
}

/// List the dishes of one category, unavailable dishes included
#[instrument(name = "list_dishes_by_category", skip(state), fields(category_id = category_id))]
pub async fn list_dishes_by_category(
    State(state): State<ApiState>,
    Path(category_id): Path<u64>,
) -> Result<Json<DishListResponse>, (StatusCode, Json<Value>)> {
    match state
        .catalog_service
        .list_dishes_by_category(category_id)
        .await
    {
        Ok(response) => {
            info!(
                "Successfully listed {} dishes for category {}",
                response.total_count, category_id
            );
            Ok(Json(response))
        }
        Err(err) => {
            error!("Failed to list dishes for category {}: {}", category_id, err);
            Err(service_error_to_response(err))
        }
    }
}

/// Map a service error to its stable HTTP representation. Each taxonomy
/// kind has exactly one status so consumers can tell "fix your input"
/// (400) from "entity vanished" (404).
pub(crate) fn service_error_to_response(err: ServiceError) -> (StatusCode, Json<Value>) {
    let (status, message) = match err {
        ServiceError::CategoryNotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::DishNotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::Validation { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        ServiceError::Repository { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    };

    (
        status,
        Json(json!({
            "error": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
