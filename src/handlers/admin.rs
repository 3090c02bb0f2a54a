use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{post, put},
    Router,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::handlers::api::service_error_to_response;
use crate::models::{
    Category, CreateCategoryRequest, CreateDishRequest, Dish, Restaurant, ServiceResult,
    UpdateCategoryRequest, UpdateDishRequest, UpdateRestaurantRequest,
};
use crate::observability::Metrics;
use crate::services::CatalogService;

/// Admin state containing the catalog service and business metrics
#[derive(Clone)]
pub struct AdminState {
    pub catalog_service: Arc<CatalogService>,
    pub metrics: Arc<Metrics>,
}

/// Response for seeding operations
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: String,
    pub categories_created: usize,
    pub dishes_created: usize,
    pub timestamp: String,
}

/// Create the admin router with all write endpoints
pub fn create_admin_router(catalog_service: Arc<CatalogService>, metrics: Arc<Metrics>) -> Router {
    let state = AdminState {
        catalog_service,
        metrics,
    };

    Router::new()
        .route("/api/admin/restaurant", put(update_restaurant_info))
        .route("/api/admin/categories", post(create_category))
        .route(
            "/api/admin/categories/:category_id",
            put(update_category).delete(delete_category),
        )
        .route("/api/admin/dishes", post(create_dish))
        .route(
            "/api/admin/dishes/:dish_id",
            put(update_dish).delete(delete_dish),
        )
        .route("/api/admin/seed", post(seed_catalog))
        .with_state(state)
}

// =============================================================================
// RESTAURANT PROFILE
// =============================================================================

/// Update the restaurant profile (admin only)
#[instrument(name = "update_restaurant_info", skip(state, request), fields(
    name = %request.name,
))]
pub async fn update_restaurant_info(
    State(state): State<AdminState>,
    Json(request): Json<UpdateRestaurantRequest>,
) -> Result<Json<Restaurant>, (StatusCode, Json<Value>)> {
    info!("Admin updating restaurant profile");

    match state.catalog_service.update_restaurant_info(request).await {
        Ok(restaurant) => {
            info!("Successfully updated restaurant profile");
            state
                .metrics
                .record_catalog_operation("update", "restaurant", "success");
            Ok(Json(restaurant))
        }
        Err(err) => {
            error!("Failed to update restaurant profile: {}", err);
            state
                .metrics
                .record_catalog_operation("update", "restaurant", "error");
            Err(service_error_to_response(err))
        }
    }
}

// =============================================================================
// CATEGORY MANAGEMENT
// =============================================================================

/// Create a new category (admin only)
#[instrument(name = "create_category", skip(state, request), fields(
    name = %request.name,
    order = request.order,
))]
pub async fn create_category(
    State(state): State<AdminState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), (StatusCode, Json<Value>)> {
    info!("Admin creating new category: {}", request.name);

    match state.catalog_service.create_category(request).await {
        Ok(category) => {
            info!("Successfully created category with ID: {}", category.id);
            state
                .metrics
                .record_catalog_operation("create", "category", "success");
            Ok((StatusCode::CREATED, Json(category)))
        }
        Err(err) => {
            error!("Failed to create category: {}", err);
            state
                .metrics
                .record_catalog_operation("create", "category", "error");
            Err(service_error_to_response(err))
        }
    }
}

/// Update an existing category (admin only)
#[instrument(name = "update_category", skip(state, request), fields(
    category_id = category_id,
    name = %request.name,
))]
pub async fn update_category(
    State(state): State<AdminState>,
    Path(category_id): Path<u64>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, (StatusCode, Json<Value>)> {
    info!("Admin updating category with ID: {}", category_id);

    match state
        .catalog_service
        .update_category(category_id, request)
        .await
    {
        Ok(category) => {
            info!("Successfully updated category: {}", category.name);
            state
                .metrics
                .record_catalog_operation("update", "category", "success");
            Ok(Json(category))
        }
        Err(err) => {
            error!("Failed to update category {}: {}", category_id, err);
            state
                .metrics
                .record_catalog_operation("update", "category", "error");
            Err(service_error_to_response(err))
        }
    }
}

/// Delete a category and every dish it contains (admin only)
#[instrument(name = "delete_category", skip(state), fields(category_id = category_id))]
pub async fn delete_category(
    State(state): State<AdminState>,
    Path(category_id): Path<u64>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    info!("Admin deleting category with ID: {}", category_id);

    match state.catalog_service.delete_category(category_id).await {
        Ok(()) => {
            info!("Successfully deleted category: {}", category_id);
            state
                .metrics
                .record_catalog_operation("delete", "category", "success");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(err) => {
            error!("Failed to delete category {}: {}", category_id, err);
            state
                .metrics
                .record_catalog_operation("delete", "category", "error");
            Err(service_error_to_response(err))
        }
    }
}

// =============================================================================
// DISH MANAGEMENT
// =============================================================================

/// Create a new dish (admin only)
#[instrument(name = "create_dish", skip(state, request), fields(
    name = %request.name,
    category_id = request.category_id,
    price = %request.price,
))]
pub async fn create_dish(
    State(state): State<AdminState>,
    Json(request): Json<CreateDishRequest>,
) -> Result<(StatusCode, Json<Dish>), (StatusCode, Json<Value>)> {
    info!("Admin creating new dish: {}", request.name);

    match state.catalog_service.create_dish(request).await {
        Ok(dish) => {
            info!("Successfully created dish with ID: {}", dish.id);
            state
                .metrics
                .record_catalog_operation("create", "dish", "success");
            Ok((StatusCode::CREATED, Json(dish)))
        }
        Err(err) => {
            error!("Failed to create dish: {}", err);
            state
                .metrics
                .record_catalog_operation("create", "dish", "error");
            Err(service_error_to_response(err))
        }
    }
}

/// Update an existing dish (admin only)
#[instrument(name = "update_dish", skip(state, request), fields(
    dish_id = dish_id,
    name = %request.name,
    price = %request.price,
))]
pub async fn update_dish(
    State(state): State<AdminState>,
    Path(dish_id): Path<u64>,
    Json(request): Json<UpdateDishRequest>,
) -> Result<Json<Dish>, (StatusCode, Json<Value>)> {
    info!("Admin updating dish with ID: {}", dish_id);

    match state.catalog_service.update_dish(dish_id, request).await {
        Ok(dish) => {
            info!("Successfully updated dish: {}", dish.name);
            state
                .metrics
                .record_catalog_operation("update", "dish", "success");
            Ok(Json(dish))
        }
        Err(err) => {
            error!("Failed to update dish {}: {}", dish_id, err);
            state
                .metrics
                .record_catalog_operation("update", "dish", "error");
            Err(service_error_to_response(err))
        }
    }
}

/// Delete a dish (admin only)
#[instrument(name = "delete_dish", skip(state), fields(dish_id = dish_id))]
pub async fn delete_dish(
    State(state): State<AdminState>,
    Path(dish_id): Path<u64>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    info!("Admin deleting dish with ID: {}", dish_id);

    match state.catalog_service.delete_dish(dish_id).await {
        Ok(()) => {
            info!("Successfully deleted dish: {}", dish_id);
            state
                .metrics
                .record_catalog_operation("delete", "dish", "success");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(err) => {
            error!("Failed to delete dish {}: {}", dish_id, err);
            state
                .metrics
                .record_catalog_operation("delete", "dish", "error");
            Err(service_error_to_response(err))
        }
    }
}

// =============================================================================
// SEEDING
// =============================================================================

/// Seed the catalog with the sample menu (admin only)
#[instrument(name = "seed_catalog", skip(state))]
pub async fn seed_catalog(
    State(state): State<AdminState>,
) -> Result<Json<SeedResponse>, (StatusCode, Json<Value>)> {
    let timestamp = chrono::Utc::now().to_rfc3339();

    info!("Seeding catalog with sample data");

    match seed_sample_catalog(&state.catalog_service).await {
        Ok((categories_created, dishes_created)) => {
            info!(
                "Successfully seeded catalog with {} categories and {} dishes",
                categories_created, dishes_created
            );

            Ok(Json(SeedResponse {
                message: format!(
                    "Catalog seeded successfully with {} categories and {} dishes",
                    categories_created, dishes_created
                ),
                categories_created,
                dishes_created,
                timestamp,
            }))
        }
        Err(err) => {
            warn!("Catalog seeding failed: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to seed catalog",
                    "message": err.to_string(),
                    "timestamp": timestamp,
                })),
            ))
        }
    }
}

/// Seed the sample menu through the ordinary service operations. Also used
/// at startup when the store is empty. Returns (categories, dishes) created.
pub async fn seed_sample_catalog(service: &CatalogService) -> ServiceResult<(usize, usize)> {
    service
        .update_restaurant_info(UpdateRestaurantRequest {
            name: "The Gourmet Kitchen".to_string(),
            address: "123 Main Street, Foodville, FV 12345".to_string(),
            phone: "(555) 123-4567".to_string(),
        })
        .await?;

    let mut categories_created = 0;
    let mut dishes_created = 0;

    for (name, order, dishes) in sample_catalog() {
        let category = service
            .create_category(CreateCategoryRequest {
                name: name.to_string(),
                order,
            })
            .await?;
        categories_created += 1;

        for (dish_name, description, price) in dishes {
            service
                .create_dish(CreateDishRequest {
                    name: dish_name.to_string(),
                    description: description.to_string(),
                    price,
                    is_available: true,
                    category_id: category.id,
                })
                .await?;
            dishes_created += 1;
        }
    }

    Ok((categories_created, dishes_created))
}

/// Sample menu data: categories in display order, each with its dishes
fn sample_catalog() -> Vec<(&'static str, i32, Vec<(&'static str, &'static str, Decimal)>)> {
    vec![
        (
            "Appetizers",
            1,
            vec![
                (
                    "Caesar Salad",
                    "Crisp romaine lettuce with parmesan cheese and croutons",
                    dec!(8.99),
                ),
                (
                    "Bruschetta",
                    "Toasted bread with fresh tomatoes, garlic, and basil",
                    dec!(7.99),
                ),
                (
                    "Garlic Bread",
                    "Homemade bread with garlic butter and herbs",
                    dec!(5.99),
                ),
            ],
        ),
        (
            "Main Courses",
            2,
            vec![
                (
                    "Grilled Salmon",
                    "Fresh Atlantic salmon with lemon butter sauce",
                    dec!(24.99),
                ),
                (
                    "Ribeye Steak",
                    "12oz premium ribeye cooked to perfection",
                    dec!(32.99),
                ),
                (
                    "Chicken Alfredo",
                    "Creamy alfredo pasta with grilled chicken",
                    dec!(18.99),
                ),
                (
                    "Vegetarian Lasagna",
                    "Layers of pasta with vegetables and cheese",
                    dec!(16.99),
                ),
            ],
        ),
        (
            "Desserts",
            3,
            vec![
                (
                    "Tiramisu",
                    "Classic Italian dessert with espresso and mascarpone",
                    dec!(8.99),
                ),
                (
                    "Chocolate Lava Cake",
                    "Warm chocolate cake with molten center",
                    dec!(9.99),
                ),
                (
                    "Cheesecake",
                    "New York style cheesecake with berry compote",
                    dec!(7.99),
                ),
            ],
        ),
        (
            "Beverages",
            4,
            vec![
                (
                    "Fresh Lemonade",
                    "Homemade lemonade with fresh lemons",
                    dec!(3.99),
                ),
                ("Iced Tea", "Refreshing iced tea with mint", dec!(2.99)),
                ("Coffee", "Freshly brewed coffee", dec!(2.49)),
            ],
        ),
    ]
}
