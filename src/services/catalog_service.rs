use std::sync::Arc;
use tracing::{info, instrument};

use crate::models::{
    Category, CategoryListResponse, CreateCategoryRequest, CreateDishRequest, Dish,
    DishListResponse, RepositoryError, Restaurant, ServiceError, ServiceResult,
    UpdateCategoryRequest, UpdateDishRequest, UpdateRestaurantRequest, Validate,
};
use crate::repositories::MenuRepository;

/// Service for maintaining the menu catalog: restaurant profile, categories
/// and dishes. Validates input, delegates to the store, and passes store
/// errors through unchanged so callers can tell "fix your input" from
/// "entity vanished".
pub struct CatalogService {
    repository: Arc<dyn MenuRepository>,
}

impl CatalogService {
    /// Create a new CatalogService
    pub fn new(repository: Arc<dyn MenuRepository>) -> Self {
        Self { repository }
    }

    /// Get the restaurant profile
    #[instrument(skip(self))]
    pub async fn get_restaurant_info(&self) -> ServiceResult<Restaurant> {
        let restaurant = self
            .repository
            .get_restaurant()
            .await
            .map_err(map_repository_error)?;

        Ok(restaurant)
    }

    /// Update the restaurant profile
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn update_restaurant_info(
        &self,
        request: UpdateRestaurantRequest,
    ) -> ServiceResult<Restaurant> {
        request.validate()?;

        let restaurant = self
            .repository
            .set_restaurant(request)
            .await
            .map_err(map_repository_error)?;

        info!("Restaurant profile updated");
        Ok(restaurant)
    }

    /// List all categories in display order
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<CategoryListResponse> {
        let categories = self
            .repository
            .list_categories()
            .await
            .map_err(map_repository_error)?;

        let total_count = categories.len();
        Ok(CategoryListResponse {
            categories,
            total_count,
        })
    }

    /// Create a new category
    #[instrument(skip(self, request), fields(name = %request.name, order = request.order))]
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> ServiceResult<Category> {
        request.validate()?;

        let category = self
            .repository
            .create_category(request)
            .await
            .map_err(map_repository_error)?;

        info!("Category created with ID: {}", category.id);
        Ok(category)
    }

    /// Update an existing category's name and display order
    #[instrument(skip(self, request), fields(id = id, name = %request.name))]
    pub async fn update_category(
        &self,
        id: u64,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<Category> {
        request.validate()?;

        let category = self
            .repository
            .update_category(id, request)
            .await
            .map_err(map_repository_error)?;

        info!("Category updated");
        Ok(category)
    }

    /// Delete a category and its dishes (cascade)
    #[instrument(skip(self), fields(id = id))]
    pub async fn delete_category(&self, id: u64) -> ServiceResult<()> {
        let dishes_removed = self
            .repository
            .delete_category(id)
            .await
            .map_err(map_repository_error)?;

        info!("Category deleted, {} dishes removed with it", dishes_removed);
        Ok(())
    }

    /// List the dishes of a category, unavailable dishes included
    #[instrument(skip(self), fields(category_id = category_id))]
    pub async fn list_dishes_by_category(
        &self,
        category_id: u64,
    ) -> ServiceResult<DishListResponse> {
        let dishes = self
            .repository
            .list_dishes_by_category(category_id)
            .await
            .map_err(map_repository_error)?;

        let total_count = dishes.len();
        Ok(DishListResponse {
            dishes,
            total_count,
        })
    }

    /// Create a new dish in an existing category
    #[instrument(skip(self, request), fields(name = %request.name, category_id = request.category_id))]
    pub async fn create_dish(&self, request: CreateDishRequest) -> ServiceResult<Dish> {
        request.validate()?;

        let dish = self
            .repository
            .create_dish(request)
            .await
            .map_err(map_repository_error)?;

        info!("Dish created with ID: {}", dish.id);
        Ok(dish)
    }

    /// Replace an existing dish's fields
    #[instrument(skip(self, request), fields(id = id, name = %request.name))]
    pub async fn update_dish(&self, id: u64, request: UpdateDishRequest) -> ServiceResult<Dish> {
        request.validate()?;

        let dish = self
            .repository
            .update_dish(id, request)
            .await
            .map_err(map_repository_error)?;

        info!("Dish updated");
        Ok(dish)
    }

    /// Delete a dish
    #[instrument(skip(self), fields(id = id))]
    pub async fn delete_dish(&self, id: u64) -> ServiceResult<()> {
        self.repository
            .delete_dish(id)
            .await
            .map_err(map_repository_error)?;

        info!("Dish deleted");
        Ok(())
    }
}

/// Surface store not-found errors as their service-level counterparts,
/// unchanged in meaning; anything else stays wrapped.
fn map_repository_error(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::CategoryNotFound { id } => ServiceError::CategoryNotFound { id },
        RepositoryError::DishNotFound { id } => ServiceError::DishNotFound { id },
        other => ServiceError::Repository { source: other },
    }
}
