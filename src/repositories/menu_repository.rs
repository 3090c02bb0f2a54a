use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::models::{
    Category, CreateCategoryRequest, CreateDishRequest, Dish, RepositoryError, RepositoryResult,
    Restaurant, UpdateCategoryRequest, UpdateDishRequest, UpdateRestaurantRequest,
};

/// Trait defining the interface for menu catalog data access operations.
///
/// Implementations own every entity; callers always receive clones, never
/// references into the store.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Get the restaurant profile (always present)
    async fn get_restaurant(&self) -> RepositoryResult<Restaurant>;

    /// Replace the restaurant profile fields
    async fn set_restaurant(&self, request: UpdateRestaurantRequest)
        -> RepositoryResult<Restaurant>;

    /// List all categories sorted by (order, id) ascending
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;

    /// Find a category by its id
    async fn find_category(&self, id: u64) -> RepositoryResult<Option<Category>>;

    /// Create a new category with a store-assigned id
    async fn create_category(&self, request: CreateCategoryRequest) -> RepositoryResult<Category>;

    /// Update an existing category (name and order only)
    async fn update_category(
        &self,
        id: u64,
        request: UpdateCategoryRequest,
    ) -> RepositoryResult<Category>;

    /// Delete a category and every dish referencing it, returning the
    /// number of dishes removed
    async fn delete_category(&self, id: u64) -> RepositoryResult<usize>;

    /// List the dishes of an existing category, ordered by id ascending
    async fn list_dishes_by_category(&self, category_id: u64) -> RepositoryResult<Vec<Dish>>;

    /// Find a dish by its id
    async fn find_dish(&self, id: u64) -> RepositoryResult<Option<Dish>>;

    /// Create a new dish with a store-assigned id; the referenced category
    /// must exist
    async fn create_dish(&self, request: CreateDishRequest) -> RepositoryResult<Dish>;

    /// Replace an existing dish's fields; the referenced category must exist
    async fn update_dish(&self, id: u64, request: UpdateDishRequest) -> RepositoryResult<Dish>;

    /// Delete a dish
    async fn delete_dish(&self, id: u64) -> RepositoryResult<()>;

    /// One consistent snapshot of the whole catalog: restaurant profile and
    /// every category (display order) paired with its dishes (id order)
    async fn menu_snapshot(&self) -> RepositoryResult<MenuSnapshot>;
}

/// Consistent point-in-time view of the catalog
pub type MenuSnapshot = (Restaurant, Vec<(Category, Vec<Dish>)>);

/// Entity sets plus the id counters. Guarded as a whole by one lock so
/// cross-entity invariants (dish -> category) hold atomically.
#[derive(Debug)]
struct CatalogState {
    restaurant: Restaurant,
    categories: BTreeMap<u64, Category>,
    dishes: BTreeMap<u64, Dish>,
    next_category_id: u64,
    next_dish_id: u64,
}

impl CatalogState {
    fn new() -> Self {
        Self {
            restaurant: Restaurant::empty(),
            categories: BTreeMap::new(),
            dishes: BTreeMap::new(),
            next_category_id: 1,
            next_dish_id: 1,
        }
    }

    fn sorted_categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.categories.values().cloned().collect();
        categories.sort_by_key(|c| c.display_key());
        categories
    }

    /// Dishes of one category in id order (BTreeMap iterates ascending)
    fn dishes_of(&self, category_id: u64) -> Vec<Dish> {
        self.dishes
            .values()
            .filter(|d| d.category_id == category_id)
            .cloned()
            .collect()
    }
}

/// In-memory implementation of the MenuRepository trait.
///
/// A single RwLock serializes mutations and gives readers consistent
/// snapshots; no await point ever holds the guard across external work, so
/// operations complete in time proportional to catalog size.
pub struct InMemoryMenuRepository {
    state: RwLock<CatalogState>,
}

impl InMemoryMenuRepository {
    /// Create an empty catalog: default restaurant profile, no categories,
    /// no dishes, id counters at 1
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState::new()),
        }
    }
}

impl Default for InMemoryMenuRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Last-line invariant checks. The service layer validates fields with
/// friendlier errors before calling in; these keep the invariants intact
/// for any caller that reaches the store directly.
fn require_name(name: &str) -> RepositoryResult<()> {
    if name.trim().is_empty() {
        return Err(RepositoryError::ConstraintViolation {
            message: "name must not be empty".to_string(),
        });
    }
    Ok(())
}

fn require_non_negative_price(price: &Decimal) -> RepositoryResult<()> {
    if *price < Decimal::ZERO {
        return Err(RepositoryError::ConstraintViolation {
            message: format!("price must not be negative: {}", price),
        });
    }
    Ok(())
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    #[instrument(skip(self))]
    async fn get_restaurant(&self) -> RepositoryResult<Restaurant> {
        let state = self.state.read().await;
        Ok(state.restaurant.clone())
    }

    #[instrument(skip(self, request))]
    async fn set_restaurant(
        &self,
        request: UpdateRestaurantRequest,
    ) -> RepositoryResult<Restaurant> {
        require_name(&request.name)?;

        let mut state = self.state.write().await;
        state.restaurant.apply(request);
        Ok(state.restaurant.clone())
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let state = self.state.read().await;
        Ok(state.sorted_categories())
    }

    #[instrument(skip(self))]
    async fn find_category(&self, id: u64) -> RepositoryResult<Option<Category>> {
        let state = self.state.read().await;
        Ok(state.categories.get(&id).cloned())
    }

    #[instrument(skip(self, request))]
    async fn create_category(&self, request: CreateCategoryRequest) -> RepositoryResult<Category> {
        require_name(&request.name)?;

        let mut state = self.state.write().await;

        let id = state.next_category_id;
        let category = Category::new(id, request);
        state.categories.insert(id, category.clone());
        state.next_category_id += 1;

        Ok(category)
    }

    #[instrument(skip(self, request))]
    async fn update_category(
        &self,
        id: u64,
        request: UpdateCategoryRequest,
    ) -> RepositoryResult<Category> {
        require_name(&request.name)?;

        let mut state = self.state.write().await;

        let category = state
            .categories
            .get_mut(&id)
            .ok_or(RepositoryError::CategoryNotFound { id })?;
        category.apply(request);

        Ok(category.clone())
    }

    #[instrument(skip(self))]
    async fn delete_category(&self, id: u64) -> RepositoryResult<usize> {
        let mut state = self.state.write().await;

        if state.categories.remove(&id).is_none() {
            return Err(RepositoryError::CategoryNotFound { id });
        }

        // Cascade: dishes must never reference a missing category
        let before = state.dishes.len();
        state.dishes.retain(|_, dish| dish.category_id != id);

        Ok(before - state.dishes.len())
    }

    #[instrument(skip(self))]
    async fn list_dishes_by_category(&self, category_id: u64) -> RepositoryResult<Vec<Dish>> {
        let state = self.state.read().await;

        if !state.categories.contains_key(&category_id) {
            return Err(RepositoryError::CategoryNotFound { id: category_id });
        }

        Ok(state.dishes_of(category_id))
    }

    #[instrument(skip(self))]
    async fn find_dish(&self, id: u64) -> RepositoryResult<Option<Dish>> {
        let state = self.state.read().await;
        Ok(state.dishes.get(&id).cloned())
    }

    #[instrument(skip(self, request), fields(category_id = request.category_id))]
    async fn create_dish(&self, request: CreateDishRequest) -> RepositoryResult<Dish> {
        require_name(&request.name)?;
        require_non_negative_price(&request.price)?;

        let mut state = self.state.write().await;

        if !state.categories.contains_key(&request.category_id) {
            return Err(RepositoryError::CategoryNotFound {
                id: request.category_id,
            });
        }

        let id = state.next_dish_id;
        let dish = Dish::new(id, request);
        state.dishes.insert(id, dish.clone());
        state.next_dish_id += 1;

        Ok(dish)
    }

    #[instrument(skip(self, request), fields(category_id = request.category_id))]
    async fn update_dish(&self, id: u64, request: UpdateDishRequest) -> RepositoryResult<Dish> {
        require_name(&request.name)?;
        require_non_negative_price(&request.price)?;

        let mut state = self.state.write().await;

        if !state.dishes.contains_key(&id) {
            return Err(RepositoryError::DishNotFound { id });
        }
        if !state.categories.contains_key(&request.category_id) {
            return Err(RepositoryError::CategoryNotFound {
                id: request.category_id,
            });
        }

        let dish = state
            .dishes
            .get_mut(&id)
            .ok_or(RepositoryError::DishNotFound { id })?;
        dish.apply(request);

        Ok(dish.clone())
    }

    #[instrument(skip(self))]
    async fn delete_dish(&self, id: u64) -> RepositoryResult<()> {
        let mut state = self.state.write().await;

        if state.dishes.remove(&id).is_none() {
            return Err(RepositoryError::DishNotFound { id });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn menu_snapshot(&self) -> RepositoryResult<MenuSnapshot> {
        let state = self.state.read().await;

        let categories = state
            .sorted_categories()
            .into_iter()
            .map(|category| {
                let dishes = state.dishes_of(category.id);
                (category, dishes)
            })
            .collect();

        Ok((state.restaurant.clone(), categories))
    }
}
