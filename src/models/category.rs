use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu category. Ids are assigned by the store and never change; `order`
/// controls display position, ties broken by ascending id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request model for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub order: i32,
}

/// Request model for updating an existing category (id stays immutable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: String,
    pub order: i32,
}

/// Response model for category listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
    pub total_count: usize,
}

impl Category {
    /// Create a new Category with a store-assigned id and fresh timestamps
    pub fn new(id: u64, request: CreateCategoryRequest) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: request.name,
            order: request.order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields and refresh the update timestamp
    pub fn apply(&mut self, request: UpdateCategoryRequest) {
        self.name = request.name;
        self.order = request.order;
        self.updated_at = Utc::now();
    }

    /// Sort key for display ordering: `order` ascending, id breaks ties
    pub fn display_key(&self) -> (i32, u64) {
        (self.order, self.id)
    }
}
