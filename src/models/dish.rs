use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu dish. Every dish belongs to exactly one existing category; the
/// store rejects writes that would leave `category_id` dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_available: bool,
    pub category_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request model for creating a new dish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDishRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default = "default_available")]
    pub is_available: bool,
    pub category_id: u64,
}

/// Request model for updating an existing dish. All fields are replaced;
/// the id stays immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDishRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default = "default_available")]
    pub is_available: bool,
    pub category_id: u64,
}

/// Response model for dish listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishListResponse {
    pub dishes: Vec<Dish>,
    pub total_count: usize,
}

fn default_available() -> bool {
    true
}

impl Dish {
    /// Create a new Dish with a store-assigned id and fresh timestamps
    pub fn new(id: u64, request: CreateDishRequest) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: request.name,
            description: request.description,
            price: request.price,
            is_available: request.is_available,
            category_id: request.category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields and refresh the update timestamp
    pub fn apply(&mut self, request: UpdateDishRequest) {
        self.name = request.name;
        self.description = request.description;
        self.price = request.price;
        self.is_available = request.is_available;
        self.category_id = request.category_id;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_dish_request() -> CreateDishRequest {
        CreateDishRequest {
            name: "Grilled Salmon".to_string(),
            description: "Fresh Atlantic salmon with lemon butter sauce".to_string(),
            price: dec!(24.99),
            is_available: true,
            category_id: 2,
        }
    }

    #[test]
    fn test_dish_creation() {
        let dish = Dish::new(1, create_test_dish_request());

        assert_eq!(dish.id, 1);
        assert_eq!(dish.name, "Grilled Salmon");
        assert_eq!(dish.price, dec!(24.99));
        assert_eq!(dish.category_id, 2);
        assert!(dish.is_available);
    }

    #[test]
    fn test_dish_apply_replaces_all_fields() {
        let mut dish = Dish::new(1, create_test_dish_request());

        dish.apply(UpdateDishRequest {
            name: "Smoked Salmon".to_string(),
            description: String::new(),
            price: dec!(21.50),
            is_available: false,
            category_id: 3,
        });

        assert_eq!(dish.id, 1);
        assert_eq!(dish.name, "Smoked Salmon");
        assert!(dish.description.is_empty());
        assert_eq!(dish.price, dec!(21.50));
        assert!(!dish.is_available);
        assert_eq!(dish.category_id, 3);
    }

    #[test]
    fn test_create_request_defaults() {
        let request: CreateDishRequest =
            serde_json::from_str(r#"{"name":"Soup","price":"5.50","category_id":1}"#).unwrap();

        assert_eq!(request.name, "Soup");
        assert!(request.description.is_empty());
        assert_eq!(request.price, dec!(5.50));
        assert!(request.is_available);
    }

    #[test]
    fn test_serde_roundtrip() {
        let dish = Dish::new(5, create_test_dish_request());

        let json = serde_json::to_string(&dish).unwrap();
        let deserialized: Dish = serde_json::from_str(&json).unwrap();
        assert_eq!(dish, deserialized);
    }
}
