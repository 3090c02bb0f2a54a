use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Restaurant profile. A single instance always exists in the store; it is
/// created with empty defaults and only ever mutated, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub updated_at: DateTime<Utc>,
}

/// Request model for updating the restaurant profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRestaurantRequest {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
}

impl Restaurant {
    /// Empty profile used at store initialization
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            phone: String::new(),
            updated_at: Utc::now(),
        }
    }

    /// Replace the profile fields and refresh the update timestamp
    pub fn apply(&mut self, request: UpdateRestaurantRequest) {
        self.name = request.name;
        self.address = request.address;
        self.phone = request.phone;
        self.updated_at = Utc::now();
    }
}
