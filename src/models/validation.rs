use rust_decimal::Decimal;

use super::{
    CreateCategoryRequest, CreateDishRequest, UpdateCategoryRequest, UpdateDishRequest,
    UpdateRestaurantRequest, ValidationError, ValidationResult,
};

/// Trait for validating input models
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

/// Validation constants. Length caps match the catalog's column sizes
/// (restaurant and dish names 255, category names 100, phone 50).
pub const MAX_RESTAURANT_NAME_LENGTH: usize = 255;
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;
pub const MAX_DISH_NAME_LENGTH: usize = 255;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
pub const MAX_ADDRESS_LENGTH: usize = 255;
pub const MAX_PHONE_LENGTH: usize = 50;
pub const MIN_PRICE: Decimal = Decimal::ZERO;

impl Validate for UpdateRestaurantRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_name("restaurant_name", &self.name, MAX_RESTAURANT_NAME_LENGTH)?;
        validate_optional_text("restaurant_address", &self.address, MAX_ADDRESS_LENGTH)?;
        validate_optional_text("restaurant_phone", &self.phone, MAX_PHONE_LENGTH)?;
        Ok(())
    }
}

impl Validate for CreateCategoryRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_name("category_name", &self.name, MAX_CATEGORY_NAME_LENGTH)
    }
}

impl Validate for UpdateCategoryRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_name("category_name", &self.name, MAX_CATEGORY_NAME_LENGTH)
    }
}

impl Validate for CreateDishRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_name("dish_name", &self.name, MAX_DISH_NAME_LENGTH)?;
        validate_optional_text("dish_description", &self.description, MAX_DESCRIPTION_LENGTH)?;
        validate_price(&self.price)?;
        Ok(())
    }
}

impl Validate for UpdateDishRequest {
    fn validate(&self) -> ValidationResult<()> {
        validate_name("dish_name", &self.name, MAX_DISH_NAME_LENGTH)?;
        validate_optional_text("dish_description", &self.description, MAX_DESCRIPTION_LENGTH)?;
        validate_price(&self.price)?;
        Ok(())
    }
}

/// Validate a required name field
pub fn validate_name(field: &str, name: &str, max_length: usize) -> ValidationResult<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }

    if trimmed.len() > max_length {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max_length,
            actual_length: trimmed.len(),
        });
    }

    if trimmed
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t')
    {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: name.to_string(),
            reason: "Contains invalid control characters".to_string(),
        });
    }

    Ok(())
}

/// Validate an optional text field (empty allowed, length capped)
pub fn validate_optional_text(field: &str, text: &str, max_length: usize) -> ValidationResult<()> {
    if text.len() > max_length {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max_length,
            actual_length: text.len(),
        });
    }

    Ok(())
}

/// Validate a dish price. Zero is a legal price; negative values are not.
pub fn validate_price(price: &Decimal) -> ValidationResult<()> {
    if *price < MIN_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "dish_price".to_string(),
            min: MIN_PRICE.to_string(),
            value: price.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_name_validation() {
        assert!(validate_name("category_name", "Starters", MAX_CATEGORY_NAME_LENGTH).is_ok());
        assert!(validate_name("category_name", "", MAX_CATEGORY_NAME_LENGTH).is_err());
        assert!(validate_name("category_name", "   ", MAX_CATEGORY_NAME_LENGTH).is_err());
        assert!(
            validate_name("category_name", &"a".repeat(100), MAX_CATEGORY_NAME_LENGTH).is_ok()
        );
        assert!(
            validate_name("category_name", &"a".repeat(101), MAX_CATEGORY_NAME_LENGTH).is_err()
        );
        assert!(validate_name("dish_name", "Crème brûlée", MAX_DISH_NAME_LENGTH).is_ok());
        assert!(validate_name("dish_name", "Soup\x00", MAX_DISH_NAME_LENGTH).is_err());
    }

    #[test]
    fn test_price_validation() {
        assert!(validate_price(&dec!(5.50)).is_ok());
        assert!(validate_price(&Decimal::ZERO).is_ok());
        assert!(validate_price(&dec!(-0.01)).is_err());
        assert!(validate_price(&dec!(-1)).is_err());
    }

    #[test]
    fn test_optional_text_validation() {
        assert!(validate_optional_text("dish_description", "", MAX_DESCRIPTION_LENGTH).is_ok());
        assert!(validate_optional_text(
            "dish_description",
            &"a".repeat(MAX_DESCRIPTION_LENGTH),
            MAX_DESCRIPTION_LENGTH
        )
        .is_ok());
        assert!(validate_optional_text(
            "dish_description",
            &"a".repeat(MAX_DESCRIPTION_LENGTH + 1),
            MAX_DESCRIPTION_LENGTH
        )
        .is_err());
    }

    #[test]
    fn test_create_dish_request_validation() {
        let valid = CreateDishRequest {
            name: "Soup".to_string(),
            description: "Tomato soup".to_string(),
            price: dec!(5.50),
            is_available: true,
            category_id: 1,
        };
        assert!(valid.validate().is_ok());

        let mut negative_price = valid.clone();
        negative_price.price = dec!(-1);
        assert!(negative_price.validate().is_err());

        let mut empty_name = valid;
        empty_name.name = String::new();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_update_restaurant_request_validation() {
        let valid = UpdateRestaurantRequest {
            name: "The Gourmet Kitchen".to_string(),
            address: String::new(),
            phone: String::new(),
        };
        assert!(valid.validate().is_ok());

        let empty_name = UpdateRestaurantRequest {
            name: "  ".to_string(),
            address: String::new(),
            phone: String::new(),
        };
        assert!(empty_name.validate().is_err());

        let long_phone = UpdateRestaurantRequest {
            name: "The Gourmet Kitchen".to_string(),
            address: String::new(),
            phone: "5".repeat(MAX_PHONE_LENGTH + 1),
        };
        assert!(long_phone.validate().is_err());
    }
}
