use thiserror::Error;

/// Service-level errors that can occur in business logic
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Category not found: {id}")]
    CategoryNotFound { id: u64 },

    #[error("Dish not found: {id}")]
    DishNotFound { id: u64 },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Repository error: {source}")]
    Repository {
        #[from]
        source: RepositoryError,
    },
}

/// Store-level errors for catalog data access operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Category not found: {id}")]
    CategoryNotFound { id: u64 },

    #[error("Dish not found: {id}")]
    DishNotFound { id: u64 },

    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },
}

/// Validation errors for input data
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredField { field: String },

    #[error("Invalid field value: {field}={value}, reason={reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Field too long: {field}, max_length={max_length}, actual_length={actual_length}")]
    TooLong {
        field: String,
        max_length: usize,
        actual_length: usize,
    },

    #[error("Value out of range: {field}, min={min}, value={value}")]
    OutOfRange {
        field: String,
        min: String,
        value: String,
    },
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Validation {
            message: err.to_string(),
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for store operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ServiceError::CategoryNotFound { id: 7 };
        assert_eq!(error.to_string(), "Category not found: 7");

        let validation_error = ValidationError::RequiredField {
            field: "dish_name".to_string(),
        };
        assert_eq!(
            validation_error.to_string(),
            "Required field missing: dish_name"
        );
    }

    #[test]
    fn test_error_conversion() {
        let validation_error = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: "0".to_string(),
            value: "-10".to_string(),
        };

        let service_error: ServiceError = validation_error.into();
        match service_error {
            ServiceError::Validation { message } => {
                assert!(message.contains("Value out of range"));
            }
            _ => panic!("Expected Validation conversion"),
        }
    }

    #[test]
    fn test_repository_error_passthrough() {
        let repo_error = RepositoryError::DishNotFound { id: 3 };

        let service_error: ServiceError = repo_error.into();
        match service_error {
            ServiceError::Repository { source } => {
                assert!(matches!(source, RepositoryError::DishNotFound { id: 3 }));
            }
            _ => panic!("Expected Repository error"),
        }
    }
}
