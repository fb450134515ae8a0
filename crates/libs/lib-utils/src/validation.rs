//! # Validation Utilities
//!
//! Input validation helpers for forms before anything is sent to the backend.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that a quantity is strictly positive.
pub fn validate_positive(value: i64, field_name: &str) -> Result<(), String> {
    if value > 0 {
        Ok(())
    } else {
        Err(format!("{} must be greater than 0", field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("admin", "Username").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Username"),
            Err("Username cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(1, "Quantity").is_ok());
        assert_eq!(
            validate_positive(0, "Quantity"),
            Err("Quantity must be greater than 0".to_string())
        );
        assert!(validate_positive(-5, "Quantity").is_err());
    }
}
