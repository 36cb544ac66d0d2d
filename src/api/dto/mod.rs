//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON (camelCase field names) and validator for
//! input validation. Entities never cross the HTTP boundary directly.

pub mod employee;
pub mod health;
pub mod user;

use validator::ValidationError;

/// Rejects strings that are empty or contain only whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Ada").is_ok());
        assert!(not_blank(" a ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t").is_err());
    }
}
