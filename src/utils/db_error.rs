//! Helpers for classifying database errors.

/// Returns the constraint name if `e` is a unique violation.
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<&str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    db_err.constraint()
}

/// Checks whether `e` is a unique violation on the named constraint.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    unique_violation_constraint(e) == Some(constraint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        let err = sqlx::Error::RowNotFound;

        assert_eq!(unique_violation_constraint(&err), None);
        assert!(!is_unique_violation_on(&err, "employees_email_key"));
    }
}
