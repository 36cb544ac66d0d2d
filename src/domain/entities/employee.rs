//! Employee entity.

use chrono::{DateTime, Utc};

/// A persisted employee record.
///
/// `id`, `created_at` and `updated_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Returns the mutable fields of this employee.
    pub fn details(&self) -> EmployeeDetails {
        EmployeeDetails {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
            salary: self.salary,
        }
    }
}

/// Caller-supplied fields of an employee.
///
/// Used both to insert a new record and to overwrite an existing one; an
/// update always replaces every field.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_details() -> EmployeeDetails {
        EmployeeDetails {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            phone_number: "123".to_string(),
            department: "Eng".to_string(),
            position: "Engineer".to_string(),
            salary: 100_000.0,
        }
    }

    #[test]
    fn test_details_mirror_entity_fields() {
        let now = Utc::now();
        let d = sample_details();
        let employee = Employee {
            id: 1,
            first_name: d.first_name.clone(),
            last_name: d.last_name.clone(),
            email: d.email.clone(),
            phone_number: d.phone_number.clone(),
            department: d.department.clone(),
            position: d.position.clone(),
            salary: d.salary,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(employee.details(), d);
    }
}
