//! DTOs for employee endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;
use crate::domain::entities::{Employee, EmployeeDetails};

/// Request body for `POST /api/employees` and `PUT /api/employees/{id}`.
///
/// A PUT replaces every field, so the same shape serves both.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[validate(
        length(max = 50, message = "First name must be at most 50 characters"),
        custom(function = "not_blank")
    )]
    pub first_name: String,

    #[validate(
        length(max = 50, message = "Last name must be at most 50 characters"),
        custom(function = "not_blank")
    )]
    pub last_name: String,

    #[validate(email(message = "Email should be valid"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
    pub phone_number: String,

    #[validate(
        length(max = 100, message = "Department must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub department: String,

    #[validate(
        length(max = 100, message = "Position must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub position: String,

    #[validate(range(min = 0.0, message = "Salary must not be negative"))]
    pub salary: f64,
}

impl From<EmployeeRequest> for EmployeeDetails {
    fn from(r: EmployeeRequest) -> Self {
        EmployeeDetails {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone_number: r.phone_number,
            department: r.department,
            position: r.position,
            salary: r.salary,
        }
    }
}

/// Employee representation returned by every employee endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
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

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        EmployeeResponse {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            phone_number: e.phone_number,
            department: e.department,
            position: e.position,
            salary: e.salary,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> EmployeeRequest {
        serde_json::from_value(value).unwrap()
    }

    fn ada() -> serde_json::Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@x.com",
            "phoneNumber": "123",
            "department": "Eng",
            "position": "Engineer",
            "salary": 100000
        })
    }

    #[test]
    fn test_valid_request_maps_to_details() {
        let req = request(ada());
        assert!(req.validate().is_ok());

        let details = EmployeeDetails::from(req);
        assert_eq!(details.first_name, "Ada");
        assert_eq!(details.salary, 100_000.0);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut body = ada();
        body["firstName"] = json!("   ");

        let errors = request(body).validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut body = ada();
        body["email"] = json!("not-an-email");

        let errors = request(body).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_negative_salary_rejected() {
        let mut body = ada();
        body["salary"] = json!(-1.0);

        assert!(request(body).validate().is_err());
    }

    #[test]
    fn test_phone_number_defaults_to_empty() {
        let mut body = ada();
        body.as_object_mut().unwrap().remove("phoneNumber");

        let req = request(body);
        assert_eq!(req.phone_number, "");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let now = Utc::now();
        let response = EmployeeResponse::from(Employee {
            id: 5,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            phone_number: "123".to_string(),
            department: "Eng".to_string(),
            position: "Engineer".to_string(),
            salary: 1.5,
            created_at: now,
            updated_at: now,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], 5);
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["phoneNumber"], "123");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }
}
