use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::admin::errors::AdminError;
use crate::domain::admin::models::Admin;
use crate::domain::email::EmailAddress;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::employee::errors::EmployeeError;

pub mod create_admin;
pub mod create_employee;
pub mod delete_admin;
pub mod delete_employee;
pub mod get_admin;
pub mod get_employee;
pub mod health;
pub mod login;
pub mod update_admin;
pub mod update_employee;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn unauthorized() -> Self {
        ApiError::Unauthorized("Unauthorized".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::InternalServerError(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unauthorized(msg) => msg,
        };

        (status, Json(ApiErrorData { error: message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::InvalidEmployeeId(_)
            | EmployeeError::InvalidEmail(_)
            | EmployeeError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            EmployeeError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EmployeeError::DatabaseError(_) => {
                ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::InvalidEmail(_)
            | AdminError::InvalidPassword(_)
            | AdminError::EmailAlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            AdminError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AdminError::PasswordHashing(_) | AdminError::DatabaseError(_) => {
                ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub error: String,
}

/// Query string carrying an employee identifier (`?id=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeIdQuery {
    pub id: Option<String>,
}

/// Query string carrying an admin email (`?email=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminEmailQuery {
    pub email: Option<String>,
}

/// Employee fields as sent by clients for create and full replace.
///
/// Any `id` or timestamp in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequestBody {
    first_name: String,
    last_name: String,
    email: String,
    #[serde(default)]
    address: Option<String>,
}

impl EmployeeRequestBody {
    fn try_into_details(self) -> Result<EmployeeDetails, EmployeeError> {
        let email = EmailAddress::new(self.email)?;
        Ok(EmployeeDetails::new(
            self.first_name,
            self.last_name,
            email,
            self.address,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.0,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.as_str().to_string(),
            address: employee.address.clone(),
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// Outward representation of an admin; the password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminData {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Admin> for AdminData {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.0,
            email: admin.email.as_str().to_string(),
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::email::EmailError;
    use crate::domain::employee::models::EmployeeId;
    use crate::employee::errors::EmployeeIdError;

    #[test]
    fn test_employee_error_mapping() {
        let cases = [
            (
                EmployeeError::InvalidEmployeeId(EmployeeIdError::Missing),
                StatusCode::BAD_REQUEST,
            ),
            (
                EmployeeError::InvalidEmail(EmailError::Missing),
                StatusCode::BAD_REQUEST,
            ),
            (
                EmployeeError::EmailAlreadyExists("a@example.com".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (EmployeeError::NotFound(EmployeeId(1)), StatusCode::NOT_FOUND),
            (
                EmployeeError::DatabaseError("timeout".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_admin_error_mapping() {
        assert_eq!(
            ApiError::from(AdminError::NotFound("a@example.com".to_string())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(AdminError::PasswordHashing("boom".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(AdminError::EmailAlreadyExists("a@example.com".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_database_detail_not_exposed() {
        let err = ApiError::from(EmployeeError::DatabaseError("password auth failed".to_string()));
        assert_eq!(
            err,
            ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_admin_data_has_no_password_field() {
        let admin = Admin {
            id: crate::domain::admin::models::AdminId(3),
            email: EmailAddress::new("root@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(AdminData::from(&admin)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["email"], "root@example.com");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
