use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::AdminData;
use super::ApiError;
use super::ApiSuccess;
use crate::admin::errors::AdminError;
use crate::domain::admin::models::CreateAdminCommand;
use crate::domain::admin::models::Password;
use crate::domain::admin::ports::AdminServicePort;
use crate::domain::email::EmailAddress;
use crate::inbound::http::router::AppState;

pub async fn create_admin(
    State(state): State<AppState>,
    payload: Result<Json<CreateAdminRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<AdminData>, ApiError> {
    let Json(body) =
        payload.inspect_err(|e| tracing::error!(error = %e, "Invalid request body"))?;

    let command = body
        .try_into_command()
        .inspect_err(|e| tracing::error!(error = %e, "Invalid admin fields"))?;

    let admin = state
        .admin_service
        .create_admin(command)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Admin creation failed"))?;

    let data = AdminData::from(&admin);
    tracing::info!(admin = ?data, "Admin created");

    Ok(ApiSuccess::new(StatusCode::CREATED, data))
}

/// HTTP request body for creating an admin (raw JSON).
///
/// Absent fields decode as empty strings and are rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAdminRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl CreateAdminRequestBody {
    fn try_into_command(self) -> Result<CreateAdminCommand, AdminError> {
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(CreateAdminCommand::new(email, password))
    }
}
