use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::admin::ports::AdminServicePort;
use crate::domain::email::EmailAddress;
use crate::inbound::http::router::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Exchange admin credentials for a session token.
///
/// Unknown email, wrong password, unreadable hash and token failures all
/// produce the same 401 response.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) =
        payload.inspect_err(|e| tracing::error!(error = %e, "Invalid request body"))?;

    let email = EmailAddress::new(body.email).map_err(|e| {
        tracing::error!(error = %e, "Login failed");
        invalid_credentials()
    })?;

    let admin = state.admin_service.get_admin(&email).await.map_err(|e| {
        tracing::error!(error = %e, email = %email, "Login failed");
        invalid_credentials()
    })?;

    let result = state
        .authenticator
        .authenticate(&body.password, &admin.password_hash, admin.id.0)
        .map_err(|e| {
            tracing::error!(error = %e, email = %email, "Login failed");
            invalid_credentials()
        })?;

    tracing::info!(admin_id = %admin.id, email = %email, "Admin logged in");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
        },
    ))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
