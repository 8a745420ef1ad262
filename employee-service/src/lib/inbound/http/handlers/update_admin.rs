use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::AdminData;
use super::AdminEmailQuery;
use super::ApiError;
use super::ApiSuccess;
use crate::admin::errors::AdminError;
use crate::domain::admin::models::Password;
use crate::domain::admin::models::UpdateAdminCommand;
use crate::domain::admin::ports::AdminServicePort;
use crate::domain::email::EmailAddress;
use crate::inbound::http::middleware::AuthenticatedAdmin;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an admin; only the password is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdminRequestBody {
    #[serde(default)]
    password: Option<String>,
}

impl UpdateAdminRequestBody {
    fn into_command(self) -> UpdateAdminCommand {
        // Empty means "leave unchanged", so Password::new never sees "".
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .and_then(|p| Password::new(p).ok());

        UpdateAdminCommand { password }
    }
}

pub async fn update_admin(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAdmin>,
    Query(query): Query<AdminEmailQuery>,
    payload: Result<Json<UpdateAdminRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<AdminData>, ApiError> {
    let email = EmailAddress::from_query(query.email)
        .map_err(AdminError::from)
        .inspect_err(|e| tracing::error!(error = %e, "Rejected admin update"))?;

    let Json(body) = payload.inspect_err(|e| {
        tracing::error!(error = %e, email = %email, "Invalid request body");
    })?;

    let admin = state
        .admin_service
        .update_admin(&email, body.into_command())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, email = %email, admin_id = %actor.admin_id, "Admin update failed");
            match e {
                AdminError::NotFound(_) => ApiError::from(e),
                _ => ApiError::InternalServerError("Failed to update admin".to_string()),
            }
        })?;

    let data = AdminData::from(&admin);
    tracing::info!(admin_id = %actor.admin_id, admin = ?data, "Admin updated");

    Ok(ApiSuccess::new(StatusCode::OK, data))
}
