use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::AdminData;
use super::AdminEmailQuery;
use super::ApiError;
use super::ApiSuccess;
use crate::admin::errors::AdminError;
use crate::domain::admin::ports::AdminServicePort;
use crate::domain::email::EmailAddress;
use crate::inbound::http::middleware::AuthenticatedAdmin;
use crate::inbound::http::router::AppState;

pub async fn get_admin(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAdmin>,
    Query(query): Query<AdminEmailQuery>,
) -> Result<ApiSuccess<AdminData>, ApiError> {
    let email = EmailAddress::from_query(query.email)
        .map_err(AdminError::from)
        .inspect_err(|e| tracing::error!(error = %e, "Rejected admin lookup"))?;

    let admin = state
        .admin_service
        .get_admin(&email)
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, admin_id = %actor.admin_id, "Admin lookup failed");
        })?;

    let data = AdminData::from(&admin);
    tracing::info!(admin_id = %actor.admin_id, admin = ?data, "Admin retrieved");

    Ok(ApiSuccess::new(StatusCode::OK, data))
}
