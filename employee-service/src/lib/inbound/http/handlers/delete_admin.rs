use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::AdminEmailQuery;
use super::ApiError;
use crate::admin::errors::AdminError;
use crate::domain::admin::ports::AdminServicePort;
use crate::domain::email::EmailAddress;
use crate::inbound::http::middleware::AuthenticatedAdmin;
use crate::inbound::http::router::AppState;

pub async fn delete_admin(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAdmin>,
    Query(query): Query<AdminEmailQuery>,
) -> Result<StatusCode, ApiError> {
    let email = EmailAddress::from_query(query.email)
        .map_err(AdminError::from)
        .inspect_err(|e| tracing::error!(error = %e, "Rejected admin deletion"))?;

    state
        .admin_service
        .delete_admin(&email)
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, email = %email, admin_id = %actor.admin_id, "Admin deletion failed");
        })?;

    tracing::info!(email = %email, admin_id = %actor.admin_id, "Admin deleted");

    Ok(StatusCode::NO_CONTENT)
}
