use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::EmployeeIdQuery;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::employee::errors::EmployeeError;
use crate::inbound::http::middleware::AuthenticatedAdmin;
use crate::inbound::http::router::AppState;

pub async fn delete_employee(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAdmin>,
    Query(query): Query<EmployeeIdQuery>,
) -> Result<StatusCode, ApiError> {
    let employee_id = EmployeeId::from_query(query.id.as_deref())
        .map_err(EmployeeError::from)
        .inspect_err(|e| tracing::error!(error = %e, "Rejected employee deletion"))?;

    state
        .employee_service
        .delete_employee(&employee_id)
        .await
        .inspect_err(|e| {
            tracing::error!(
                error = %e,
                employee_id = %employee_id,
                admin_id = %actor.admin_id,
                "Employee deletion failed"
            );
        })?;

    tracing::info!(employee_id = %employee_id, admin_id = %actor.admin_id, "Employee deleted");

    Ok(StatusCode::NO_CONTENT)
}
