use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use super::EmployeeIdQuery;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::employee::errors::EmployeeError;
use crate::inbound::http::middleware::AuthenticatedAdmin;
use crate::inbound::http::router::AppState;

pub async fn get_employee(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAdmin>,
    Query(query): Query<EmployeeIdQuery>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id = EmployeeId::from_query(query.id.as_deref())
        .map_err(EmployeeError::from)
        .inspect_err(|e| tracing::error!(error = %e, "Rejected employee lookup"))?;

    let employee = state
        .employee_service
        .get_employee(&employee_id)
        .await
        .inspect_err(|e| {
            tracing::error!(
                error = %e,
                employee_id = %employee_id,
                admin_id = %actor.admin_id,
                "Employee not found"
            );
        })?;

    let data = EmployeeData::from(&employee);
    tracing::info!(admin_id = %actor.admin_id, employee = ?data, "Employee retrieved");

    Ok(ApiSuccess::new(StatusCode::OK, data))
}
