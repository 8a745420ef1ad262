use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use super::EmployeeIdQuery;
use super::EmployeeRequestBody;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::employee::errors::EmployeeError;
use crate::inbound::http::middleware::AuthenticatedAdmin;
use crate::inbound::http::router::AppState;

/// Full replacement of an employee. The id from the query string wins over
/// anything the body carries.
pub async fn update_employee(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAdmin>,
    Query(query): Query<EmployeeIdQuery>,
    payload: Result<Json<EmployeeRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let employee_id = EmployeeId::from_query(query.id.as_deref())
        .map_err(EmployeeError::from)
        .inspect_err(|e| tracing::error!(error = %e, "Rejected employee update"))?;

    let Json(body) = payload.inspect_err(|e| {
        tracing::error!(error = %e, employee_id = %employee_id, "Invalid request body");
    })?;

    let details = body.try_into_details().inspect_err(|e| {
        tracing::error!(error = %e, employee_id = %employee_id, "Invalid employee fields");
    })?;

    let employee = state
        .employee_service
        .replace_employee(&employee_id, details)
        .await
        .inspect_err(|e| {
            tracing::error!(
                error = %e,
                employee_id = %employee_id,
                admin_id = %actor.admin_id,
                "Employee update failed"
            );
        })?;

    let data = EmployeeData::from(&employee);
    tracing::info!(admin_id = %actor.admin_id, employee = ?data, "Employee updated");

    Ok(ApiSuccess::new(StatusCode::OK, data))
}
