use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::EmployeeData;
use super::EmployeeRequestBody;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::inbound::http::middleware::AuthenticatedAdmin;
use crate::inbound::http::router::AppState;

pub async fn create_employee(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAdmin>,
    payload: Result<Json<EmployeeRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<EmployeeData>, ApiError> {
    let Json(body) = payload.inspect_err(|e| {
        tracing::error!(error = %e, admin_id = %actor.admin_id, "Invalid request body");
    })?;

    let details = body.try_into_details().inspect_err(|e| {
        tracing::error!(error = %e, admin_id = %actor.admin_id, "Invalid employee fields");
    })?;

    let employee = state
        .employee_service
        .create_employee(details)
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, admin_id = %actor.admin_id, "Employee creation failed");
        })?;

    let data = EmployeeData::from(&employee);
    tracing::info!(admin_id = %actor.admin_id, employee = ?data, "Employee created");

    Ok(ApiSuccess::new(StatusCode::CREATED, data))
}
