use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_admin::create_admin;
use super::handlers::create_employee::create_employee;
use super::handlers::delete_admin::delete_admin;
use super::handlers::delete_employee::delete_employee;
use super::handlers::get_admin::get_admin;
use super::handlers::get_employee::get_employee;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::update_admin::update_admin;
use super::handlers::update_employee::update_employee;
use super::middleware::require_bearer;
use crate::domain::admin::ports::AdminServicePort;
use crate::domain::employee::ports::EmployeeServicePort;

#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeServicePort>,
    pub admin_service: Arc<dyn AdminServicePort>,
    pub authenticator: Arc<Authenticator>,
}

/// Build the HTTP application.
///
/// Authorization policy, per route:
///
/// | Route              | Methods                 | Access  |
/// |--------------------|-------------------------|---------|
/// | `/health`          | GET                     | public  |
/// | `/login`           | POST                    | public  |
/// | `/admin`           | POST                    | public  |
/// | `/admin`           | GET, PUT, DELETE        | bearer  |
/// | `/employee`        | POST, GET, PUT, DELETE  | bearer  |
pub fn create_router(
    employee_service: Arc<dyn EmployeeServicePort>,
    admin_service: Arc<dyn AdminServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        employee_service,
        admin_service,
        authenticator,
    };

    let require_auth = middleware::from_fn_with_state(state.clone(), require_bearer);

    let admin_routes = post(create_admin).merge(
        get(get_admin)
            .put(update_admin)
            .delete(delete_admin)
            .route_layer(require_auth.clone()),
    );

    let employee_routes = post(create_employee)
        .get(get_employee)
        .put(update_employee)
        .delete(delete_employee)
        .route_layer(require_auth);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/health", get(health))
        .route("/login", post(login))
        .route("/admin", admin_routes)
        .route("/employee", employee_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
