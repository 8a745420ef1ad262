use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::admin::models::AdminId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the admin a verified token was issued to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub admin_id: AdminId,
}

/// Middleware that validates the bearer token and adds the admin to request extensions.
///
/// Every failure yields the same 401 response; the cause is only logged.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).ok_or_else(|| {
        tracing::warn!(uri = %req.uri(), "Missing or malformed Authorization header");
        ApiError::unauthorized().into_response()
    })?;

    let admin_id = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!(uri = %req.uri(), cause = %e.cause(), "Token validation failed");
        ApiError::unauthorized().into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedAdmin {
        admin_id: AdminId(admin_id),
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Option<&str> {
    let auth_str = req
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
