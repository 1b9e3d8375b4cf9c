use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use common::UserDto;
use tracing::{debug, instrument, trace, warn};

use crate::schemas::{ApiResponse, AppState, ErrorResponse};

fn unauthorized(error: &str, code: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: error.to_string(),
            code: code.to_string(),
            success: false,
        }),
    )
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Validate the caller's session token
///
/// The frontend calls this when a protected route mounts, so a stale or
/// forged token in sessionStorage is caught server-side instead of being
/// trusted as a local flag.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    tag = "auth",
    responses(
        (status = 200, description = "Session is valid", body = ApiResponse<UserDto>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    ),
    security(
        ("bearer_token" = [])
    )
)]
#[instrument(skip(headers))]
pub async fn validate_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering validate_session function");

    let Some(token) = bearer_token(&headers) else {
        warn!("Session validation failed: no bearer token presented");
        return Err(unauthorized("Missing bearer token", "MISSING_TOKEN"));
    };

    let claims = state.session_keys.verify(token).map_err(|e| {
        warn!("Session validation failed: {}", e);
        unauthorized("Invalid or expired session", "INVALID_SESSION")
    })?;

    debug!("Session valid for user {}", claims.sub);
    let response = ApiResponse {
        data: UserDto {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
        },
        message: "Session is valid".to_string(),
        success: true,
    };
    Ok(Json(response))
}
