use common::{ApiResponse, LoginRequest, RegisterRequest, SessionDto, UserDto};

use super::{get_authorized, post};

/// Register a new account. Callers must run client-side validation first;
/// this function assumes the request is well formed.
pub async fn register(request: &RegisterRequest) -> Result<ApiResponse<UserDto>, String> {
    post("/register", request).await
}

/// Exchange credentials for a signed session token.
pub async fn login(request: &LoginRequest) -> Result<ApiResponse<SessionDto>, String> {
    post("/login", request).await
}

/// Ask the backend whether a stored token is still a valid session.
pub async fn validate_session(token: &str) -> Result<ApiResponse<UserDto>, String> {
    get_authorized("/session", token).await
}
