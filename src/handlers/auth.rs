use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use common::{LoginRequest, RegisterRequest, SessionDto, UserDto};
use model::entities::user;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use tracing::{debug, error, info, instrument, trace, warn};

use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Minimum age accepted at registration.
const MINIMUM_AGE: i32 = 18;

fn bad_request(error: impl Into<String>, code: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }),
    )
}

pub fn user_dto(model: user::Model) -> UserDto {
    UserDto {
        id: model.id,
        name: model.name,
        email: model.email,
    }
}

/// Map a failed user insert to a response. A concurrent registration can
/// slip past the duplicate precheck and trip the unique email index, which
/// is still the caller's duplicate, not a server fault.
fn insert_error_response(db_error: &DbErr) -> (StatusCode, Json<ErrorResponse>) {
    let message = db_error.to_string().to_lowercase();
    if message.contains("unique") || message.contains("constraint") {
        bad_request("Email already registered", "EMAIL_ALREADY_REGISTERED")
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error while registering user".to_string(),
                code: "DATABASE_ERROR".to_string(),
                success: false,
            }),
        )
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid registration data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(request))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering register function");
    debug!("Registering user with email: {}", request.email);

    // Field-level checks: presence, email shape, password length and match.
    // These mirror the frontend's pre-submit validation.
    if let Some(message) = request.first_validation_error() {
        warn!("Registration validation failed: {}", message);
        return Err(bad_request(message, "VALIDATION_ERROR"));
    }

    let age: i32 = match request.age.trim().parse() {
        Ok(age) => age,
        Err(_) => {
            warn!("Registration rejected: unparseable age '{}'", request.age);
            return Err(bad_request("Invalid age format", "INVALID_AGE"));
        }
    };

    if age < MINIMUM_AGE {
        warn!("Registration rejected: age {} below minimum", age);
        return Err(bad_request(
            "You must be 18 or older to register",
            "UNDERAGE",
        ));
    }

    trace!("Checking whether email is already registered");
    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(request.email.clone()))
        .one(&state.db)
        .await
        .map_err(|db_error| {
            error!("Failed to look up email '{}': {}", request.email, db_error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while registering user".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            )
        })?;

    if existing.is_some() {
        warn!("Registration rejected: email '{}' already taken", request.email);
        return Err(bad_request(
            "Email already registered",
            "EMAIL_ALREADY_REGISTERED",
        ));
    }

    trace!("Hashing password");
    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST).map_err(|e| {
        error!("Failed to hash password: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error while registering user".to_string(),
                code: "PASSWORD_HASH_ERROR".to_string(),
                success: false,
            }),
        )
    })?;

    let new_user = user::ActiveModel {
        name: Set(request.name.clone()),
        mobile_number: Set(request.mobile_number.clone()),
        age: Set(age),
        email: Set(request.email.clone()),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    trace!("Attempting to insert new user into database");
    match new_user.insert(&state.db).await {
        Ok(user_model) => {
            info!(
                "User registered successfully with ID: {}, email: {}",
                user_model.id, user_model.email
            );
            let response = ApiResponse {
                data: user_dto(user_model),
                message: "Registration successful!".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!("Failed to register user '{}': {}", request.email, db_error);
            Err(insert_error_response(&db_error))
        }
    }
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<SessionDto>),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<SessionDto>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering login function");
    debug!("Login attempt for email: {}", request.email);

    let invalid_credentials = || {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Invalid email or password".to_string(),
                code: "INVALID_CREDENTIALS".to_string(),
                success: false,
            }),
        )
    };

    if request.email.trim().is_empty() || request.password.is_empty() {
        warn!("Login rejected: missing email or password");
        return Err(bad_request(
            "Email and password are required",
            "MISSING_CREDENTIALS",
        ));
    }

    trace!("Looking up user by email");
    let user_model = user::Entity::find()
        .filter(user::Column::Email.eq(request.email.clone()))
        .one(&state.db)
        .await
        .map_err(|db_error| {
            error!("Failed to look up user '{}': {}", request.email, db_error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error while logging in".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            )
        })?;

    let Some(user_model) = user_model else {
        warn!("Login failed: no user for email '{}'", request.email);
        return Err(invalid_credentials());
    };

    trace!("Verifying password hash");
    let password_matches =
        bcrypt::verify(&request.password, &user_model.password_hash).unwrap_or(false);
    if !password_matches {
        warn!("Login failed: wrong password for user {}", user_model.id);
        return Err(invalid_credentials());
    }

    let token = state.session_keys.issue(&user_model).map_err(|e| {
        error!("Failed to issue session token for user {}: {}", user_model.id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error while logging in".to_string(),
                code: "TOKEN_ERROR".to_string(),
                success: false,
            }),
        )
    })?;

    info!("User {} logged in successfully", user_model.id);
    let response = ApiResponse {
        data: SessionDto {
            token,
            user: user_dto(user_model),
        },
        message: "Login successful!".to_string(),
        success: true,
    };
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_on_insert_is_a_duplicate_email_bad_request() {
        let error = DbErr::Custom("UNIQUE constraint failed: users.email".to_string());
        let (status, Json(body)) = insert_error_response(&error);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "EMAIL_ALREADY_REGISTERED");
        assert_eq!(body.error, "Email already registered");
    }

    #[test]
    fn other_insert_failures_stay_internal_errors() {
        let error = DbErr::Custom("connection reset by peer".to_string());
        let (status, Json(body)) = insert_error_response(&error);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "DATABASE_ERROR");
    }
}
