//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

mod sentiment;

pub use sentiment::Sentiment;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own handlers returning this shape; we keep a
/// single definition here so the frontend can reuse it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success flag (always false for errors)
    pub success: bool,
}

// ===================== Auth =====================

/// Request body for registering a new user.
///
/// The same validation rules run on both sides: the frontend calls
/// [`validator::Validate::validate`] before building the request, so a form
/// that fails these checks never reaches the network, and the backend
/// re-checks on arrival.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile_number: String,
    /// Age as entered in the form; parsed and range-checked by the backend.
    #[validate(length(min = 1, message = "Age is required"))]
    pub age: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

impl RegisterRequest {
    /// First human-readable validation message, if any rule fails.
    ///
    /// The derive reports all violations keyed by field; forms only show one
    /// message at a time, so pick the first in field-declaration order.
    pub fn first_validation_error(&self) -> Option<String> {
        let errors = match self.validate() {
            Ok(()) => return None,
            Err(errors) => errors,
        };

        const FIELD_ORDER: [&str; 6] = [
            "name",
            "mobile_number",
            "age",
            "email",
            "password",
            "confirm_password",
        ];

        for field in FIELD_ORDER {
            if let Some(field_errors) = errors.field_errors().get(field) {
                if let Some(error) = field_errors.first() {
                    return Some(
                        error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid value for {field}")),
                    );
                }
            }
        }

        Some("Invalid registration data".to_string())
    }
}

/// Request body for logging in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registered user as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Successful login payload: a signed session token plus the user it
/// belongs to. The frontend keeps the token in sessionStorage and presents
/// it as a bearer token on protected requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionDto {
    pub token: String,
    pub user: UserDto,
}

// ===================== Sentiment =====================

/// Request body for sentiment analysis.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SentimentRequest {
    pub text: String,
}

/// Sentiment analysis result.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SentimentDto {
    pub sentiment: Sentiment,
    /// Polarity score in [-1.0, 1.0].
    pub polarity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            name: "Asha Rao".to_string(),
            mobile_number: "9876543210".to_string(),
            age: "27".to_string(),
            email: "asha@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            confirm_password: "hunter2hunter2".to_string(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert_eq!(valid_request().first_validation_error(), None);
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let request = RegisterRequest {
            confirm_password: "something-else".to_string(),
            ..valid_request()
        };
        assert_eq!(
            request.first_validation_error().as_deref(),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn short_password_is_rejected() {
        let request = RegisterRequest {
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            ..valid_request()
        };
        assert_eq!(
            request.first_validation_error().as_deref(),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        assert_eq!(
            request.first_validation_error().as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn missing_fields_report_the_first_in_form_order() {
        let request = RegisterRequest {
            name: String::new(),
            mobile_number: String::new(),
            ..valid_request()
        };
        assert_eq!(
            request.first_validation_error().as_deref(),
            Some("Name is required")
        );
    }

    #[test]
    fn sentiment_labels_serialize_lowercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
        let parsed: Sentiment = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(parsed, Sentiment::Neutral);
    }
}
