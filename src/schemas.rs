use std::sync::Arc;

use common::{SentimentDto, UserDto};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::auth::SessionKeys;

pub use common::{ApiResponse, ErrorResponse};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for sentiment analyses keyed by input text
    pub sentiment_cache: Cache<String, SentimentDto>,
    /// Polarity scorer
    pub analyzer: analysis::PolarityAnalyzer,
    /// Keys for issuing and verifying session tokens
    pub session_keys: Arc<SessionKeys>,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::session::validate_session,
        crate::handlers::sentiment::analyze_sentiment,
    ),
    components(
        schemas(
            ApiResponse<UserDto>,
            ApiResponse<common::SessionDto>,
            ApiResponse<SentimentDto>,
            ErrorResponse,
            HealthResponse,
            common::RegisterRequest,
            common::LoginRequest,
            common::SentimentRequest,
            common::UserDto,
            common::SessionDto,
            common::SentimentDto,
            common::Sentiment,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration, login and session validation"),
        (name = "sentiment", description = "Market sentiment analysis"),
    ),
    info(
        title = "StockSense API",
        description = "Market sentiment and stock prediction portal backend",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
