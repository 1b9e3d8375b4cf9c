#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;

    use crate::auth::SessionKeys;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use moka::future::Cache;
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const TEST_SECRET: &str = "test-session-secret";

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;

        AppState {
            db,
            sentiment_cache: Cache::new(100),
            analyzer: analysis::PolarityAnalyzer::new(),
            session_keys: Arc::new(SessionKeys::new(TEST_SECRET)),
        }
    }

    /// Insert a user directly, bypassing the register endpoint.
    pub async fn insert_test_user(db: &DatabaseConnection, email: &str, password: &str) -> i32 {
        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).expect("Failed to hash test password");

        let user = model::entities::user::ActiveModel {
            name: Set("Test User".to_string()),
            mobile_number: Set("9000000000".to_string()),
            age: Set(30),
            email: Set(email.to_string()),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(db)
            .await
            .expect("Failed to insert test user")
            .id
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Captured by the test harness
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }

    /// Create axum app plus a handle to its database.
    pub async fn setup_test_app_with_state() -> (Router, AppState) {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        (create_router(state.clone()), state)
    }
}
