use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use moka::future::Cache;
use sea_orm::Database;

use crate::auth::SessionKeys;
use crate::schemas::AppState;

/// Initialize application state for a given database URL.
pub async fn initialize_app_state_with_url(
    database_url: &str,
    session_secret: &str,
) -> Result<AppState> {
    // Connect to database
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    // Sentiment analyses are deterministic per input, so a short-lived
    // cache absorbs repeated submissions of the same text.
    let sentiment_cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    Ok(AppState {
        db,
        sentiment_cache,
        analyzer: analysis::PolarityAnalyzer::new(),
        session_keys: Arc::new(SessionKeys::new(session_secret)),
    })
}
