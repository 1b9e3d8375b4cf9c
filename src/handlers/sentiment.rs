use axum::{extract::State, http::StatusCode, response::Json};
use common::{SentimentDto, SentimentRequest};
use tracing::{debug, info, instrument, trace, warn};

use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Analyze market sentiment of free text
#[utoipa::path(
    post,
    path = "/api/v1/analyze-sentiment",
    tag = "sentiment",
    request_body = SentimentRequest,
    responses(
        (status = 200, description = "Sentiment analyzed", body = ApiResponse<SentimentDto>),
        (status = 400, description = "Missing text", body = ErrorResponse)
    )
)]
#[instrument(skip(request))]
pub async fn analyze_sentiment(
    State(state): State<AppState>,
    Json(request): Json<SentimentRequest>,
) -> Result<Json<ApiResponse<SentimentDto>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering analyze_sentiment function");

    let text = request.text.trim();
    if text.is_empty() {
        warn!("Sentiment request rejected: empty text");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Text is required".to_string(),
                code: "TEXT_REQUIRED".to_string(),
                success: false,
            }),
        ));
    }

    debug!("Analyzing sentiment for {} characters of text", text.len());

    // Scoring is deterministic, so identical submissions hit the cache
    let analyzer = state.analyzer.clone();
    let owned_text = text.to_string();
    let result = state
        .sentiment_cache
        .get_with(owned_text.clone(), async move { analyzer.analyze(&owned_text) })
        .await;

    info!(
        "Sentiment analyzed: {} (polarity {:.3})",
        result.sentiment.label(),
        result.polarity
    );

    let response = ApiResponse {
        data: result,
        message: "Sentiment analyzed successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
