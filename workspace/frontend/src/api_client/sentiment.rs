use common::{ApiResponse, SentimentDto, SentimentRequest};

use super::post;

/// Submit free text for sentiment scoring.
pub async fn analyze(text: &str) -> Result<ApiResponse<SentimentDto>, String> {
    let request = SentimentRequest {
        text: text.to_string(),
    };
    post("/analyze-sentiment", &request).await
}
