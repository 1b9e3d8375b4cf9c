use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sentiment label attached to a polarity score.
///
/// The label alone drives the frontend's gating decisions, so the mapping
/// from polarity to label lives here next to the access rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a polarity score: strictly positive scores are positive,
    /// strictly negative ones negative, exactly zero is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Whether this result unlocks the prediction view. Negative sentiment
    /// never does; the user is sent back home instead.
    pub fn grants_prediction_access(self) -> bool {
        match self {
            Self::Positive | Self::Neutral => true,
            Self::Negative => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}
