//! Lexicon-based sentiment polarity scoring.
//!
//! The score is the mean polarity of recognized words, adjusted for a
//! preceding negator (flips and damps the word) or intensifier (scales
//! it), clamped to `[-1.0, 1.0]`. Text with no recognized words scores
//! exactly `0.0` and is therefore neutral.

use common::{Sentiment, SentimentDto};
use tracing::debug;

/// Word polarity weights. Market vocabulary on top of everyday words so
/// free-text "market sentiment" entries land on the expected side.
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("amazing", 0.9),
    ("bullish", 0.8),
    ("confident", 0.7),
    ("excellent", 1.0),
    ("gain", 0.6),
    ("gains", 0.6),
    ("good", 0.7),
    ("great", 0.8),
    ("growth", 0.6),
    ("happy", 0.8),
    ("hopeful", 0.6),
    ("love", 0.5),
    ("optimistic", 0.8),
    ("positive", 0.6),
    ("profit", 0.6),
    ("profits", 0.6),
    ("promising", 0.7),
    ("rally", 0.6),
    ("recovery", 0.5),
    ("rise", 0.4),
    ("rising", 0.4),
    ("strong", 0.6),
    ("surge", 0.6),
    ("up", 0.3),
    ("upbeat", 0.7),
    // negative
    ("afraid", -0.6),
    ("bad", -0.7),
    ("bearish", -0.8),
    ("collapse", -0.9),
    ("crash", -0.8),
    ("decline", -0.5),
    ("down", -0.3),
    ("drop", -0.4),
    ("falling", -0.4),
    ("fear", -0.7),
    ("hate", -0.8),
    ("loss", -0.6),
    ("losses", -0.6),
    ("negative", -0.6),
    ("nervous", -0.6),
    ("panic", -0.9),
    ("poor", -0.6),
    ("risky", -0.5),
    ("sad", -0.5),
    ("scared", -0.7),
    ("terrible", -1.0),
    ("uncertain", -0.4),
    ("weak", -0.5),
    ("worried", -0.6),
    ("worst", -1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.5),
    ("really", 1.3),
    ("so", 1.2),
    ("very", 1.3),
    ("quite", 1.1),
    ("slightly", 0.7),
    ("somewhat", 0.8),
];

const NEGATORS: &[&str] = &["not", "no", "never", "cannot", "neither", "nor"];

/// Damping applied when a polar word is negated. "not good" reads as
/// mildly negative rather than the full inverse of "good".
const NEGATION_FACTOR: f64 = -0.5;

/// Scores free text into a polarity and sentiment label.
#[derive(Debug, Clone, Default)]
pub struct PolarityAnalyzer;

impl PolarityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score `text` and classify the result.
    pub fn analyze(&self, text: &str) -> SentimentDto {
        let tokens = tokenize(text);

        let mut total = 0.0;
        let mut matched = 0usize;

        for (index, token) in tokens.iter().enumerate() {
            let Some(base) = word_polarity(token) else {
                continue;
            };

            let mut score = base;
            if let Some(previous) = index.checked_sub(1).map(|i| tokens[i].as_str()) {
                if is_negator(previous) {
                    score *= NEGATION_FACTOR;
                } else if let Some(factor) = intensifier_factor(previous) {
                    score *= factor;
                    // A negator one step further back still flips the
                    // intensified word ("not very good").
                    if index >= 2 && is_negator(&tokens[index - 2]) {
                        score *= NEGATION_FACTOR;
                    }
                }
            }

            total += score;
            matched += 1;
        }

        let polarity = if matched == 0 {
            0.0
        } else {
            (total / matched as f64).clamp(-1.0, 1.0)
        };

        let sentiment = Sentiment::from_polarity(polarity);
        debug!(polarity, label = sentiment.label(), matched, "scored text");

        SentimentDto { sentiment, polarity }
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn word_polarity(token: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, weight)| *weight)
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

fn intensifier_factor(token: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, factor)| *factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> SentimentDto {
        PolarityAnalyzer::new().analyze(text)
    }

    #[test]
    fn upbeat_text_scores_positive() {
        let result = analyze("The market looks great, I am confident about strong gains.");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!(result.polarity > 0.0);
    }

    #[test]
    fn gloomy_text_scores_negative() {
        let result = analyze("I'm worried about a crash, everything looks weak and risky.");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert!(result.polarity < 0.0);
    }

    #[test]
    fn unrecognized_text_is_neutral() {
        let result = analyze("The quarterly filing deadline is on Tuesday.");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.polarity, 0.0);
    }

    #[test]
    fn negation_flips_a_polar_word() {
        let plain = analyze("good");
        let negated = analyze("not good");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
        assert_eq!(negated.sentiment, Sentiment::Negative);
    }

    #[test]
    fn contracted_negation_is_recognized() {
        let result = analyze("this isn't good at all");
        assert!(result.polarity < 0.0);
    }

    #[test]
    fn intensifier_scales_the_score() {
        let plain = analyze("good");
        let boosted = analyze("very good");
        assert!(boosted.polarity > plain.polarity);
    }

    #[test]
    fn polarity_is_clamped_to_unit_interval() {
        let result = analyze("extremely excellent extremely excellent");
        assert!(result.polarity <= 1.0);
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn casing_and_punctuation_do_not_matter() {
        let shouty = analyze("GREAT!!! GAINS!!!");
        let quiet = analyze("great gains");
        assert_eq!(shouty.polarity, quiet.polarity);
    }

    #[test]
    fn mixed_text_averages_toward_the_dominant_side() {
        let result = analyze("great gains but a terrible loss and more losses");
        assert_eq!(result.sentiment, Sentiment::Negative);
    }
}
