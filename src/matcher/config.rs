//! Matching configuration.

use serde::{Deserialize, Serialize};

/// Weights and threshold of the best-match policy.
///
/// `combined = question_weight * question_score + keyword_weight * keyword_score`,
/// and an entry can only match when `combined >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum combined score for a match.
    pub threshold: f64,

    /// Weight of the similarity between input and stored question.
    pub question_weight: f64,

    /// Weight of the similarity between input and stored keywords.
    pub keyword_weight: f64,
}

impl MatchConfig {
    /// Combine the two partial scores.
    pub fn combine(&self, question_score: f64, keyword_score: f64) -> f64 {
        self.question_weight * question_score + self.keyword_weight * keyword_score
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            threshold: 0.3,
            question_weight: 0.7,
            keyword_weight: 0.3,
        }
    }
}
