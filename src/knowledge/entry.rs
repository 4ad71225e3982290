//! FAQ entry record.

use serde::{Deserialize, Serialize};

/// A stored question/answer pair with its keywords and usage statistics.
///
/// Serialized with camelCase field names:
///
/// ```json
/// {"question": "Can you learn?", "answer": "Yes!", "keywords": ["learn"], "usageCount": 0}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    /// The question, also the entry's identity (case-insensitive).
    pub question: String,

    /// The answer returned verbatim on a match.
    pub answer: String,

    /// Distinct keywords of the question, in first-seen order.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Number of times this entry answered a query.
    #[serde(default)]
    pub usage_count: u32,
}

impl FaqEntry {
    /// Create a new entry with a zero usage count.
    pub fn new<Q, A, I, K>(question: Q, answer: A, keywords: I) -> Self
    where
        Q: Into<String>,
        A: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        FaqEntry {
            question: question.into(),
            answer: answer.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            usage_count: 0,
        }
    }

    /// Check whether this entry is identified by `question`.
    pub fn is_question(&self, question: &str) -> bool {
        same_question(&self.question, question)
    }

    /// Keywords joined into a single space-separated string.
    pub fn keyword_text(&self) -> String {
        self.keywords.join(" ")
    }

    /// Record one more answered query.
    pub fn increment_usage_count(&mut self) {
        self.usage_count = self.usage_count.saturating_add(1);
    }
}

/// Case-insensitive question comparison.
///
/// Only case is ignored; punctuation and spacing still distinguish questions.
pub fn same_question(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
