//! Keyword-set similarity.
//!
//! Texts are compared through their keyword sets (see
//! [`Analyzer::extract_keywords`]) using the Jaccard index:
//! `|A ∩ B| / |A ∪ B|`. Two empty sets count as identical (1.0); an empty set
//! against a non-empty one scores 0.0.
//!
//! # Examples
//!
//! ```
//! use faqbot::similarity::JaccardSimilarity;
//!
//! let scorer = JaccardSimilarity::new().unwrap();
//! assert_eq!(scorer.similarity("What is your name?", "what's your name"), 0.75);
//! assert_eq!(scorer.similarity("", ""), 1.0);
//! ```

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::Result;

/// Jaccard similarity of two sets.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

/// Text similarity scorer backed by an analyzer.
#[derive(Clone)]
pub struct JaccardSimilarity {
    analyzer: Arc<dyn Analyzer>,
}

impl JaccardSimilarity {
    /// Create a scorer using the [`StandardAnalyzer`].
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(StandardAnalyzer::new()?)))
    }

    /// Create a scorer using a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        JaccardSimilarity { analyzer }
    }

    /// The analyzer used to extract keyword sets.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Similarity of two texts in `[0, 1]`. Symmetric in its arguments.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        jaccard(
            &self.analyzer.extract_keywords(a),
            &self.analyzer.extract_keywords(b),
        )
    }

    /// Similarity of a text against an already extracted keyword set.
    pub fn similarity_to_keywords(&self, text: &str, keywords: &HashSet<String>) -> f64 {
        jaccard(&self.analyzer.extract_keywords(text), keywords)
    }

    /// The pattern most similar to `input`.
    ///
    /// Only patterns scoring strictly above zero qualify, and the first of
    /// several equally good patterns wins.
    pub fn best_pattern<'a, S: AsRef<str>>(&self, input: &str, patterns: &'a [S]) -> Option<&'a str> {
        let input_keywords = self.analyzer.extract_keywords(input);
        let mut best = None;
        let mut best_score = 0.0;

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let score = self.similarity_to_keywords(pattern, &input_keywords);
            if score > best_score {
                best_score = score;
                best = Some(pattern);
            }
        }

        best
    }
}

impl std::fmt::Debug for JaccardSimilarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JaccardSimilarity")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
