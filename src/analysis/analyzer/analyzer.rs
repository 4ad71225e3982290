//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Char Filters
//!             ↓
//!         Tokenizer
//!             ↓
//!         Token Filters
//! ```
//!
//! Besides the raw token stream, the trait offers the term-level views the
//! matcher works with: the ordered term sequence, the keyword set and term
//! frequencies.
//!
//! # Examples
//!
//! ```
//! use faqbot::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! assert_eq!(analyzer.tokenize("What is your name?"), vec!["what", "your", "name"]);
//! ```

use std::collections::{HashMap, HashSet};

use crate::analysis::token::TokenStream;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analysis never fails: empty or blank text yields an empty stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// The ordered sequence of surviving term texts.
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }

    /// The set of distinct terms in `text`.
    fn extract_keywords(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }

    /// Distinct terms in order of first occurrence.
    fn unique_terms(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.tokenize(text)
            .into_iter()
            .filter(|term| seen.insert(term.clone()))
            .collect()
    }

    /// Number of occurrences of each term.
    fn word_frequency(&self, text: &str) -> HashMap<String, usize> {
        let mut frequency = HashMap::new();
        for term in self.tokenize(text) {
            *frequency.entry(term).or_insert(0) += 1;
        }
        frequency
    }
}
