//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw string before it is passed to the
//! tokenizer. The standard pipeline lowercases the text and then blanks out
//! everything that is not an ASCII lowercase letter, digit or whitespace.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use faqbot::analysis::char_filter::CharFilter;
//! use faqbot::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"[^a-z0-9\s]", " ").unwrap();
//! assert_eq!(filter.filter("what's up?"), "what s up ");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;

pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
