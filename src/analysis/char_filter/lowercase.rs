//! Lowercasing char filter.

use super::CharFilter;

/// A char filter that lowercases the whole input.
///
/// Lowercasing runs before punctuation stripping, so characters whose
/// lowercase form is an ASCII letter survive the pattern filter that follows.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
