//! Standard analyzer used for FAQ matching.
//!
//! # Pipeline
//!
//! 1. LowercaseCharFilter
//! 2. PatternReplaceCharFilter (everything but `a-z`, `0-9` and whitespace → one space)
//! 3. WhitespaceTokenizer
//! 4. StopFilter (40 English function words)
//!
//! # Examples
//!
//! ```
//! use faqbot::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("What's the weather, today?").collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "what");
//! assert_eq!(tokens[1].text, "s");
//! assert_eq!(tokens[2].text, "weather");
//! assert_eq!(tokens[3].text, "today");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{LowercaseCharFilter, PatternReplaceCharFilter};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::StopFilter;
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// Characters outside this class are blanked out before tokenization.
const NON_WORD_PATTERN: &str = r"[^a-z0-9\s]";

/// The standard FAQ analyzer.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(
                NON_WORD_PATTERN,
                " ",
            )?))
            .add_filter(Arc::new(StopFilter::new()))
            .with_name("standard");

        Ok(StandardAnalyzer { inner: analyzer })
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new().expect("Standard analyzer should be creatable with default settings")
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
