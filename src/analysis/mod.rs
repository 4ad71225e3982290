//! Text analysis module for faqbot.
//!
//! Turns raw user text into normalized word tokens. The pipeline is built from
//! char filters, a tokenizer and token filters, combined by an analyzer.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
