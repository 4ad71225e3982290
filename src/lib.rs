//! # faqbot
//!
//! A local FAQ-matching chatbot.
//!
//! Input is answered from a knowledge base of question/answer pairs when a
//! stored question is similar enough, and otherwise with a canned reply for
//! the detected intent.
//!
//! ## Features
//!
//! - Text analysis pipeline (char filters, tokenizer, stop words)
//! - Jaccard keyword similarity with weighted question/keyword scoring
//! - Whole-word intent patterns
//! - Knowledge base persisted as a JSON file
//! - Interactive terminal chat and one-shot commands
//!
//! ## Example
//!
//! ```
//! use faqbot::engine::{ChatBot, ChatBotConfig};
//! use faqbot::storage::MemoryStore;
//!
//! # fn main() -> faqbot::error::Result<()> {
//! let mut bot = ChatBot::with_store(Box::new(MemoryStore::new()), ChatBotConfig::default())?;
//! assert_eq!(
//!     bot.process_input("Can you learn?"),
//!     "Yes! You can train me by adding new FAQs. I'll learn from them and use them to answer similar questions."
//! );
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod matcher;
pub mod response;
pub mod similarity;
pub mod storage;

pub mod prelude {
    pub use crate::engine::{ChatBot, ChatBotConfig};
    pub use crate::error::{FaqBotError, Result};
    pub use crate::knowledge::FaqEntry;
    pub use crate::matcher::{FaqTrainer, MatchConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
