//! FAQ matching and training.
//!
//! The [`FaqTrainer`] owns the knowledge base and its store. It answers
//! "which stored FAQ does this input ask?" with a weighted keyword
//! similarity, and adds, replaces and removes entries, persisting after
//! every change.
//!
//! # Example
//!
//! ```
//! use faqbot::matcher::{FaqTrainer, MatchConfig};
//! use faqbot::storage::MemoryStore;
//!
//! # fn main() -> faqbot::error::Result<()> {
//! let mut trainer = FaqTrainer::new(Box::new(MemoryStore::new()), MatchConfig::default())?;
//! trainer.train("What is your name?", "Bot.");
//!
//! let entry = trainer.find_best_match("what's your name").unwrap();
//! assert_eq!(entry.answer, "Bot.");
//! assert_eq!(entry.usage_count, 1);
//! # Ok(())
//! # }
//! ```

mod config;
mod defaults;
mod trainer;

pub use config::MatchConfig;
pub use defaults::DEFAULT_FAQS;
pub use trainer::{FaqTrainer, MatchScore, ScoredEntry};
