//! In-memory FAQ knowledge base.
//!
//! A [`KnowledgeBase`] is an ordered list of [`FaqEntry`] records keyed by
//! their question, compared case-insensitively.

mod base;
mod entry;

pub use base::KnowledgeBase;
pub use entry::{FaqEntry, same_question};
