//! Storage abstraction layer for the FAQ knowledge base.
//!
//! The storage backend only serializes and deserializes the ordered entry
//! list; it never interprets entries. Backends: a JSON file on disk and an
//! in-memory store.

pub mod file;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use file::*;
pub use memory::*;
pub use traits::*;
