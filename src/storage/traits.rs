//! Storage abstraction trait and common types.

use crate::error::Result;
use crate::knowledge::FaqEntry;

/// A backend that can persist the FAQ entry list.
///
/// `save` always receives the complete current list and replaces whatever
/// was stored before.
pub trait FaqStore: Send + std::fmt::Debug {
    /// Load the stored entries, in order.
    ///
    /// A store that has never been written returns an empty list.
    fn load(&self) -> Result<Vec<FaqEntry>>;

    /// Overwrite the stored entries.
    fn save(&mut self, entries: &[FaqEntry]) -> Result<()>;

    /// Get the name of this store type.
    fn name(&self) -> &'static str;
}

impl<S: FaqStore + ?Sized> FaqStore for Box<S> {
    fn load(&self) -> Result<Vec<FaqEntry>> {
        (**self).load()
    }

    fn save(&mut self, entries: &[FaqEntry]) -> Result<()> {
        (**self).save(entries)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Configuration for storage backends.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Buffer size for I/O operations.
    pub buffer_size: usize,

    /// Whether to fsync after every write.
    pub sync_writes: bool,

    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            buffer_size: 8192,
            sync_writes: false,
            pretty: true,
        }
    }
}
