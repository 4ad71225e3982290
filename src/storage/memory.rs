//! In-memory storage implementation for testing and embedding.

use std::sync::{Arc, Mutex};

use crate::error::{FaqBotError, Result};
use crate::knowledge::FaqEntry;
use crate::storage::traits::FaqStore;

#[derive(Debug, Default)]
struct MemoryState {
    entries: Vec<FaqEntry>,
    saves: usize,
    fail_writes: bool,
}

/// An in-memory store.
///
/// Clones share the same state, so a test can keep a handle to a store it
/// handed to a trainer and inspect what was saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    /// Create an empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store pre-filled with `entries`.
    pub fn with_entries(entries: Vec<FaqEntry>) -> Self {
        let store = Self::new();
        store.lock().entries = entries;
        store
    }

    /// Make subsequent saves fail (to exercise write-failure handling).
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// The currently stored entries.
    pub fn entries(&self) -> Vec<FaqEntry> {
        self.lock().entries.clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // The state holds plain data, so a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FaqStore for MemoryStore {
    fn load(&self) -> Result<Vec<FaqEntry>> {
        Ok(self.lock().entries.clone())
    }

    fn save(&mut self, entries: &[FaqEntry]) -> Result<()> {
        let mut state = self.lock();
        if state.fail_writes {
            return Err(FaqBotError::storage("memory store is read-only"));
        }
        state.entries = entries.to_vec();
        state.saves += 1;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
