use super::entry::{FaqEntry, same_question};

/// Ordered collection of FAQ entries.
///
/// Iteration order is insertion order. Replacing an entry removes the old one
/// and appends the new one, so a replaced entry moves to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<FaqEntry>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a knowledge base from previously stored entries.
    ///
    /// Later duplicates of a question replace earlier ones.
    pub fn from_entries(entries: Vec<FaqEntry>) -> Self {
        let mut base = Self::new();
        for entry in entries {
            base.upsert(entry);
        }
        base
    }

    /// Insert `entry`, replacing any entry with the same question.
    ///
    /// Returns the replaced entry.
    pub fn upsert(&mut self, entry: FaqEntry) -> Option<FaqEntry> {
        let replaced = self.remove(&entry.question);
        self.entries.push(entry);
        replaced
    }

    /// Remove the entry for `question`. Absent questions are a no-op.
    pub fn remove(&mut self, question: &str) -> Option<FaqEntry> {
        let index = self.position(question)?;
        Some(self.entries.remove(index))
    }

    /// Look up the entry for `question`.
    pub fn find(&self, question: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|entry| entry.is_question(question))
    }

    /// Index of the entry for `question`.
    pub fn position(&self, question: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| same_question(&entry.question, question))
    }

    /// Copy of all entries in order.
    pub fn all(&self) -> Vec<FaqEntry> {
        self.entries.clone()
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, FaqEntry> {
        self.entries.iter()
    }

    /// Entries as a slice, for serialization.
    pub fn as_slice(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Bump the usage count of the entry at `index`.
    ///
    /// Returns the updated entry, or `None` if the index is out of range.
    pub fn increment_usage(&mut self, index: usize) -> Option<&FaqEntry> {
        let entry = self.entries.get_mut(index)?;
        entry.increment_usage_count();
        Some(&*entry)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the knowledge base has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a FaqEntry;
    type IntoIter = std::slice::Iter<'a, FaqEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
