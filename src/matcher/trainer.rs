//! Best-match selection and training over the knowledge base.

use std::collections::HashSet;

use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::knowledge::{FaqEntry, KnowledgeBase};
use crate::matcher::config::MatchConfig;
use crate::matcher::defaults::DEFAULT_FAQS;
use crate::similarity::{JaccardSimilarity, jaccard};
use crate::storage::FaqStore;

/// Score breakdown of one entry against one input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// Similarity between input and stored question.
    pub question_score: f64,
    /// Similarity between input and stored keywords (0.0 without keywords).
    pub keyword_score: f64,
    /// Weighted combination of both.
    pub combined: f64,
}

/// An entry together with its score against some input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub entry: FaqEntry,
    pub score: MatchScore,
}

/// Owner of the knowledge base: matching, training and deletion.
///
/// Every mutation (training, deletion, usage count increment) is followed by a
/// full save to the store. Save failures are logged and otherwise ignored, so
/// the in-memory state stays authoritative for the session.
#[derive(Debug)]
pub struct FaqTrainer {
    knowledge: KnowledgeBase,
    store: Box<dyn FaqStore>,
    scorer: JaccardSimilarity,
    config: MatchConfig,
}

impl FaqTrainer {
    /// Create a trainer over `store` using the standard analyzer.
    ///
    /// The store is read once; a failed read is logged and leaves the
    /// knowledge base empty.
    pub fn new(store: Box<dyn FaqStore>, config: MatchConfig) -> Result<Self> {
        Ok(Self::with_scorer(store, config, JaccardSimilarity::new()?))
    }

    /// Create a trainer with a custom similarity scorer.
    pub fn with_scorer(
        store: Box<dyn FaqStore>,
        config: MatchConfig,
        scorer: JaccardSimilarity,
    ) -> Self {
        let knowledge = match store.load() {
            Ok(entries) => {
                info!("Loaded {} FAQs from {} store", entries.len(), store.name());
                KnowledgeBase::from_entries(entries)
            }
            Err(e) => {
                error!("Error loading FAQs: {e}");
                KnowledgeBase::new()
            }
        };

        FaqTrainer {
            knowledge,
            store,
            scorer,
            config,
        }
    }

    /// Add a question/answer pair, replacing an entry with the same question.
    ///
    /// The new entry starts with a zero usage count.
    pub fn train(&mut self, question: &str, answer: &str) {
        let keywords = self.scorer.analyzer().unique_terms(question);
        let entry = FaqEntry::new(question, answer, keywords);

        if self.knowledge.upsert(entry).is_some() {
            info!("Replaced FAQ: {question}");
        } else {
            info!("Added FAQ: {question}");
        }
        self.persist();
    }

    /// Find the stored entry that best matches `input`.
    ///
    /// Entries are scored in order and an entry only takes the lead with a
    /// strictly higher combined score, so the earliest of equally good entries
    /// wins. Scores below the threshold never match. The matched entry's usage
    /// count is incremented and saved before it is returned.
    pub fn find_best_match(&mut self, input: &str) -> Option<FaqEntry> {
        if self.knowledge.is_empty() {
            return None;
        }

        let input_keywords = self.scorer.analyzer().extract_keywords(input);
        let mut best: Option<usize> = None;
        let mut best_score = 0.0;

        for (index, entry) in self.knowledge.iter().enumerate() {
            let score = self.score_keywords(&input_keywords, entry);
            if score.combined > best_score && score.combined >= self.config.threshold {
                debug!(
                    "New best match {:?} (question {:.3}, keywords {:.3}, combined {:.3})",
                    entry.question, score.question_score, score.keyword_score, score.combined
                );
                best_score = score.combined;
                best = Some(index);
            }
        }

        let Some(index) = best else {
            debug!("No FAQ reached threshold {} for {input:?}", self.config.threshold);
            return None;
        };

        let matched = self.knowledge.increment_usage(index).cloned();
        self.persist();
        matched
    }

    /// Score a single entry against `input` without side effects.
    pub fn score(&self, input: &str, entry: &FaqEntry) -> MatchScore {
        let input_keywords = self.scorer.analyzer().extract_keywords(input);
        self.score_keywords(&input_keywords, entry)
    }

    /// All entries scored against `input`, best first.
    ///
    /// Equal scores keep knowledge base order. Usage counts are not touched.
    pub fn rank(&self, input: &str) -> Vec<ScoredEntry> {
        let input_keywords = self.scorer.analyzer().extract_keywords(input);
        let mut scored: Vec<ScoredEntry> = self
            .knowledge
            .iter()
            .map(|entry| ScoredEntry {
                score: self.score_keywords(&input_keywords, entry),
                entry: entry.clone(),
            })
            .collect();

        scored.sort_by(|a, b| b.score.combined.total_cmp(&a.score.combined));
        scored
    }

    fn score_keywords(&self, input_keywords: &HashSet<String>, entry: &FaqEntry) -> MatchScore {
        let analyzer = self.scorer.analyzer();

        let question_score = jaccard(input_keywords, &analyzer.extract_keywords(&entry.question));
        let keyword_score = if entry.keywords.is_empty() {
            0.0
        } else {
            jaccard(
                input_keywords,
                &analyzer.extract_keywords(&entry.keyword_text()),
            )
        };

        MatchScore {
            question_score,
            keyword_score,
            combined: self.config.combine(question_score, keyword_score),
        }
    }

    /// Remove the entry for `question` (case-insensitive) and save.
    ///
    /// Returns whether an entry was removed.
    pub fn remove_faq(&mut self, question: &str) -> bool {
        let removed = self.knowledge.remove(question).is_some();
        if removed {
            info!("Removed FAQ: {question}");
        } else {
            debug!("No FAQ to remove for {question:?}");
        }
        self.persist();
        removed
    }

    /// Train the built-in FAQs if the knowledge base is empty.
    ///
    /// Returns the number of entries added.
    pub fn seed_defaults(&mut self) -> usize {
        if !self.knowledge.is_empty() {
            return 0;
        }

        for (question, answer) in DEFAULT_FAQS {
            self.train(question, answer);
        }
        info!("Seeded {} default FAQs", DEFAULT_FAQS.len());
        DEFAULT_FAQS.len()
    }

    /// Copy of all entries in order.
    pub fn all_faqs(&self) -> Vec<FaqEntry> {
        self.knowledge.all()
    }

    /// Look up an entry by question (case-insensitive).
    pub fn find(&self, question: &str) -> Option<&FaqEntry> {
        self.knowledge.find(question)
    }

    /// Read access to the knowledge base.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// The similarity scorer.
    pub fn scorer(&self) -> &JaccardSimilarity {
        &self.scorer
    }

    /// The matching configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.knowledge.as_slice()) {
            error!("Error saving FAQs: {e}");
        }
    }
}
