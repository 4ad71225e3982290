//! The chatbot facade.

use log::{debug, info};

use crate::engine::config::ChatBotConfig;
use crate::engine::conversation::{Conversation, Turn};
use crate::error::{FaqBotError, Result};
use crate::intent::Intent;
use crate::knowledge::FaqEntry;
use crate::matcher::FaqTrainer;
use crate::response::{BLANK_INPUT_PROMPT, ReplySelector, ResponseComposer};
use crate::storage::{FaqStore, JsonFileStore};

/// First message of a chat session.
pub const GREETING_MESSAGE: &str = "Hello! I'm your AI chatbot. How can I help you today?";

/// Rejection message for training with a blank question or answer.
pub const MISSING_TRAINING_FIELDS: &str = "Please provide both a question and an answer.";

/// A single-user chat session over a persistent FAQ knowledge base.
#[derive(Debug)]
pub struct ChatBot {
    trainer: FaqTrainer,
    composer: ResponseComposer,
    conversation: Conversation,
}

impl ChatBot {
    /// Open the FAQ file named in `config` and build a chatbot over it.
    pub fn open(config: ChatBotConfig) -> Result<Self> {
        let store = JsonFileStore::new_default(&config.faq_path);
        Self::with_store(Box::new(store), config)
    }

    /// Build a chatbot over an arbitrary store.
    ///
    /// The built-in FAQs are trained when `config.seed_defaults` is set and
    /// the store holds no entries.
    pub fn with_store(store: Box<dyn FaqStore>, config: ChatBotConfig) -> Result<Self> {
        let mut trainer = FaqTrainer::new(store, config.matching)?;
        if config.seed_defaults {
            trainer.seed_defaults();
        }
        Ok(Self::with_parts(trainer, ResponseComposer::new()?))
    }

    /// Build a chatbot from already constructed parts.
    pub fn with_parts(trainer: FaqTrainer, composer: ResponseComposer) -> Self {
        ChatBot {
            trainer,
            composer,
            conversation: Conversation::new(),
        }
    }

    /// Replace the reply selector.
    pub fn with_selector(mut self, selector: Box<dyn ReplySelector>) -> Self {
        self.composer = self.composer.with_selector(selector);
        self
    }

    /// Answer one message.
    ///
    /// Non-blank messages and their replies are appended to the history.
    pub fn process_input(&mut self, input: &str) -> String {
        if input.trim().is_empty() {
            return BLANK_INPUT_PROMPT.to_string();
        }

        let reply = self.composer.generate_response(&mut self.trainer, input);
        self.conversation.record_exchange(input, &reply);
        reply
    }

    /// Add or replace an FAQ.
    ///
    /// Both fields are trimmed; if either is then empty nothing is stored and
    /// [`FaqBotError::InvalidInput`] is returned.
    pub fn train_bot(&mut self, question: &str, answer: &str) -> Result<()> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            debug!("Rejected training with a blank field");
            return Err(FaqBotError::invalid_input(MISSING_TRAINING_FIELDS));
        }

        self.trainer.train(question, answer);
        Ok(())
    }

    /// All stored FAQs in knowledge base order.
    pub fn all_faqs(&self) -> Vec<FaqEntry> {
        self.trainer.all_faqs()
    }

    /// Delete the FAQ for `question` (case-insensitive).
    ///
    /// Returns whether an entry was removed.
    pub fn remove_faq(&mut self, question: &str) -> bool {
        self.trainer.remove_faq(question.trim())
    }

    /// Copy of the conversation so far.
    pub fn history(&self) -> Vec<Turn> {
        self.conversation.turns().to_vec()
    }

    /// Forget the conversation. Stored FAQs are unaffected.
    pub fn clear_history(&mut self) {
        info!("Clearing {} conversation turns", self.conversation.len());
        self.conversation.clear();
    }

    /// Detect the intent of `input` without answering it.
    pub fn classify(&self, input: &str) -> Intent {
        self.composer.classify(input)
    }

    /// The matcher, for inspection.
    pub fn trainer(&self) -> &FaqTrainer {
        &self.trainer
    }
}
