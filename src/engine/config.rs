//! Chatbot configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::matcher::MatchConfig;
use crate::storage::DEFAULT_FAQ_FILE;

/// Configuration of a [`ChatBot`](crate::engine::ChatBot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatBotConfig {
    /// Location of the FAQ file.
    pub faq_path: PathBuf,

    /// Matching weights and threshold.
    pub matching: MatchConfig,

    /// Train the built-in FAQs when the knowledge base starts out empty.
    pub seed_defaults: bool,
}

impl ChatBotConfig {
    /// Set the FAQ file location.
    pub fn with_faq_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.faq_path = path.into();
        self
    }

    /// Set the matching configuration.
    pub fn with_matching(mut self, matching: MatchConfig) -> Self {
        self.matching = matching;
        self
    }

    /// Enable or disable seeding of the built-in FAQs.
    pub fn with_seed_defaults(mut self, seed: bool) -> Self {
        self.seed_defaults = seed;
        self
    }
}

impl Default for ChatBotConfig {
    fn default() -> Self {
        ChatBotConfig {
            faq_path: PathBuf::from(DEFAULT_FAQ_FILE),
            matching: MatchConfig::default(),
            seed_defaults: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChatBotConfig::default();
        assert_eq!(config.faq_path, PathBuf::from("faqs.json"));
        assert_eq!(config.matching, MatchConfig::default());
        assert!(config.seed_defaults);
    }

    #[test]
    fn test_builder_and_serde() {
        let config = ChatBotConfig::default()
            .with_faq_path("/tmp/other.json")
            .with_seed_defaults(false);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ChatBotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        let partial: ChatBotConfig = serde_json::from_str(r#"{"seed_defaults": false}"#).unwrap();
        assert_eq!(partial.faq_path, PathBuf::from("faqs.json"));
        assert!(!partial.seed_defaults);
    }
}
