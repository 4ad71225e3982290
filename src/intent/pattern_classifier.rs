//! Pattern-based intent classifier.

use regex::Regex;

use crate::error::{FaqBotError, Result};

use super::classifier::IntentClassifier;
use super::types::Intent;

/// Default rules, in priority order.
const DEFAULT_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &[
            "hi",
            "hello",
            "hey",
            "greetings",
            "good morning",
            "good afternoon",
            "good evening",
        ],
    ),
    (
        Intent::Question,
        &[
            "what", "who", "where", "when", "why", "how", "which", "can", "could", "would",
            "should",
        ],
    ),
    (
        Intent::Farewell,
        &["bye", "goodbye", "see you", "farewell", "exit", "quit"],
    ),
    (Intent::Help, &["help", "assist", "support", "guide"]),
    (
        Intent::Thanks,
        &["thank", "thanks", "appreciate", "grateful"],
    ),
];

/// One classification rule: an intent and its boundary-anchored pattern.
#[derive(Debug, Clone)]
pub struct IntentRule {
    intent: Intent,
    pattern: Regex,
}

impl IntentRule {
    /// Build a rule matching any of `phrases` as whole words.
    pub fn new<S: AsRef<str>>(intent: Intent, phrases: &[S]) -> Result<Self> {
        if phrases.is_empty() {
            return Err(FaqBotError::analysis(format!(
                "Rule for {intent} has no phrases"
            )));
        }

        let alternation = phrases
            .iter()
            .map(|phrase| regex::escape(phrase.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\b(?:{alternation})\b"))
            .map_err(|e| FaqBotError::analysis(format!("Invalid intent pattern: {e}")))?;

        Ok(IntentRule { intent, pattern })
    }

    /// The intent this rule detects.
    pub fn intent(&self) -> Intent {
        self.intent
    }

    /// Test already lowercased input against this rule.
    pub fn matches(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }
}

/// Pattern-based intent classifier.
///
/// Input is lowercased and tested against each rule in order; the first rule
/// that matches decides the intent. Because greetings are tested first,
/// "hello, how are you" is a greeting even though it contains "how".
#[derive(Debug, Clone)]
pub struct PatternIntentClassifier {
    rules: Vec<IntentRule>,
}

impl PatternIntentClassifier {
    /// Create a classifier with the default rules.
    pub fn new() -> Result<Self> {
        let rules = DEFAULT_RULES
            .iter()
            .map(|(intent, phrases)| IntentRule::new(*intent, *phrases))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::with_rules(rules))
    }

    /// Create a classifier with custom rules, tested in the given order.
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        PatternIntentClassifier { rules }
    }
}

impl IntentClassifier for PatternIntentClassifier {
    fn predict(&self, input: &str) -> Intent {
        let lowered = input.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(IntentRule::intent)
            .unwrap_or(Intent::General)
    }

    fn name(&self) -> &str {
        "pattern"
    }
}
