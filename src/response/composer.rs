//! The reply decision chain.

use log::debug;

use crate::error::Result;
use crate::intent::{Intent, IntentClassifier, PatternIntentClassifier};
use crate::matcher::FaqTrainer;
use crate::response::replies::{canned_replies, fallback_replies};
use crate::response::selector::{RandomSelector, ReplySelector};

/// Reply to blank input.
pub const BLANK_INPUT_PROMPT: &str = "Please enter a message.";

/// Chooses the reply to a single input.
///
/// In order: blank input gets [`BLANK_INPUT_PROMPT`], a matched FAQ gets its
/// answer verbatim, an intent with canned replies gets one of them, anything
/// else gets one of the generic fallbacks.
pub struct ResponseComposer {
    classifier: Box<dyn IntentClassifier>,
    selector: Box<dyn ReplySelector>,
}

impl ResponseComposer {
    /// Create a composer with the pattern classifier and random selection.
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(
            Box::new(PatternIntentClassifier::new()?),
            Box::new(RandomSelector::new()),
        ))
    }

    /// Create a composer from explicit parts.
    pub fn with_parts(
        classifier: Box<dyn IntentClassifier>,
        selector: Box<dyn ReplySelector>,
    ) -> Self {
        ResponseComposer {
            classifier,
            selector,
        }
    }

    /// Replace the reply selector.
    pub fn with_selector(mut self, selector: Box<dyn ReplySelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Detect the intent of `input`.
    pub fn classify(&self, input: &str) -> Intent {
        self.classifier.predict(input)
    }

    /// Produce the reply to `input`.
    ///
    /// A matched FAQ has its usage count incremented by the trainer.
    pub fn generate_response(&mut self, trainer: &mut FaqTrainer, input: &str) -> String {
        if input.trim().is_empty() {
            return BLANK_INPUT_PROMPT.to_string();
        }

        if let Some(entry) = trainer.find_best_match(input) {
            debug!("Answering from FAQ {:?}", entry.question);
            return entry.answer;
        }

        let intent = self.classifier.predict(input);
        let replies = canned_replies(intent);
        if !replies.is_empty() {
            debug!("Answering with a canned {intent} reply");
            let index = self.pick(replies.len());
            return replies[index].to_string();
        }

        debug!("Answering with a fallback reply");
        let mut fallbacks = fallback_replies(input);
        let index = self.pick(fallbacks.len());
        fallbacks.swap_remove(index)
    }

    /// Index chosen by the selector, kept in `0..len` whatever it returns.
    fn pick(&mut self, len: usize) -> usize {
        self.selector.select(len) % len
    }
}

impl std::fmt::Debug for ResponseComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseComposer")
            .field("classifier", &self.classifier.name())
            .field("selector", &self.selector.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchConfig;
    use crate::response::replies::FALLBACK_REPLIES;
    use crate::response::selector::FixedSelector;
    use crate::storage::MemoryStore;

    fn trainer(store: &MemoryStore) -> FaqTrainer {
        FaqTrainer::new(Box::new(store.clone()), MatchConfig::default()).unwrap()
    }

    fn composer(index: usize) -> ResponseComposer {
        ResponseComposer::new()
            .unwrap()
            .with_selector(Box::new(FixedSelector::new(index)))
    }

    #[test]
    fn test_blank_input() {
        let store = MemoryStore::with_entries(vec![crate::knowledge::FaqEntry::new(
            "Is it?",
            "It is.",
            Vec::<String>::new(),
        )]);
        let mut trainer = trainer(&store);
        let mut composer = composer(0);

        for input in ["", "   ", "\t\n"] {
            assert_eq!(composer.generate_response(&mut trainer, input), BLANK_INPUT_PROMPT);
        }
        // The stop-word-only entry would match blank input if it were looked up
        assert_eq!(trainer.find("Is it?").unwrap().usage_count, 0);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_faq_answer_wins_over_intent() {
        let mut trainer = trainer(&MemoryStore::new());
        trainer.train("Hello there friend", "Hi friend!");
        let mut composer = composer(0);

        assert_eq!(
            composer.generate_response(&mut trainer, "hello friend"),
            "Hi friend!"
        );
    }

    #[test]
    fn test_canned_replies() {
        let mut trainer = trainer(&MemoryStore::new());
        let mut composer = composer(1);

        assert_eq!(
            composer.generate_response(&mut trainer, "bye for now"),
            "See you later! Feel free to come back anytime."
        );
        assert_eq!(
            composer.generate_response(&mut trainer, "hello, can you help"),
            "Hi there! What would you like to know?"
        );
        assert_eq!(
            composer.generate_response(&mut trainer, "Why?"),
            "I'm processing your question..."
        );
    }

    #[test]
    fn test_fallback_reply() {
        let mut trainer = trainer(&MemoryStore::new());

        let mut echo = composer(1);
        assert_eq!(
            echo.generate_response(&mut trainer, "quantum chromodynamics"),
            "I understand you're asking about: \"quantum chromodynamics\". Could you rephrase that or provide more context?"
        );

        let mut plain = composer(7);
        assert_eq!(
            plain.generate_response(&mut trainer, "quantum chromodynamics"),
            FALLBACK_REPLIES[2]
        );
    }

    #[test]
    fn test_random_replies_stay_in_set() {
        let mut trainer = trainer(&MemoryStore::new());
        let mut composer = ResponseComposer::new().unwrap();
        let farewells = canned_replies(Intent::Farewell);

        for _ in 0..20 {
            let reply = composer.generate_response(&mut trainer, "bye for now");
            assert!(farewells.contains(&reply.as_str()), "{reply}");
        }
    }

    /// Ignores the requested length.
    #[derive(Debug)]
    struct OutOfRangeSelector;

    impl ReplySelector for OutOfRangeSelector {
        fn select(&mut self, _len: usize) -> usize {
            11
        }

        fn name(&self) -> &'static str {
            "out_of_range"
        }
    }

    #[test]
    fn test_out_of_range_selection_wraps() {
        let mut trainer = trainer(&MemoryStore::new());
        let mut composer = ResponseComposer::new()
            .unwrap()
            .with_selector(Box::new(OutOfRangeSelector));

        // 11 % 4 == 3
        assert_eq!(composer.generate_response(&mut trainer, "bye"), "Bye! Take care!");
        // 11 % 5 == 1
        assert_eq!(
            composer.generate_response(&mut trainer, "zebra"),
            "I understand you're asking about: \"zebra\". Could you rephrase that or provide more context?"
        );
    }

    #[test]
    fn test_debug_shows_parts() {
        let composer = composer(0);
        let debug = format!("{composer:?}");
        assert!(debug.contains("pattern"));
        assert!(debug.contains("fixed"));
    }
}
