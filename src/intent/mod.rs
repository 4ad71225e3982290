//! Intent detection for user input.
//!
//! An intent is the coarse conversational purpose of an input (greeting,
//! question, farewell, ...). It is computed per input and never stored.
//!
//! # Architecture
//!
//! - `IntentClassifier` trait: Common interface for all classifiers
//! - `PatternIntentClassifier`: Ordered whole-word pattern rules
//! - `Intent`: The closed set of intents
//!
//! # Example
//!
//! ```rust
//! use faqbot::intent::{Intent, IntentClassifier, PatternIntentClassifier};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = PatternIntentClassifier::new()?;
//!
//! assert_eq!(classifier.predict("hello, how are you"), Intent::Greeting);
//! assert_eq!(classifier.predict("thanks a lot"), Intent::Thanks);
//! assert_eq!(classifier.predict("the sky is blue"), Intent::General);
//! # Ok(())
//! # }
//! ```

mod classifier;
mod pattern_classifier;
mod types;

pub use classifier::IntentClassifier;
pub use pattern_classifier::{IntentRule, PatternIntentClassifier};
pub use types::Intent;
