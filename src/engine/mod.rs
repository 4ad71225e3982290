//! The chatbot facade consumed by front ends.
//!
//! [`ChatBot`] wires the storage, matcher and response composer together and
//! keeps the conversation log of the session.
//!
//! # Example
//!
//! ```
//! use faqbot::engine::{ChatBot, ChatBotConfig};
//! use faqbot::storage::MemoryStore;
//!
//! # fn main() -> faqbot::error::Result<()> {
//! let config = ChatBotConfig::default().with_seed_defaults(false);
//! let mut bot = ChatBot::with_store(Box::new(MemoryStore::new()), config)?;
//!
//! bot.train_bot("What is your name?", "Bot.")?;
//! assert_eq!(bot.process_input("what's your name"), "Bot.");
//! assert_eq!(bot.history().len(), 2);
//! # Ok(())
//! # }
//! ```

mod chatbot;
mod config;
mod conversation;

pub use chatbot::{ChatBot, GREETING_MESSAGE, MISSING_TRAINING_FIELDS};
pub use config::ChatBotConfig;
pub use conversation::{Conversation, Speaker, Turn};
