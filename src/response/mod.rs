//! Reply composition.
//!
//! The [`ResponseComposer`] turns one user input into one reply string:
//! a stored FAQ answer when the matcher finds one, otherwise a canned reply
//! for the detected intent, otherwise a generic fallback. Which of several
//! candidate replies is used is left to a [`ReplySelector`].

mod composer;
mod replies;
mod selector;

pub use composer::{BLANK_INPUT_PROMPT, ResponseComposer};
pub use replies::{FALLBACK_REPLIES, canned_replies, fallback_replies};
pub use selector::{FixedSelector, RandomSelector, ReplySelector, SeededSelector};
