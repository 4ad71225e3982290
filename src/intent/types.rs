//! Common types for intent classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FaqBotError;

/// Conversational intent of a user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Salutations such as "hi" or "good morning".
    Greeting,
    /// Interrogatives such as "what" or "how".
    Question,
    /// Leave-taking such as "bye" or "quit".
    Farewell,
    /// Requests for assistance.
    Help,
    /// Gratitude.
    Thanks,
    /// Anything else.
    General,
}

impl Intent {
    /// All intents, in classification priority order.
    pub const ALL: [Intent; 6] = [
        Intent::Greeting,
        Intent::Question,
        Intent::Farewell,
        Intent::Help,
        Intent::Thanks,
        Intent::General,
    ];

    /// Upper-case label of this intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "GREETING",
            Intent::Question => "QUESTION",
            Intent::Farewell => "FAREWELL",
            Intent::Help => "HELP",
            Intent::Thanks => "THANKS",
            Intent::General => "GENERAL",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = FaqBotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FaqBotError::other(format!("Unknown intent: {s}")))
    }
}
