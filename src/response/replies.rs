//! Canned replies.

use crate::intent::Intent;

const GREETING_REPLIES: &[&str] = &[
    "Hello! How can I assist you today?",
    "Hi there! What would you like to know?",
    "Greetings! I'm here to help. What's on your mind?",
    "Hey! How can I be of service?",
];

const QUESTION_REPLIES: &[&str] = &[
    "That's a good question. Let me think about that...",
    "I'm processing your question...",
    "Interesting question! Let me see what I can find.",
];

const FAREWELL_REPLIES: &[&str] = &[
    "Goodbye! Have a great day!",
    "See you later! Feel free to come back anytime.",
    "Farewell! It was nice chatting with you.",
    "Bye! Take care!",
];

const HELP_REPLIES: &[&str] = &[
    "I'm here to help! You can ask me questions, and I'll do my best to answer them.",
    "I can answer questions, have conversations, and learn from FAQs you provide.",
    "Feel free to ask me anything! You can also train me by adding new FAQs.",
    "I'm an AI chatbot. Ask me questions, and I'll respond using my knowledge base.",
];

const THANKS_REPLIES: &[&str] = &[
    "You're welcome! Happy to help.",
    "My pleasure! Is there anything else you'd like to know?",
    "Glad I could assist! Feel free to ask more questions.",
    "You're very welcome! Let me know if you need anything else.",
];

/// Generic fallbacks; `{input}` is replaced by the user's input.
pub const FALLBACK_REPLIES: &[&str] = &[
    "That's an interesting question. I'm still learning, so I might not have the perfect answer yet.",
    "I understand you're asking about: \"{input}\". Could you rephrase that or provide more context?",
    "I'm not entirely sure about that. Could you try asking in a different way?",
    "That's a good question! I'm learning new things every day. Can you help me understand better?",
    "I'm processing that... Could you provide more details or try rephrasing your question?",
];

/// Canned replies for an intent. Empty for [`Intent::General`].
pub fn canned_replies(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Greeting => GREETING_REPLIES,
        Intent::Question => QUESTION_REPLIES,
        Intent::Farewell => FAREWELL_REPLIES,
        Intent::Help => HELP_REPLIES,
        Intent::Thanks => THANKS_REPLIES,
        Intent::General => &[],
    }
}

/// Fallback replies with `input` substituted verbatim.
pub fn fallback_replies(input: &str) -> Vec<String> {
    FALLBACK_REPLIES
        .iter()
        .map(|reply| reply.replace("{input}", input))
        .collect()
}
