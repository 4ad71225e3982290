/// FAQs trained into an empty knowledge base on first start.
pub const DEFAULT_FAQS: &[(&str, &str)] = &[
    (
        "What is your name?",
        "I am an AI chatbot designed to help you with various questions and tasks.",
    ),
    (
        "What can you do?",
        "I can answer questions, have conversations, learn from FAQs, and assist you with various tasks.",
    ),
    (
        "How do you work?",
        "I use natural language processing and machine learning techniques to understand and respond to your messages.",
    ),
    (
        "Can you learn?",
        "Yes! You can train me by adding new FAQs. I'll learn from them and use them to answer similar questions.",
    ),
    (
        "What is artificial intelligence?",
        "Artificial Intelligence (AI) is the simulation of human intelligence by machines, enabling them to learn, reason, and make decisions.",
    ),
    (
        "How are you trained?",
        "I use a combination of rule-based patterns and machine learning techniques, including similarity matching and keyword extraction.",
    ),
];
