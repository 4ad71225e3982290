use faqbot::engine::{ChatBot, ChatBotConfig, Speaker};
use faqbot::error::{FaqBotError, Result};
use faqbot::intent::Intent;
use faqbot::matcher::{FaqTrainer, MatchConfig};
use faqbot::response::{
    BLANK_INPUT_PROMPT, FALLBACK_REPLIES, FixedSelector, ResponseComposer, SeededSelector,
    canned_replies,
};
use faqbot::storage::MemoryStore;

fn empty_bot() -> Result<ChatBot> {
    let config = ChatBotConfig::default().with_seed_defaults(false);
    ChatBot::with_store(Box::new(MemoryStore::new()), config)
}

#[test]
fn greeting_wins_over_help() -> Result<()> {
    let mut bot = empty_bot()?;
    assert_eq!(bot.classify("hello, can you help"), Intent::Greeting);

    let reply = bot.process_input("hello, can you help");
    assert!(canned_replies(Intent::Greeting).contains(&reply.as_str()));
    Ok(())
}

#[test]
fn farewell_on_empty_knowledge_base() -> Result<()> {
    let mut bot = empty_bot()?;
    for _ in 0..10 {
        let reply = bot.process_input("bye for now");
        assert!(canned_replies(Intent::Farewell).contains(&reply.as_str()), "{reply}");
    }
    Ok(())
}

#[test]
fn blank_input_gets_fixed_prompt() -> Result<()> {
    let store = MemoryStore::new();
    let mut bot = ChatBot::with_store(Box::new(store.clone()), ChatBotConfig::default())?;
    let saves = store.save_count();

    assert_eq!(bot.process_input(""), BLANK_INPUT_PROMPT);
    assert_eq!(bot.process_input("   "), BLANK_INPUT_PROMPT);
    assert_eq!(store.save_count(), saves);
    assert!(bot.all_faqs().iter().all(|entry| entry.usage_count == 0));
    assert!(bot.history().is_empty());
    Ok(())
}

#[test]
fn unknown_topics_get_a_fallback() -> Result<()> {
    let mut bot = empty_bot()?.with_selector(Box::new(SeededSelector::new(7)));
    let input = "quantum chromodynamics";

    for _ in 0..10 {
        let reply = bot.process_input(input);
        let echoed = FALLBACK_REPLIES[1].replace("{input}", input);
        assert!(FALLBACK_REPLIES.contains(&reply.as_str()) || reply == echoed, "{reply}");
    }
    Ok(())
}

#[test]
fn seeded_selection_is_reproducible() -> Result<()> {
    let mut first = empty_bot()?.with_selector(Box::new(SeededSelector::new(99)));
    let mut second = empty_bot()?.with_selector(Box::new(SeededSelector::new(99)));

    for input in ["hi", "thanks!", "why?", "help me", "bye", "zebra stripes"] {
        assert_eq!(first.process_input(input), second.process_input(input));
    }
    Ok(())
}

#[test]
fn seeded_defaults_answer_their_questions() -> Result<()> {
    let mut bot = ChatBot::with_store(Box::new(MemoryStore::new()), ChatBotConfig::default())?;

    assert_eq!(
        bot.process_input("What is artificial intelligence?"),
        "Artificial Intelligence (AI) is the simulation of human intelligence by machines, enabling them to learn, reason, and make decisions."
    );
    assert_eq!(
        bot.process_input("how do you work"),
        "I use natural language processing and machine learning techniques to understand and respond to your messages."
    );
    Ok(())
}

#[test]
fn conversation_log_records_exchanges() -> Result<()> {
    let trainer = FaqTrainer::new(Box::new(MemoryStore::new()), MatchConfig::default())?;
    let composer = ResponseComposer::new()?.with_selector(Box::new(FixedSelector::new(0)));
    let mut bot = ChatBot::with_parts(trainer, composer);

    bot.process_input("thank you");
    bot.process_input("");
    bot.process_input("goodbye");

    let history = bot.history();
    let texts: Vec<(Speaker, &str)> = history
        .iter()
        .map(|turn| (turn.speaker, turn.text.as_str()))
        .collect();
    assert_eq!(
        texts,
        vec![
            (Speaker::User, "thank you"),
            (Speaker::Bot, "You're welcome! Happy to help."),
            (Speaker::User, "goodbye"),
            (Speaker::Bot, "Goodbye! Have a great day!"),
        ]
    );

    bot.clear_history();
    assert!(bot.history().is_empty());
    Ok(())
}

#[test]
fn training_rejects_blank_fields() -> Result<()> {
    let mut bot = empty_bot()?;

    let err = bot.train_bot("   ", "An answer").unwrap_err();
    assert!(matches!(err, FaqBotError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Please provide both a question and an answer.");
    assert!(bot.all_faqs().is_empty());

    bot.train_bot("What is your name?", "Bot.")?;
    assert_eq!(bot.process_input("what's your name"), "Bot.");
    assert_eq!(bot.all_faqs()[0].usage_count, 1);
    Ok(())
}
