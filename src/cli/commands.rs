//! Command implementations for the faqbot CLI.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::{ChatBot, GREETING_MESSAGE};
use crate::error::{FaqBotError, Result};
use crate::response::SeededSelector;

/// Reply to `:clear` in a chat session.
pub const CLEARED_MESSAGE: &str = "Chat cleared. How can I help you?";

const SESSION_HELP: &str = "\
Type a message and press enter to chat. Session commands:
  :train QUESTION => ANSWER   add or replace an FAQ
  :list                       list stored FAQs
  :remove QUESTION            delete an FAQ
  :history                    show this conversation
  :clear                      clear this conversation
  :help                       show this help
  :quit                       leave the session";

/// Execute a CLI command.
pub fn execute_command(args: FaqBotArgs) -> Result<()> {
    let mut bot = open_chatbot(&args)?;

    match args.command() {
        Command::Chat => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_session(&mut bot, stdin.lock(), &mut stdout)
        }
        Command::Ask(ask_args) => ask(&mut bot, ask_args, &args),
        Command::Train(train_args) => train(&mut bot, train_args, &args),
        Command::List => list_faqs(&bot, &args),
        Command::Remove(remove_args) => remove(&mut bot, remove_args, &args),
        Command::Analyze(analyze_args) => analyze(&bot, analyze_args, &args),
    }
}

/// Build the chatbot the flags describe.
pub fn open_chatbot(args: &FaqBotArgs) -> Result<ChatBot> {
    let config = args.chatbot_config();
    debug!("Using FAQ file {}", config.faq_path.display());

    let bot = ChatBot::open(config)?;
    Ok(match args.seed {
        Some(seed) => bot.with_selector(Box::new(SeededSelector::new(seed))),
        None => bot,
    })
}

/// Answer a single message.
fn ask(bot: &mut ChatBot, args: AskArgs, cli_args: &FaqBotArgs) -> Result<()> {
    let input = args.text();
    let reply = bot.process_input(&input);
    output_result(&AskResult { input, reply }, cli_args)
}

/// Add or replace an FAQ.
fn train(bot: &mut ChatBot, args: TrainArgs, cli_args: &FaqBotArgs) -> Result<()> {
    bot.train_bot(&args.question, &args.answer)?;

    let keywords = bot
        .trainer()
        .find(args.question.trim())
        .map(|entry| entry.keywords.clone())
        .unwrap_or_default();

    output_result(
        &TrainResult {
            question: args.question.trim().to_string(),
            answer: args.answer.trim().to_string(),
            keywords,
            total_faqs: bot.all_faqs().len(),
        },
        cli_args,
    )
}

/// List stored FAQs.
fn list_faqs(bot: &ChatBot, cli_args: &FaqBotArgs) -> Result<()> {
    output_result(
        &FaqListResult {
            faqs: bot.all_faqs(),
        },
        cli_args,
    )
}

/// Delete an FAQ. Fails when no FAQ has the question.
fn remove(bot: &mut ChatBot, args: RemoveArgs, cli_args: &FaqBotArgs) -> Result<()> {
    let removed = bot.remove_faq(&args.question);
    let result = RemoveResult {
        question: args.question,
        removed,
        total_faqs: bot.all_faqs().len(),
    };

    if !removed {
        return Err(FaqBotError::invalid_input(result.to_human()));
    }
    output_result(&result, cli_args)
}

/// Show tokens, intent and scores for a message without answering it.
fn analyze(bot: &ChatBot, args: AnalyzeArgs, cli_args: &FaqBotArgs) -> Result<()> {
    output_result(&analysis(bot, &args.text(), args.top), cli_args)
}

/// Analyze `input` against the chatbot's knowledge base.
///
/// Usage counts are left untouched.
pub fn analysis(bot: &ChatBot, input: &str, top: usize) -> AnalysisResult {
    let trainer = bot.trainer();
    let analyzer = trainer.scorer().analyzer();
    let threshold = trainer.config().threshold;

    let mut keywords: Vec<String> = analyzer.extract_keywords(input).into_iter().collect();
    keywords.sort();

    let mut scores = trainer.rank(input);
    let matched = scores
        .first()
        .filter(|best| best.score.combined > 0.0 && best.score.combined >= threshold)
        .map(|best| best.entry.question.clone());
    scores.truncate(top);

    AnalysisResult {
        input: input.to_string(),
        tokens: analyzer.tokenize(input),
        keywords,
        intent: bot.classify(input),
        threshold,
        matched,
        scores,
    }
}

/// A line typed into a chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// A message for the chatbot
    Message(String),
    Train { question: String, answer: String },
    List,
    Remove(String),
    History,
    Clear,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. A leading `:` followed by a known command name is a
    /// session command; anything else, such as ":)", is a chat message.
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return Ok(SessionCommand::Message(line.to_string()));
        };

        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "train" => {
                let Some((question, answer)) = rest.split_once("=>") else {
                    return Err(FaqBotError::invalid_input(
                        "Usage: :train QUESTION => ANSWER",
                    ));
                };
                Ok(SessionCommand::Train {
                    question: question.trim().to_string(),
                    answer: answer.trim().to_string(),
                })
            }
            "list" => Ok(SessionCommand::List),
            "remove" | "delete" => {
                if rest.is_empty() {
                    return Err(FaqBotError::invalid_input("Usage: :remove QUESTION"));
                }
                Ok(SessionCommand::Remove(rest.to_string()))
            }
            "history" => Ok(SessionCommand::History),
            "clear" => Ok(SessionCommand::Clear),
            "help" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            _ => Ok(SessionCommand::Message(line.to_string())),
        }
    }
}

/// Run an interactive chat session until `:quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(bot: &mut ChatBot, input: R, output: &mut W) -> Result<()> {
    writeln!(output, "Bot: {GREETING_MESSAGE}")?;

    let mut lines = input.lines();
    loop {
        write!(output, "You: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(FaqBotError::InvalidInput(message)) => {
                writeln!(output, "{message}")?;
                continue;
            }
            Err(e) => return Err(e),
        };

        match command {
            SessionCommand::Message(text) => {
                writeln!(output, "Bot: {}", bot.process_input(&text))?;
            }
            SessionCommand::Train { question, answer } => {
                match bot.train_bot(&question, &answer) {
                    Ok(()) => writeln!(output, "FAQ added successfully!")?,
                    Err(FaqBotError::InvalidInput(message)) => writeln!(output, "{message}")?,
                    Err(e) => return Err(e),
                }
            }
            SessionCommand::List => {
                let list = FaqListResult {
                    faqs: bot.all_faqs(),
                };
                writeln!(output, "{}", list.to_human())?;
            }
            SessionCommand::Remove(question) => {
                let removed = bot.remove_faq(&question);
                let result = RemoveResult {
                    question,
                    removed,
                    total_faqs: bot.all_faqs().len(),
                };
                writeln!(output, "{}", result.to_human())?;
            }
            SessionCommand::History => {
                for turn in bot.history() {
                    writeln!(output, "{}", format_turn(&turn))?;
                }
            }
            SessionCommand::Clear => {
                bot.clear_history();
                writeln!(output, "Bot: {CLEARED_MESSAGE}")?;
            }
            SessionCommand::Help => writeln!(output, "{SESSION_HELP}")?,
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}
