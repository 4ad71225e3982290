//! Command line argument parsing for the faqbot CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::engine::ChatBotConfig;
use crate::storage::DEFAULT_FAQ_FILE;

/// faqbot - a local FAQ-matching chatbot
#[derive(Parser, Debug, Clone)]
#[command(name = "faqbot")]
#[command(about = "A local FAQ-matching chatbot for the terminal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FaqBotArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// FAQ file to load and save
    #[arg(long, value_name = "PATH", env = "FAQBOT_FAQ_FILE", default_value = DEFAULT_FAQ_FILE)]
    pub faq_file: PathBuf,

    /// Do not add the built-in FAQs to an empty knowledge base
    #[arg(long)]
    pub no_defaults: bool,

    /// Seed for reply selection, for reproducible canned replies
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Subcommand to execute (defaults to an interactive chat)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl FaqBotArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The command to run.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }

    /// Chatbot configuration derived from the flags.
    pub fn chatbot_config(&self) -> ChatBotConfig {
        ChatBotConfig::default()
            .with_faq_path(&self.faq_file)
            .with_seed_defaults(!self.no_defaults)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start an interactive chat session
    Chat,

    /// Answer a single message
    Ask(AskArgs),

    /// Add or replace an FAQ
    Train(TrainArgs),

    /// List all stored FAQs
    List,

    /// Delete an FAQ by its question
    Remove(RemoveArgs),

    /// Show how a message is analyzed and scored
    Analyze(AnalyzeArgs),
}

/// Arguments for answering a message
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The message
    #[arg(value_name = "MESSAGE", num_args = 1.., trailing_var_arg = true)]
    pub message: Vec<String>,
}

impl AskArgs {
    pub fn text(&self) -> String {
        self.message.join(" ")
    }
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// The question
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// The answer
    #[arg(value_name = "ANSWER")]
    pub answer: String,
}

/// Arguments for deleting an FAQ
#[derive(Parser, Debug, Clone)]
pub struct RemoveArgs {
    /// The question of the FAQ to delete (case-insensitive)
    #[arg(value_name = "QUESTION")]
    pub question: String,
}

/// Arguments for analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// The message to analyze
    #[arg(value_name = "MESSAGE", num_args = 1.., trailing_var_arg = true)]
    pub message: Vec<String>,

    /// Number of best scoring FAQs to show
    #[arg(short = 'n', long, default_value = "5")]
    pub top: usize,
}

impl AnalyzeArgs {
    pub fn text(&self) -> String {
        self.message.join(" ")
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_chat() {
        let args = FaqBotArgs::try_parse_from(["faqbot"]).unwrap();
        assert!(matches!(args.command(), Command::Chat));
        assert_eq!(args.faq_file, PathBuf::from("faqs.json"));
        assert!(args.chatbot_config().seed_defaults);
    }

    #[test]
    fn test_ask_joins_words() {
        let args = FaqBotArgs::try_parse_from(["faqbot", "ask", "what's", "your", "name"]).unwrap();
        if let Command::Ask(ask_args) = args.command() {
            assert_eq!(ask_args.text(), "what's your name");
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_train_args() {
        let args = FaqBotArgs::try_parse_from([
            "faqbot",
            "--faq-file",
            "/tmp/custom.json",
            "--no-defaults",
            "train",
            "Can you learn?",
            "Yes.",
        ])
        .unwrap();

        let config = args.chatbot_config();
        assert_eq!(config.faq_path, PathBuf::from("/tmp/custom.json"));
        assert!(!config.seed_defaults);

        if let Command::Train(train_args) = args.command() {
            assert_eq!(train_args.question, "Can you learn?");
            assert_eq!(train_args.answer, "Yes.");
        } else {
            panic!("Expected Train command");
        }
    }

    #[test]
    fn test_analyze_args() {
        let args =
            FaqBotArgs::try_parse_from(["faqbot", "analyze", "-n", "2", "how", "do", "you", "work"])
                .unwrap();
        if let Command::Analyze(analyze_args) = args.command() {
            assert_eq!(analyze_args.top, 2);
            assert_eq!(analyze_args.text(), "how do you work");
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = FaqBotArgs::try_parse_from(["faqbot", "list"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = FaqBotArgs::try_parse_from(["faqbot", "-vv", "list"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = FaqBotArgs::try_parse_from(["faqbot", "-vvv", "--quiet", "list"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = FaqBotArgs::try_parse_from(["faqbot", "--format", "json", "list"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);

        assert!(FaqBotArgs::try_parse_from(["faqbot", "--format", "yaml", "list"]).is_err());
    }
}
