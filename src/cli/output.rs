//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{FaqBotArgs, OutputFormat};
use crate::engine::Turn;
use crate::error::Result;
use crate::intent::Intent;
use crate::knowledge::FaqEntry;
use crate::matcher::ScoredEntry;

/// Answers longer than this are shortened in FAQ listings.
pub const LIST_ANSWER_WIDTH: usize = 50;

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

/// Result structure for a single answered message.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResult {
    pub input: String,
    pub reply: String,
}

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainResult {
    pub question: String,
    pub answer: String,
    pub keywords: Vec<String>,
    pub total_faqs: usize,
}

/// Result structure for FAQ listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct FaqListResult {
    pub faqs: Vec<FaqEntry>,
}

/// Result structure for deletion.
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveResult {
    pub question: String,
    pub removed: bool,
    pub total_faqs: usize,
}

/// Result structure for analysis of one message.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub input: String,
    pub tokens: Vec<String>,
    pub keywords: Vec<String>,
    pub intent: Intent,
    pub threshold: f64,
    /// Question of the FAQ the message would be answered from, if any.
    pub matched: Option<String>,
    pub scores: Vec<ScoredEntry>,
}

impl HumanOutput for AskResult {
    fn to_human(&self) -> String {
        self.reply.clone()
    }
}

impl HumanOutput for TrainResult {
    fn to_human(&self) -> String {
        format!(
            "FAQ added successfully!\nKeywords: {}\nTotal FAQs: {}",
            self.keywords.join(", "),
            self.total_faqs
        )
    }
}

impl HumanOutput for FaqListResult {
    fn to_human(&self) -> String {
        if self.faqs.is_empty() {
            return "No FAQs stored.".to_string();
        }
        self.faqs
            .iter()
            .map(format_faq_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for RemoveResult {
    fn to_human(&self) -> String {
        if self.removed {
            "FAQ deleted successfully!".to_string()
        } else {
            format!("No FAQ found for \"{}\".", self.question)
        }
    }
}

impl HumanOutput for AnalysisResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Analysis:");
        let _ = writeln!(out, "═════════");
        let _ = writeln!(out, "Input: {}", self.input);
        let _ = writeln!(out, "Tokens: [{}]", self.tokens.join(", "));
        let _ = writeln!(out, "Keywords: [{}]", self.keywords.join(", "));
        let _ = writeln!(out, "Intent: {}", self.intent);
        match &self.matched {
            Some(question) => {
                let _ = writeln!(out, "Match: {question}");
            }
            None => {
                let _ = writeln!(out, "Match: none (threshold {:.2})", self.threshold);
            }
        }

        if !self.scores.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Scores:");
            let _ = writeln!(out, "───────");
            for scored in &self.scores {
                let _ = writeln!(
                    out,
                    "{:.3}  (question {:.3}, keywords {:.3})  {}",
                    scored.score.combined,
                    scored.score.question_score,
                    scored.score.keyword_score,
                    scored.entry.question
                );
            }
        }

        out.trim_end().to_string()
    }
}

/// One FAQ as `question -> answer`, with long answers shortened.
pub fn format_faq_line(entry: &FaqEntry) -> String {
    format!(
        "{} -> {}",
        entry.question,
        truncate(&entry.answer, LIST_ANSWER_WIDTH)
    )
}

/// One conversation turn as `[HH:MM:SS] Speaker: text` in local time.
pub fn format_turn(turn: &Turn) -> String {
    format!(
        "[{}] {}: {}",
        turn.at.with_timezone(&chrono::Local).format("%H:%M:%S"),
        turn.speaker,
        turn.text
    )
}

/// Shorten `text` to `width` characters followed by "...".
pub fn truncate(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &FaqBotArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(result),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(result: &T) -> Result<()> {
    println!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FaqBotArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
