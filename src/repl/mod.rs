//! Interactive REPL for exploring fuzzy comparisons.
//!
//! A line either compares two strings or runs a command:
//!
//! ```text
//! fuzzystrings> jensen | jensn
//! fuzzystrings> code smith
//! fuzzystrings> set threshold 0.8
//! fuzzystrings> settings
//! ```
//!
//! The `a | b` form allows embedded spaces in either operand; a line of two
//! bare tokens also compares.

use colored::Colorize;

use crate::matcher::{fuzzy_match_with, MatchPolicy};
use crate::phonetic::phonetic_code;

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<std::path::PathBuf>,
    /// Maximum history entries
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "fuzzystrings> ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| std::path::PathBuf::from("."))
                    .join(".fuzzystrings_history"),
            ),
            max_history: 1000,
        }
    }
}

/// Mutable session state: the active match policy.
#[derive(Debug, Clone, Default)]
pub struct ReplState {
    /// Policy applied to comparisons in this session.
    pub policy: MatchPolicy,
}

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Compare two strings under the session policy.
    Compare {
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
    },
    /// Print phonetic codes for a word.
    Code {
        /// The word to encode.
        word: String,
    },
    /// Update one policy field.
    Set {
        /// Field name: threshold, edit-scale, edit-ceiling,
        /// phonetic-perfect, or max-len.
        field: String,
        /// New value.
        value: String,
    },
    /// Show the session policy.
    Settings,
    /// Show usage help.
    Help,
    /// Leave the REPL.
    Exit,
}

/// What the caller should do after executing a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Text to print; keep reading.
    Output(String),
    /// Terminate the session.
    Exit,
}

fn parse_ratio(value: &str) -> Result<f64, String> {
    value
        .parse()
        .map_err(|_| format!("not a number: {:?}", value))
}

impl Command {
    /// Parse one input line. Empty lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        if let Some((a, b)) = line.split_once('|') {
            return Ok(Some(Command::Compare {
                a: a.trim().to_string(),
                b: b.trim().to_string(),
            }));
        }

        let mut tokens = line.split_whitespace();
        let head = tokens.next().unwrap_or_default();

        match head {
            "help" | "?" => Ok(Some(Command::Help)),
            "exit" | "quit" => Ok(Some(Command::Exit)),
            "settings" => Ok(Some(Command::Settings)),
            "code" => match tokens.next() {
                Some(word) => Ok(Some(Command::Code {
                    word: word.to_string(),
                })),
                None => Err("usage: code <word>".to_string()),
            },
            "set" => {
                let field = tokens.next().map(str::to_string);
                let value = tokens.next().map(str::to_string);
                match (field, value) {
                    (Some(field), Some(value)) => Ok(Some(Command::Set { field, value })),
                    _ => Err("usage: set <field> <value>".to_string()),
                }
            }
            _ => {
                // Two bare tokens compare; anything else is unknown.
                let rest: Vec<&str> = tokens.collect();
                if rest.len() == 1 {
                    Ok(Some(Command::Compare {
                        a: head.to_string(),
                        b: rest[0].to_string(),
                    }))
                } else {
                    Err(format!(
                        "unrecognized input {:?}; type 'help' or compare with 'a | b'",
                        line
                    ))
                }
            }
        }
    }

    /// Execute against the session state, producing printable output.
    pub fn execute(&self, state: &mut ReplState) -> Result<CommandResult, String> {
        match self {
            Command::Compare { a, b } => {
                let verdict = fuzzy_match_with(a, b, &state.policy);
                let outcome = if verdict.is_match {
                    "MATCH".green().bold()
                } else {
                    "NO MATCH".red().bold()
                };
                Ok(CommandResult::Output(format!(
                    "{}  confidence {:.4}  winner {}\n  dice {:.4} | levenshtein {} ({:.4}) | lcs {:.4} | metaphone {:.4}",
                    outcome,
                    verdict.confidence,
                    verdict.winner.to_string().yellow(),
                    verdict.breakdown.dice,
                    verdict.breakdown.levenshtein,
                    verdict.breakdown.levenshtein_similarity,
                    verdict.breakdown.lcs_ratio,
                    verdict.breakdown.phonetic,
                )))
            }
            Command::Code { word } => {
                let code = phonetic_code(word);
                if code.is_empty() {
                    Ok(CommandResult::Output(format!(
                        "{}: (no phonetic content)",
                        word
                    )))
                } else {
                    Ok(CommandResult::Output(format!(
                        "{}: {}",
                        word,
                        code.to_string().cyan()
                    )))
                }
            }
            Command::Set { field, value } => {
                match field.as_str() {
                    "threshold" => state.policy.match_threshold = parse_ratio(value)?,
                    "edit-scale" => state.policy.edit_scale = parse_ratio(value)?,
                    "edit-ceiling" => state.policy.edit_ceiling = parse_ratio(value)?,
                    "phonetic-perfect" => state.policy.phonetic_perfect = parse_ratio(value)?,
                    "max-len" => {
                        state.policy.max_token_len = value.parse().map_err(|_| {
                            format!("not a non-negative integer: {:?}", value)
                        })?
                    }
                    other => {
                        return Err(format!(
                            "unknown field {:?}; fields: threshold, edit-scale, \
                             edit-ceiling, phonetic-perfect, max-len",
                            other
                        ))
                    }
                }
                Ok(CommandResult::Output(format!("{} = {}", field, value)))
            }
            Command::Settings => Ok(CommandResult::Output(format!(
                "threshold {}\nedit-scale {}\nedit-ceiling {}\nphonetic-perfect {}\nmax-len {}",
                state.policy.match_threshold,
                state.policy.edit_scale,
                state.policy.edit_ceiling,
                state.policy.phonetic_perfect,
                state.policy.max_token_len,
            ))),
            Command::Help => Ok(CommandResult::Output(
                [
                    "Commands:",
                    "  <a> | <b>             compare two strings (spaces allowed)",
                    "  <a> <b>               compare two bare tokens",
                    "  code <word>           Double Metaphone codes",
                    "  set <field> <value>   tune the policy (see 'settings')",
                    "  settings              show the active policy",
                    "  help                  this text",
                    "  exit                  leave",
                ]
                .join("\n"),
            )),
            Command::Exit => Ok(CommandResult::Exit),
        }
    }
}
