//! fuzzystrings - fuzzy comparison of short noisy strings
//!
//! Provides CLI utilities and an interactive REPL for comparing strings
//! with the composite fuzzy matcher.

use clap::Parser;
use colored::Colorize;
use std::process;

use fuzzystrings::cli::{commands, Cli, Commands};
use fuzzystrings::matcher::MatchPolicy;
use fuzzystrings::repl::{Command, CommandResult, ReplConfig, ReplState};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repl { threshold } => run_repl(threshold),
        other => commands::execute(other),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run_repl(threshold: Option<f64>) -> anyhow::Result<()> {
    print_banner();

    let mut state = ReplState::default();
    if let Some(t) = threshold {
        state.policy = MatchPolicy::new().with_match_threshold(t);
    }

    let repl_config = ReplConfig::default();

    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .max_history_size(repl_config.max_history)?
        .build();
    let mut editor = DefaultEditor::with_config(rustyline_config)?;

    // Load history if it exists
    if let Some(history_path) = &repl_config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    loop {
        let readline = editor.readline(&repl_config.prompt);

        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "(interrupted; type 'exit' to leave)".dimmed());
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{}: {}", "Error".red().bold(), message);
                continue;
            }
        };

        match command.execute(&mut state) {
            Ok(CommandResult::Output(output)) => println!("{}", output),
            Ok(CommandResult::Exit) => break,
            Err(message) => eprintln!("{}: {}", "Error".red().bold(), message),
        }
    }

    // Save history
    if let Some(history_path) = &repl_config.history_file {
        if let Err(e) = editor.save_history(history_path) {
            eprintln!("{}: Failed to save history: {}", "Warning".yellow(), e);
        }
    }

    Ok(())
}

fn print_banner() {
    println!();
    println!(
        "{}",
        "═══════════════════════════════════════════════════════".bright_cyan()
    );
    println!(
        "{}",
        "   fuzzystrings - Fuzzy String Comparison"
            .bright_cyan()
            .bold()
    );
    println!(
        "{}",
        "═══════════════════════════════════════════════════════".bright_cyan()
    );
    println!();
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!("  Type {} for available commands", "'help'".yellow().bold());
    println!(
        "  Type {} or press {} to exit",
        "'exit'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!();
    println!("{}", "  Quick Start:".bold());
    println!("    • Compare strings:   {}", "jensen | jensn".cyan());
    println!("    • Phonetic codes:    {}", "code smith".cyan());
    println!("    • Tune the policy:   {}", "set threshold 0.8".cyan());
    println!("    • Show settings:     {}", "settings".cyan());
    println!();
}
