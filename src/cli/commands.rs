//! Command handlers for the fuzzystrings CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::Commands;
use crate::matcher::{fuzzy_match_with, MatchPolicy, MatchVerdict};
use crate::phonetic::phonetic_code;

/// Execute a non-REPL CLI command.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Compare {
            a,
            b,
            threshold,
            json,
        } => compare(&a, &b, policy_with(threshold), json),
        Commands::Code { words } => code(&words),
        Commands::Eval {
            pairs,
            threshold,
            json,
        } => eval(&pairs, policy_with(threshold), json),
        Commands::Repl { .. } => bail!("the repl is interactive; start it from the binary"),
    }
}

fn policy_with(threshold: Option<f64>) -> MatchPolicy {
    match threshold {
        Some(t) => MatchPolicy::new().with_match_threshold(t),
        None => MatchPolicy::default(),
    }
}

fn compare(a: &str, b: &str, policy: MatchPolicy, json: bool) -> Result<()> {
    let verdict = fuzzy_match_with(a, b, &policy);

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    print_verdict(a, b, &verdict);
    Ok(())
}

/// Render a verdict the way the REPL and `compare` both show it.
pub fn print_verdict(a: &str, b: &str, verdict: &MatchVerdict) {
    let outcome = if verdict.is_match {
        "MATCH".green().bold()
    } else {
        "NO MATCH".red().bold()
    };

    println!("{:?} vs {:?}: {}", a, b, outcome);
    println!(
        "  confidence {}  (winner: {})",
        format!("{:.4}", verdict.confidence).cyan(),
        verdict.winner.to_string().yellow()
    );
    println!(
        "  dice {:.4} | levenshtein {} ({:.4}) | lcs {:.4} | metaphone {:.4}",
        verdict.breakdown.dice,
        verdict.breakdown.levenshtein,
        verdict.breakdown.levenshtein_similarity,
        verdict.breakdown.lcs_ratio,
        verdict.breakdown.phonetic
    );
}

fn code(words: &[String]) -> Result<()> {
    for word in words {
        let code = phonetic_code(word);
        if code.is_empty() {
            println!("{}: {}", word, "(no phonetic content)".dimmed());
        } else {
            println!("{}: {}", word, code.to_string().cyan());
        }
    }
    Ok(())
}

fn eval(pairs_path: &Path, policy: MatchPolicy, json: bool) -> Result<()> {
    let file = File::open(pairs_path)
        .with_context(|| format!("failed to open pairs file {}", pairs_path.display()))?;
    let reader = BufReader::new(file);

    let mut total = 0usize;
    let mut matched = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", line_no + 1))?;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (a, b) = line.split_once('\t').with_context(|| {
            format!(
                "line {}: expected `candidate<TAB>reference`, got {:?}",
                line_no + 1,
                line
            )
        })?;

        let verdict = fuzzy_match_with(a, b, &policy);
        total += 1;
        if verdict.is_match {
            matched += 1;
        }

        if json {
            println!("{}", serde_json::to_string(&verdict)?);
        } else {
            let marker = if verdict.is_match {
                "✓".green()
            } else {
                "✗".red()
            };
            println!(
                "{} {:.4} {} {:?} ~ {:?}",
                marker,
                verdict.confidence,
                verdict.winner.to_string().yellow(),
                a,
                b
            );
        }
    }

    if !json {
        println!();
        println!(
            "{} of {} pair(s) matched ({:.1}%)",
            matched.to_string().green().bold(),
            total,
            if total == 0 {
                0.0
            } else {
                100.0 * matched as f64 / total as f64
            }
        );
    }
    Ok(())
}
