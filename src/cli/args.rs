//! Argument definitions for the fuzzystrings CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "fuzzystrings")]
#[command(about = "Fuzzy comparison of short noisy strings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compare two strings and print the verdict with the per-algorithm
    /// breakdown
    Compare {
        /// First string
        a: String,

        /// Second string
        b: String,

        /// Match threshold override (default 0.7)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Emit the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print Double Metaphone codes for one or more words
    Code {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Evaluate tab-separated string pairs from a file, one pair per line
    Eval {
        /// Pairs file: `candidate<TAB>reference` per line, `#` comments
        #[arg(short, long)]
        pairs: PathBuf,

        /// Match threshold override (default 0.7)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Emit one JSON verdict per line
        #[arg(long)]
        json: bool,
    },

    /// Start the interactive REPL
    Repl {
        /// Match threshold to start with (default 0.7)
        #[arg(short, long)]
        threshold: Option<f64>,
    },
}
