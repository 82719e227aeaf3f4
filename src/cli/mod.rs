//! CLI interface for fuzzystrings
//!
//! Provides command-line utilities for comparing strings, inspecting
//! phonetic codes, and evaluating recognizer output offline.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
