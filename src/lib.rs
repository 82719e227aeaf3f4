//! # fuzzystrings
//!
//! Approximate string comparison for short, noisy text tokens — transcribed
//! speech, addresses, names.
//!
//! Four independent signals are computed per pair of strings:
//!
//! - **Dice coefficient** over character bigrams ([`dice`])
//! - **Levenshtein edit distance** ([`distance`])
//! - **Longest common subsequence** ([`lcs`])
//! - **Double Metaphone** phonetic codes ([`phonetic`])
//!
//! The [`matcher`] module combines them into a single confidence in `[0, 1]`
//! and a [`MatchVerdict`](matcher::MatchVerdict) that records which algorithm
//! produced the strongest normalized signal.
//!
//! ## Example
//!
//! ```rust
//! use fuzzystrings::prelude::*;
//!
//! assert!(fuzzy_equals("Jensen", " jensen "));
//!
//! let verdict = fuzzy_match("Jensen", "Jensn");
//! assert!(verdict.confidence > fuzzy_match_score("Jensen", "Wilkins"));
//! ```
//!
//! All operations are pure, synchronous, and total over their inputs: empty
//! strings, non-alphabetic characters, and zero-overlap pairs all produce
//! well-defined results rather than errors. Comparisons share no state and
//! may run on any number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dice;
pub mod distance;
pub mod lcs;
pub mod matcher;
pub mod normalize;
pub mod phonetic;

/// CLI interface and command handlers
#[cfg(feature = "cli")]
pub mod cli;

/// Interactive REPL for exploring fuzzy comparisons
#[cfg(feature = "cli")]
pub mod repl;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dice::dice_coefficient;
    pub use crate::distance::edit_distance;
    pub use crate::lcs::longest_common_subsequence;
    pub use crate::matcher::{
        fuzzy_equals, fuzzy_match, fuzzy_match_score, fuzzy_match_with, try_fuzzy_match,
        AlgorithmKind, MatchPolicy, MatchVerdict, ScoreBreakdown, TokenError,
    };
    pub use crate::normalize::{normalize, trim_token};
    pub use crate::phonetic::{phonetic_code, MetaphoneCode};
}
