//! Composite fuzzy matcher.
//!
//! Combines the four similarity signals into a single confidence in
//! `[0, 1]` and a [`MatchVerdict`] recording which algorithm produced the
//! strongest normalized signal.
//!
//! Normalization policy:
//!
//! - Dice and LCS ratios are already in `[0, 1]` and pass through.
//! - The Levenshtein distance `d` becomes `1 / (1 + d * edit_scale)`,
//!   clamped to `edit_ceiling` so edit distance alone never claims
//!   certainty.
//! - Double Metaphone contributes the fraction of matching symbol positions
//!   between the two primary codes when both are exactly four symbols long
//!   (`0.0` otherwise), with a perfect 4/4 match down-weighted to
//!   `phonetic_perfect` — phonetic identity is a weaker guarantee of true
//!   equivalence than spelling identity.
//!
//! The four normalized scores are averaged with equal weight. All
//! calibration constants live in [`MatchPolicy`].

use thiserror::Error;

use crate::dice::dice_coefficient;
use crate::distance::raw_edit_distance;
use crate::lcs::longest_common_subsequence;
use crate::normalize::normalize;
use crate::phonetic::{phonetic_code, MAX_CODE_LEN};

/// The algorithm that produced the strongest normalized signal for a pair.
///
/// Scores are scanned in the fixed order `Dice` → `LevenshteinDistance` →
/// `LongestCommonSubsequence` → `DoubleMetaphone`; `Average` is the tag when
/// no single algorithm strictly dominates the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    /// Bigram overlap (Dice coefficient).
    Dice,
    /// Levenshtein edit distance, normalized.
    LevenshteinDistance,
    /// Longest common subsequence ratio.
    LongestCommonSubsequence,
    /// Double Metaphone primary-code position match.
    DoubleMetaphone,
    /// No single algorithm strictly dominated; the confidence is the
    /// equal-weight average.
    Average,
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AlgorithmKind::Dice => "Dice",
            AlgorithmKind::LevenshteinDistance => "LevenshteinDistance",
            AlgorithmKind::LongestCommonSubsequence => "LongestCommonSubsequence",
            AlgorithmKind::DoubleMetaphone => "DoubleMetaphone",
            AlgorithmKind::Average => "Average",
        };
        write!(f, "{}", name)
    }
}

/// Per-algorithm scores for one comparison, raw and normalized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Dice coefficient in `[0, 1]`.
    pub dice: f64,
    /// Raw Levenshtein distance (non-negative edit count).
    pub levenshtein: usize,
    /// Levenshtein distance normalized to `[0, edit_ceiling]`.
    pub levenshtein_similarity: f64,
    /// LCS ratio in `[0, 1]`.
    pub lcs_ratio: f64,
    /// Double Metaphone position-match fraction in `[0, phonetic_perfect]`.
    pub phonetic: f64,
}

/// The outcome of one fuzzy comparison. Constructed once per call,
/// immutable, no persistence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchVerdict {
    /// Whether the confidence reached the policy's match threshold.
    pub is_match: bool,
    /// Equal-weight average of the four normalized scores, in `[0, 1]`.
    pub confidence: f64,
    /// The algorithm whose normalized score was strictly maximal, or
    /// [`AlgorithmKind::Average`] on a tie.
    pub winner: AlgorithmKind,
    /// The individual signals behind the verdict.
    pub breakdown: ScoreBreakdown,
}

/// Boundary error for inputs outside the supported domain.
///
/// All comparison functions are total over ordinary strings; the only
/// rejected inputs are tokens longer than the configured bound, which would
/// otherwise make the O(n·m) DP tables arbitrarily large.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Input exceeds [`MatchPolicy::max_token_len`] characters.
    #[error("input token is {len} characters, exceeding the {max} character bound")]
    TooLong {
        /// Character count of the offending input.
        len: usize,
        /// The configured bound.
        max: usize,
    },
}

/// Calibration constants for the composite matcher.
///
/// The defaults reproduce the observed behavior of the system this library
/// descends from; they are policy choices, not algorithm requirements, so
/// callers may tune them.
///
/// # Example
///
/// ```rust
/// use fuzzystrings::matcher::{fuzzy_match_with, MatchPolicy};
///
/// let strict = MatchPolicy::new().with_match_threshold(0.9);
/// assert!(!fuzzy_match_with("Jensen", "Jensn", &strict).is_match);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchPolicy {
    /// `k` in the edit-distance normalization `1 / (1 + d * k)`.
    pub edit_scale: f64,
    /// Ceiling for the normalized edit-distance similarity, keeping edit
    /// distance alone from claiming certainty.
    pub edit_ceiling: f64,
    /// Confidence assigned to a perfect 4/4 phonetic match.
    pub phonetic_perfect: f64,
    /// Minimum confidence for `is_match`.
    pub match_threshold: f64,
    /// Maximum accepted token length in characters; longer inputs are
    /// truncated by the convenience functions and rejected by
    /// [`try_fuzzy_match`].
    pub max_token_len: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            edit_scale: 0.2,
            edit_ceiling: 0.99,
            phonetic_perfect: 0.90,
            match_threshold: 0.7,
            max_token_len: 256,
        }
    }
}

impl MatchPolicy {
    /// Create a policy with the default calibration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `k` in the edit-distance normalization.
    pub fn with_edit_scale(mut self, k: f64) -> Self {
        self.edit_scale = k;
        self
    }

    /// Set the edit-distance similarity ceiling.
    pub fn with_edit_ceiling(mut self, ceiling: f64) -> Self {
        self.edit_ceiling = ceiling;
        self
    }

    /// Set the confidence assigned to a perfect phonetic match.
    pub fn with_phonetic_perfect(mut self, value: f64) -> Self {
        self.phonetic_perfect = value;
        self
    }

    /// Set the match threshold.
    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    /// Set the maximum accepted token length.
    pub fn with_max_token_len(mut self, max: usize) -> Self {
        self.max_token_len = max;
        self
    }
}

/// Compare two strings under the default [`MatchPolicy`].
pub fn fuzzy_match(a: &str, b: &str) -> MatchVerdict {
    fuzzy_match_with(a, b, &MatchPolicy::default())
}

/// Compare two strings under an explicit policy.
///
/// Inputs are trimmed and case-folded before the algorithms run. Tokens
/// longer than `policy.max_token_len` are truncated to the bound, keeping
/// this function total; use [`try_fuzzy_match`] to reject them instead.
pub fn fuzzy_match_with(a: &str, b: &str, policy: &MatchPolicy) -> MatchVerdict {
    let a = bounded(a, policy.max_token_len);
    let b = bounded(b, policy.max_token_len);
    score_pair(&normalize(&a), &normalize(&b), policy)
}

/// Compare two strings, rejecting tokens longer than the policy bound.
pub fn try_fuzzy_match(a: &str, b: &str, policy: &MatchPolicy) -> Result<MatchVerdict, TokenError> {
    for s in [a, b] {
        let len = s.chars().count();
        if len > policy.max_token_len {
            return Err(TokenError::TooLong {
                len,
                max: policy.max_token_len,
            });
        }
    }
    Ok(score_pair(&normalize(a), &normalize(b), policy))
}

/// Composite confidence in `[0, 1]` under the default policy. Useful for
/// ranking candidate interpretations.
pub fn fuzzy_match_score(a: &str, b: &str) -> f64 {
    fuzzy_match(a, b).confidence
}

/// Loose equality for short command tokens.
///
/// True when the inputs are equal after trimming and case-folding, or when
/// the composite confidence reaches the default match threshold. Whitespace
/// variation never causes a false negative: `fuzzy_equals(" w ", "w")`
/// holds.
pub fn fuzzy_equals(a: &str, b: &str) -> bool {
    let na = normalize(a);
    let nb = normalize(b);
    if na == nb {
        return true;
    }
    score_pair(&na, &nb, &MatchPolicy::default()).is_match
}

fn bounded(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Score one normalized pair. `a` and `b` must already be trimmed and
/// case-folded.
fn score_pair(a: &str, b: &str, policy: &MatchPolicy) -> MatchVerdict {
    let dice = dice_coefficient(a, b);
    let levenshtein = raw_edit_distance(a, b);
    let levenshtein_similarity =
        (1.0 / (1.0 + levenshtein as f64 * policy.edit_scale)).min(policy.edit_ceiling);
    let (_, lcs_ratio) = longest_common_subsequence(a, b);
    let phonetic = phonetic_similarity(a, b, policy);

    let breakdown = ScoreBreakdown {
        dice,
        levenshtein,
        levenshtein_similarity,
        lcs_ratio,
        phonetic,
    };

    let confidence =
        (dice + levenshtein_similarity + lcs_ratio + phonetic) / 4.0;

    MatchVerdict {
        is_match: confidence >= policy.match_threshold,
        confidence,
        winner: attribute_winner(&breakdown),
        breakdown,
    }
}

/// Fraction of matching symbol positions between the two primary Double
/// Metaphone codes, defined only when both codes reach the full four
/// symbols. A perfect match is down-weighted to `phonetic_perfect`.
fn phonetic_similarity(a: &str, b: &str, policy: &MatchPolicy) -> f64 {
    let code_a = phonetic_code(a);
    let code_b = phonetic_code(b);

    if code_a.primary.len() != MAX_CODE_LEN || code_b.primary.len() != MAX_CODE_LEN {
        return 0.0;
    }

    let matches = code_a
        .primary
        .chars()
        .zip(code_b.primary.chars())
        .filter(|(x, y)| x == y)
        .count();

    if matches == 0 {
        return 0.0;
    }
    if matches == MAX_CODE_LEN {
        return policy.phonetic_perfect;
    }
    matches as f64 / MAX_CODE_LEN as f64
}

/// Pick the winning algorithm: a strictly maximal normalized score wins;
/// any exact tie at the maximum is attributed to the average instead.
/// Scan order is fixed: Dice, Levenshtein, LCS, Double Metaphone.
fn attribute_winner(breakdown: &ScoreBreakdown) -> AlgorithmKind {
    let scored = [
        (AlgorithmKind::Dice, breakdown.dice),
        (
            AlgorithmKind::LevenshteinDistance,
            breakdown.levenshtein_similarity,
        ),
        (
            AlgorithmKind::LongestCommonSubsequence,
            breakdown.lcs_ratio,
        ),
        (AlgorithmKind::DoubleMetaphone, breakdown.phonetic),
    ];

    let mut winner = scored[0].0;
    let mut best = scored[0].1;
    let mut tied = false;

    for (kind, score) in scored.into_iter().skip(1) {
        if score > best {
            winner = kind;
            best = score;
            tied = false;
        } else if score == best {
            tied = true;
        }
    }

    if tied {
        AlgorithmKind::Average
    } else {
        winner
    }
}
