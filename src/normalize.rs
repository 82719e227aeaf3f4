//! Input normalization shared by all comparison algorithms.
//!
//! Normalization is deliberately minimal: leading/trailing whitespace is
//! trimmed and, where an algorithm calls for it, the string is case-folded.
//! Nothing else is altered — punctuation handling is each algorithm's own
//! decision.

/// Trim leading and trailing whitespace without copying.
///
/// Empty input is valid and produces an empty slice.
#[inline(always)]
pub fn trim_token(s: &str) -> &str {
    s.trim()
}

/// Produce the comparison-ready form of a token: trimmed and lowercased.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
///
/// # Example
///
/// ```rust
/// use fuzzystrings::normalize::normalize;
///
/// assert_eq!(normalize("  Fort Union "), "fort union");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
