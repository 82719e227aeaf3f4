//! Bigram similarity via the Sørensen–Dice coefficient.
//!
//! Each string is decomposed into the multiset of adjacent character pairs
//! ("bigrams") after whitespace removal. The coefficient is
//! `2 * matches / (|a| + |b|)` where `matches` is the size of the multiset
//! intersection — each bigram instance is consumed at most once, so
//! `"aaa"` vs `"aa"` matches one `aa`, not two.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Count the bigram multiset of `s`, ignoring whitespace.
fn bigram_counts(s: &str) -> (FxHashMap<[char; 2], usize>, usize) {
    let chars: SmallVec<[char; 32]> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut counts = FxHashMap::default();
    let total = chars.len().saturating_sub(1);

    for window in chars.windows(2) {
        *counts.entry([window[0], window[1]]).or_insert(0) += 1;
    }

    (counts, total)
}

/// Compute the Dice coefficient between two strings.
///
/// Returns a value in `[0.0, 1.0]`, symmetric in its arguments, and `1.0`
/// exactly when the two bigram multisets are identical.
///
/// Strings of length ≤ 1 (after whitespace removal) produce no bigrams, so
/// the score is `0.0` regardless of equality. Callers should treat that as
/// "no signal", not "no match". Both inputs bigram-free is defined as `0.0`.
///
/// # Example
///
/// ```rust
/// use fuzzystrings::dice::dice_coefficient;
///
/// assert_eq!(dice_coefficient("night", "night"), 1.0);
/// // "night" and "nacht" share the bigram "ht"
/// assert!(dice_coefficient("night", "nacht") > 0.0);
/// assert_eq!(dice_coefficient("a", "a"), 0.0); // no bigrams, no signal
/// ```
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    let (counts_a, total_a) = bigram_counts(a);
    let (counts_b, total_b) = bigram_counts(b);

    if total_a + total_b == 0 {
        return 0.0;
    }

    // Multiset intersection: each instance consumed at most once.
    let mut matches = 0usize;
    for (bigram, count_a) in &counts_a {
        if let Some(count_b) = counts_b.get(bigram) {
            matches += count_a.min(count_b);
        }
    }

    (2.0 * matches as f64) / (total_a + total_b) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(dice_coefficient("night", "night"), 1.0);
        assert_eq!(dice_coefficient("ab", "ab"), 1.0);
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(dice_coefficient("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_known_overlap() {
        // night: ni ig gh ht / nacht: na ac ch ht -> one shared bigram of 8
        let score = dice_coefficient("night", "nacht");
        assert!((score - 0.25).abs() < 1e-9);
        assert!(score < dice_coefficient("night", "night"));
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(
            dice_coefficient("jensen", "jensn"),
            dice_coefficient("jensn", "jensen")
        );
    }

    #[test]
    fn test_no_bigrams_is_no_signal() {
        assert_eq!(dice_coefficient("a", "a"), 0.0);
        assert_eq!(dice_coefficient("", ""), 0.0);
        assert_eq!(dice_coefficient("a", ""), 0.0);
    }

    #[test]
    fn test_multiset_not_set_semantics() {
        // "aaa" has bigrams {aa, aa}; "aa" has {aa}. Intersection is one
        // instance, not two: 2*1/(2+1).
        let score = dice_coefficient("aaa", "aa");
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_whitespace_removed_before_pairing() {
        // "a b" collapses to "ab", pairing across the gap
        assert_eq!(dice_coefficient("a b", "ab"), 1.0);
        assert_eq!(dice_coefficient("fort union", "fortunion"), 1.0);
    }

    #[test]
    fn test_identical_multisets_score_one() {
        // Different strings, same bigram multiset
        assert_eq!(dice_coefficient("abab", "abab"), 1.0);
    }
}
