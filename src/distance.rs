//! Levenshtein edit distance.
//!
//! Classic dynamic-programming edit distance with unit cost for insertion,
//! deletion, and substitution, space-optimized to two rows. Comparison is
//! case-insensitive and ignores leading/trailing whitespace; use
//! [`raw_edit_distance`] to compare strings exactly as given.

use smallvec::SmallVec;

/// Compute the Levenshtein distance between two strings.
///
/// Inputs are trimmed and case-folded before comparison, so
/// `edit_distance("Test ", " test")` is `0`. The result is the minimum
/// number of single-character insertions, deletions, and substitutions
/// transforming one string into the other; `0` iff the normalized strings
/// are identical.
///
/// # Example
///
/// ```rust
/// use fuzzystrings::distance::edit_distance;
///
/// assert_eq!(edit_distance("test", "test"), 0);
/// assert_eq!(edit_distance("test", "tent"), 1);
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    raw_edit_distance(&a.trim().to_lowercase(), &b.trim().to_lowercase())
}

/// Compute the Levenshtein distance without any normalization.
///
/// Empty inputs are handled: the distance is the character count of the
/// other string.
pub fn raw_edit_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Space-optimized DP: two rows instead of the full matrix.
    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0usize; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if source_chars[i - 1] == target_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
