//! Longest common subsequence.
//!
//! Standard character-level LCS dynamic program, returning both one valid
//! reconstructed subsequence and the similarity ratio
//! `2 * lcs_len / (len(a) + len(b))`, which lives on the same `[0, 1]` scale
//! as the Dice coefficient.

use smallvec::SmallVec;

/// Compute the longest common subsequence of two strings.
///
/// Returns `(subsequence, ratio)`. When several subsequences of maximal
/// length exist, any one of them may be returned — only the length and the
/// ratio are load-bearing for comparison. Both inputs empty yields
/// `("", 0.0)` by convention (the ratio is otherwise a division by zero).
///
/// # Example
///
/// ```rust
/// use fuzzystrings::lcs::longest_common_subsequence;
///
/// let (seq, ratio) = longest_common_subsequence("banana", "bandana");
/// assert_eq!(seq.len(), 6);
/// assert!((ratio - 12.0 / 13.0).abs() < 1e-9);
///
/// let (seq, ratio) = longest_common_subsequence("", "");
/// assert_eq!(seq, "");
/// assert_eq!(ratio, 0.0);
/// ```
pub fn longest_common_subsequence(a: &str, b: &str) -> (String, f64) {
    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m + n == 0 {
        return (String::new(), 0.0);
    }
    if m == 0 || n == 0 {
        return (String::new(), 0.0);
    }

    // Full table kept for reconstruction; inputs are short tokens so the
    // O(n*m) footprint stays small.
    let mut table = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a_chars[i - 1] == b_chars[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    // Walk back from the corner, preferring the source string on ties. Any
    // maximal subsequence is acceptable.
    let mut sequence: Vec<char> = Vec::with_capacity(table[m][n]);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if a_chars[i - 1] == b_chars[j - 1] {
            sequence.push(a_chars[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    sequence.reverse();

    let ratio = (2.0 * table[m][n] as f64) / (m + n) as f64;
    (sequence.into_iter().collect(), ratio)
}
