//! Double Metaphone phonetic encoding.
//!
//! Encodes a word into one or two short codes approximating how it sounds,
//! per Lawrence Philips' Double Metaphone rule set. Words that are spelled
//! differently but pronounced alike ("Smith"/"Smyth", "night"/"knight")
//! encode to the same primary code.
//!
//! The encoder is a single cursor-driven scan over an uppercased copy of the
//! word. Most rules consume one character; digraph and trigraph rules look
//! ahead or behind by up to four characters and advance the cursor by the
//! length of the matched cluster. Codes are capped at
//! [`MAX_CODE_LEN`] symbols and the scan stops early once both codes reach
//! the cap.
//!
//! # Example
//!
//! ```rust
//! use fuzzystrings::phonetic::phonetic_code;
//!
//! let smith = phonetic_code("Smith");
//! assert_eq!(smith.primary, "SM0");
//! assert_eq!(smith.alternate, "XMT");
//! assert_eq!(phonetic_code("Smyth").primary, smith.primary);
//! ```

mod double_metaphone;

pub use double_metaphone::phonetic_code;

/// Maximum number of symbols in a phonetic code.
pub const MAX_CODE_LEN: usize = 4;

/// Symbols a phonetic code may contain.
pub const PHONETIC_ALPHABET: &[char] = &[
    'A', 'B', 'X', 'S', 'K', 'J', 'T', 'F', 'H', 'L', 'M', 'N', 'P', 'R', '0', 'W', 'Y',
];

/// The pair of phonetic codes produced for one word.
///
/// `primary` is empty only when the input carries no encodable sound (empty
/// input, non-alphabetic input, or an entirely silent word such as "h").
/// `alternate` is empty when the word has no plausible secondary
/// pronunciation, i.e. when the secondary code came out identical to the
/// primary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaphoneCode {
    /// The primary pronunciation code.
    pub primary: String,
    /// The secondary pronunciation code, or empty when identical to the
    /// primary.
    pub alternate: String,
}

impl MetaphoneCode {
    /// True when the word has a secondary pronunciation distinct from the
    /// primary.
    pub fn has_alternate(&self) -> bool {
        !self.alternate.is_empty()
    }

    /// True when the input produced no code at all (empty or entirely
    /// non-alphabetic input).
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// True when any pronunciation of `self` matches any pronunciation of
    /// `other`.
    ///
    /// This is the standard Double Metaphone equality test: the primary and
    /// alternate codes of both words are cross-compared.
    pub fn sounds_like(&self, other: &MetaphoneCode) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let ours = [self.primary.as_str(), self.alternate.as_str()];
        let theirs = [other.primary.as_str(), other.alternate.as_str()];
        ours.iter()
            .filter(|code| !code.is_empty())
            .any(|code| theirs.iter().any(|t| !t.is_empty() && t == code))
    }
}

impl std::fmt::Display for MetaphoneCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_alternate() {
            write!(f, "{}/{}", self.primary, self.alternate)
        } else {
            write!(f, "{}", self.primary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sounds_like_primary_match() {
        assert!(phonetic_code("Smith").sounds_like(&phonetic_code("Smyth")));
        assert!(phonetic_code("night").sounds_like(&phonetic_code("knight")));
    }

    #[test]
    fn test_sounds_like_rejects_unrelated() {
        assert!(!phonetic_code("Jensen").sounds_like(&phonetic_code("Wilkins")));
    }

    #[test]
    fn test_empty_codes_never_sound_alike() {
        let empty = phonetic_code("1234");
        assert!(empty.is_empty());
        assert!(!empty.sounds_like(&empty));
        assert!(!empty.sounds_like(&phonetic_code("test")));
    }

    #[test]
    fn test_display() {
        assert_eq!(phonetic_code("test").to_string(), "TST");
        assert_eq!(phonetic_code("Smith").to_string(), "SM0/XMT");
    }
}
