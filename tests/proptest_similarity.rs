//! Property-based tests for the similarity algorithms.
//!
//! These verify the contract-level properties the composite matcher relies
//! on:
//!
//! 1. **Symmetry**: every pairwise score is invariant under argument swap
//! 2. **Identity**: self-comparison yields the extreme value
//! 3. **Bounds**: ratios stay in [0, 1], distances stay non-negative
//! 4. **Triangle inequality** for the edit distance
//! 5. **Determinism** of the phonetic encoder, plus its cap and alphabet
//! 6. **Idempotence** of normalization

use fuzzystrings::dice::dice_coefficient;
use fuzzystrings::distance::{edit_distance, raw_edit_distance};
use fuzzystrings::lcs::longest_common_subsequence;
use fuzzystrings::matcher::{fuzzy_equals, fuzzy_match_score};
use fuzzystrings::normalize::normalize;
use fuzzystrings::phonetic::{phonetic_code, MAX_CODE_LEN, PHONETIC_ALPHABET};
use proptest::prelude::*;

// String generators
fn arb_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,20}").unwrap()
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,20}").unwrap()
}

fn arb_noisy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ a-zA-Z0-9.']{0,30}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // ========================================================================
    // Dice coefficient
    // ========================================================================

    #[test]
    fn dice_symmetric(a in arb_noisy(), b in arb_noisy()) {
        prop_assert_eq!(dice_coefficient(&a, &b), dice_coefficient(&b, &a));
    }

    #[test]
    fn dice_bounded(a in arb_noisy(), b in arb_noisy()) {
        let score = dice_coefficient(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of bounds", score);
    }

    #[test]
    fn dice_identity(a in arb_word()) {
        // Any string with at least one bigram scores 1.0 against itself.
        prop_assert_eq!(dice_coefficient(&a, &a), 1.0);
    }

    // ========================================================================
    // Edit distance
    // ========================================================================

    #[test]
    fn edit_distance_symmetric(a in arb_noisy(), b in arb_noisy()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn edit_distance_identity(a in arb_noisy()) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
    }

    #[test]
    fn raw_edit_distance_indiscernible(a in arb_token(), b in arb_token()) {
        if raw_edit_distance(&a, &b) == 0 {
            prop_assert_eq!(&a, &b);
        }
    }

    #[test]
    fn raw_edit_distance_triangle_inequality(
        a in arb_token(),
        b in arb_token(),
        c in arb_token()
    ) {
        let d_ac = raw_edit_distance(&a, &c);
        let d_ab = raw_edit_distance(&a, &b);
        let d_bc = raw_edit_distance(&b, &c);
        prop_assert!(
            d_ac <= d_ab + d_bc,
            "triangle inequality violated: {} > {} + {}",
            d_ac, d_ab, d_bc
        );
    }

    #[test]
    fn edit_distance_bounded_by_longer_input(a in arb_token(), b in arb_token()) {
        let bound = a.chars().count().max(b.chars().count());
        prop_assert!(raw_edit_distance(&a, &b) <= bound);
    }

    // ========================================================================
    // Longest common subsequence
    // ========================================================================

    #[test]
    fn lcs_ratio_symmetric(a in arb_noisy(), b in arb_noisy()) {
        let (_, r_ab) = longest_common_subsequence(&a, &b);
        let (_, r_ba) = longest_common_subsequence(&b, &a);
        prop_assert_eq!(r_ab, r_ba);
    }

    #[test]
    fn lcs_ratio_bounded(a in arb_noisy(), b in arb_noisy()) {
        let (_, ratio) = longest_common_subsequence(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ratio), "ratio {} out of bounds", ratio);
    }

    #[test]
    fn lcs_identity(a in arb_word()) {
        let (seq, ratio) = longest_common_subsequence(&a, &a);
        prop_assert_eq!(seq, a);
        prop_assert_eq!(ratio, 1.0);
    }

    #[test]
    fn lcs_sequence_no_longer_than_either_input(a in arb_token(), b in arb_token()) {
        let (seq, _) = longest_common_subsequence(&a, &b);
        prop_assert!(seq.chars().count() <= a.chars().count().min(b.chars().count()));
    }

    // ========================================================================
    // Double Metaphone
    // ========================================================================

    #[test]
    fn phonetic_deterministic(a in arb_noisy()) {
        prop_assert_eq!(phonetic_code(&a), phonetic_code(&a));
    }

    #[test]
    fn phonetic_capped_and_in_alphabet(a in arb_noisy()) {
        let code = phonetic_code(&a);
        for symbols in [&code.primary, &code.alternate] {
            prop_assert!(symbols.chars().count() <= MAX_CODE_LEN);
            for c in symbols.chars() {
                prop_assert!(
                    PHONETIC_ALPHABET.contains(&c),
                    "code {:?} for {:?} uses symbol {:?}",
                    code, a, c
                );
            }
        }
    }

    #[test]
    fn phonetic_case_insensitive(a in arb_word()) {
        prop_assert_eq!(phonetic_code(&a), phonetic_code(&a.to_uppercase()));
    }

    #[test]
    fn phonetic_nonempty_for_vowel_initial_words(a in prop::string::string_regex("[aeiou][a-z]{0,10}").unwrap()) {
        prop_assert!(!phonetic_code(&a).primary.is_empty());
    }

    // ========================================================================
    // Normalizer and composite
    // ========================================================================

    #[test]
    fn normalize_idempotent(a in arb_noisy()) {
        let once = normalize(&a);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn fuzzy_score_bounded_and_symmetric(a in arb_noisy(), b in arb_noisy()) {
        let ab = fuzzy_match_score(&a, &b);
        let ba = fuzzy_match_score(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab), "score {} out of bounds", ab);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn fuzzy_equals_ignores_surrounding_whitespace(a in arb_word()) {
        let padded = format!("  {}  ", a);
        prop_assert!(fuzzy_equals(&padded, &a));
        prop_assert!(fuzzy_equals(&a.to_uppercase(), &a));
    }
}
