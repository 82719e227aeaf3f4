//! End-to-end tests over the evaluation vectors the original system was
//! validated against: misheard voice tokens, surname confusions, and
//! street-address variants.

use fuzzystrings::prelude::*;

/// Surnames a recognizer plausibly confuses with "Jensn".
const SURNAME_PAIRS: &[(&str, &str)] = &[
    ("Jensn", "Adams"),
    ("Jensn", "Benson"),
    ("Jensn", "Geralds"),
    ("Jensn", "Johannson"),
    ("Jensn", "Johnson"),
    ("Jensn", "Jensen"),
    ("Jensn", "Jordon"),
    ("Jensn", "Madsen"),
    ("Jensn", "Stratford"),
    ("Jensn", "Wilkins"),
];

/// Address variants against "2130 South Fort Union Blvd.".
const ADDRESS_PAIRS: &[(&str, &str)] = &[
    ("2130 South Fort Union Blvd.", "2689 East Milkin Ave."),
    ("2130 South Fort Union Blvd.", "85 Morrison"),
    ("2130 South Fort Union Blvd.", "2350 North Main"),
    ("2130 South Fort Union Blvd.", "567 West Center Street"),
    ("2130 South Fort Union Blvd.", "2130 Fort Union Boulevard"),
    ("2130 South Fort Union Blvd.", "2310 S. Ft. Union Blvd."),
    ("2130 South Fort Union Blvd.", "98 West Fort Union"),
    ("2130 South Fort Union Blvd.", "Rural Route 2 Box 29"),
    ("2130 South Fort Union Blvd.", "PO Box 3487"),
    ("2130 South Fort Union Blvd.", "3 Harvard Square"),
];

/// Whitespace/case variants of a one-letter token against "test".
const NOISE_PAIRS: &[(&str, &str)] = &[
    ("test", "w"),
    ("test", "W"),
    ("test", "w "),
    ("test", "W "),
    ("test", " w"),
    ("test", " W"),
    ("test", " w "),
    ("test", " W "),
];

fn all_pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    NOISE_PAIRS
        .iter()
        .chain(SURNAME_PAIRS)
        .chain(ADDRESS_PAIRS)
        .copied()
}

#[test]
fn fuzzy_match_score_is_positive_on_all_vectors() {
    for (a, b) in all_pairs() {
        let score = fuzzy_match_score(a, b);
        assert!(score > 0.0, "score for {:?} vs {:?} was {}", a, b, score);
        assert!(score <= 1.0, "score for {:?} vs {:?} was {}", a, b, score);
    }
}

#[test]
fn dice_is_defined_on_all_vectors() {
    for (a, b) in all_pairs() {
        let score = dice_coefficient(a, b);
        assert!((0.0..=1.0).contains(&score), "{:?} vs {:?}", a, b);
    }
}

#[test]
fn edit_distance_is_positive_on_all_vectors() {
    // No pair in the vector set is equal after normalization.
    for (a, b) in all_pairs() {
        assert!(edit_distance(a, b) > 0, "{:?} vs {:?}", a, b);
    }
}

#[test]
fn lcs_ratio_is_defined_on_all_vectors() {
    for (a, b) in all_pairs() {
        let (seq, ratio) = longest_common_subsequence(a, b);
        assert!((0.0..=1.0).contains(&ratio), "{:?} vs {:?}", a, b);
        assert!(seq.len() * 2 <= a.chars().count() + b.chars().count());
    }
}

#[test]
fn phonetic_code_is_defined_on_all_vector_tokens() {
    for (a, b) in all_pairs() {
        for word in [a, b] {
            let code = phonetic_code(word);
            assert!(code.primary.len() <= 4, "{:?} -> {:?}", word, code);
            assert!(code.alternate.len() <= 4, "{:?} -> {:?}", word, code);
        }
    }
}

#[test]
fn near_miss_outranks_unrelated_name() {
    let near = fuzzy_match_score("Jensen", "Jensn");
    let far = fuzzy_match_score("Jensen", "Wilkins");
    assert!(near > far, "near {} vs far {}", near, far);
}

#[test]
fn abbreviated_address_outranks_unrelated_address() {
    let near = fuzzy_match_score("2130 South Fort Union Blvd.", "2310 S. Ft. Union Blvd.");
    let far = fuzzy_match_score("2130 South Fort Union Blvd.", "PO Box 3487");
    assert!(near > far, "near {} vs far {}", near, far);
}

#[test]
fn dice_known_worked_example() {
    // "night"/"nacht" share only the bigram "ht".
    let cross = dice_coefficient("night", "nacht");
    assert!(cross > 0.0);
    assert!(cross < dice_coefficient("night", "night"));
}

#[test]
fn edit_distance_sanity() {
    assert_eq!(edit_distance("test", "test"), 0);
    assert_eq!(edit_distance("test", "tent"), 1);
}

#[test]
fn fuzzy_equals_tolerates_whitespace_and_case() {
    assert!(fuzzy_equals(" w ", "w"));
    assert!(fuzzy_equals("w", "W"));
    assert!(fuzzy_equals("Fort Union", "fort union "));
}

#[test]
fn verdict_is_deterministic() {
    let first = fuzzy_match("Jensen", "Johnson");
    for _ in 0..10 {
        assert_eq!(fuzzy_match("Jensen", "Johnson"), first);
    }
}

#[test]
fn winner_tag_appears_in_breakdown_scores() {
    for (a, b) in all_pairs() {
        let verdict = fuzzy_match(a, b);
        let scores = [
            verdict.breakdown.dice,
            verdict.breakdown.levenshtein_similarity,
            verdict.breakdown.lcs_ratio,
            verdict.breakdown.phonetic,
        ];
        let max = scores.iter().cloned().fold(f64::MIN, f64::max);
        match verdict.winner {
            AlgorithmKind::Dice => assert_eq!(verdict.breakdown.dice, max),
            AlgorithmKind::LevenshteinDistance => {
                assert_eq!(verdict.breakdown.levenshtein_similarity, max)
            }
            AlgorithmKind::LongestCommonSubsequence => {
                assert_eq!(verdict.breakdown.lcs_ratio, max)
            }
            AlgorithmKind::DoubleMetaphone => assert_eq!(verdict.breakdown.phonetic, max),
            AlgorithmKind::Average => {
                // Average means the maximum was shared.
                let at_max = scores.iter().filter(|s| **s == max).count();
                assert!(at_max >= 2, "{:?} vs {:?}: {:?}", a, b, verdict);
            }
        }
    }
}

#[test]
fn policy_threshold_is_honored() {
    let verdict = fuzzy_match("Jensen", "Jensn");
    assert!(verdict.is_match);

    let above = MatchPolicy::new().with_match_threshold(verdict.confidence + 0.01);
    assert!(!fuzzy_match_with("Jensen", "Jensn", &above).is_match);

    let below = MatchPolicy::new().with_match_threshold(verdict.confidence - 0.01);
    assert!(fuzzy_match_with("Jensen", "Jensn", &below).is_match);
}

#[test]
fn oversize_tokens_are_rejected_by_the_checked_api() {
    let policy = MatchPolicy::default();
    let long = "a".repeat(policy.max_token_len + 1);
    assert!(matches!(
        try_fuzzy_match(&long, "b", &policy),
        Err(TokenError::TooLong { .. })
    ));
    // The convenience form stays total.
    let _ = fuzzy_match(&long, "b");
}
