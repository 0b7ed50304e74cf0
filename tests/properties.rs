//! Property tests for the universal contracts of the library
//!
//! These verify the laws that hold for all inputs, not just the worked
//! examples covered by the unit tests in each module.

use proptest::prelude::*;
use textkit::{clean_text, count_vowels, factorial, is_palindrome, maximum};

// ============================================================================
// clean_text
// ============================================================================

proptest! {
    #[test]
    fn clean_text_is_idempotent(s in "\\PC*") {
        let once = clean_text(&s);
        prop_assert_eq!(clean_text(&once), once.clone());
    }

    #[test]
    fn clean_text_output_has_no_punctuation(s in "\\PC*") {
        let cleaned = clean_text(&s);
        prop_assert!(!cleaned.chars().any(|ch| textkit::PUNCTUATION.contains(&ch)));
    }

    #[test]
    fn clean_text_never_grows_char_count(s in "\\PC*") {
        prop_assert!(clean_text(&s).chars().count() <= s.to_lowercase().chars().count());
    }
}

// ============================================================================
// maximum
// ============================================================================

proptest! {
    #[test]
    fn maximum_is_an_element_and_upper_bound(xs in prop::collection::vec(any::<i64>(), 1..100)) {
        let max = maximum(xs.iter().copied()).unwrap();
        prop_assert!(xs.contains(&max), "maximum must come from the sequence");
        prop_assert!(xs.iter().all(|&x| x <= max), "maximum must dominate the sequence");
    }

    #[test]
    fn maximum_agrees_with_std_for_integers(xs in prop::collection::vec(any::<i32>(), 0..100)) {
        prop_assert_eq!(maximum(xs.iter().copied()), xs.iter().copied().max());
    }
}

// ============================================================================
// factorial
// ============================================================================

proptest! {
    #[test]
    fn factorial_is_monotone_below_overflow(n in 1u32..=34) {
        prop_assert!(factorial(n).unwrap() >= factorial(n - 1).unwrap());
    }

    #[test]
    fn factorial_satisfies_recurrence(n in 1u32..=34) {
        prop_assert_eq!(factorial(n).unwrap(), u128::from(n) * factorial(n - 1).unwrap());
    }
}

// ============================================================================
// count_vowels / is_palindrome
// ============================================================================

proptest! {
    #[test]
    fn count_vowels_is_case_insensitive(s in "[a-zA-Z ]{0,64}") {
        prop_assert_eq!(count_vowels(&s), count_vowels(&s.to_uppercase()));
    }

    #[test]
    fn palindrome_holds_for_mirrored_input(s in "[a-z0-9]{0,32}") {
        let mirrored: String = s.chars().chain(s.chars().rev()).collect();
        prop_assert!(is_palindrome(&mirrored));
    }

    #[test]
    fn palindrome_ignores_interleaved_spacing(s in "[a-z]{1,16}") {
        let spaced: String = s.chars().flat_map(|ch| [ch, ' ']).collect();
        prop_assert_eq!(is_palindrome(&spaced), is_palindrome(&s));
    }
}
