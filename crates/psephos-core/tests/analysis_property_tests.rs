//! Property tests for the numerology kernel

use psephos_core::{analyze, consonant_sum, normalize, reduce, total_sum, vowel_sum};
use proptest::prelude::*;

proptest! {
    #[test]
    fn reduce_result_is_single_digit(n in 0u32..=u32::MAX) {
        prop_assert!(reduce(n) < 10);
    }

    #[test]
    fn reduce_is_idempotent_on_own_output(n in 0u32..=u32::MAX) {
        let r = reduce(n);
        prop_assert_eq!(reduce(r), r);
    }

    #[test]
    fn reduce_matches_closed_form(n in 1u32..=u32::MAX) {
        prop_assert_eq!(reduce(n), 1 + (n - 1) % 9);
    }

    #[test]
    fn total_is_sum_of_partitions(s in ".{0,64}") {
        prop_assert_eq!(total_sum(&s), vowel_sum(&s) + consonant_sum(&s));
    }

    #[test]
    fn analysis_is_internally_consistent(s in "[Α-Ωα-ωA-Za-z0-9 ]{0,48}") {
        let a = analyze(&s);
        prop_assert_eq!(a.total_sum, a.vowel_sum + a.consonant_sum);
        prop_assert_eq!(a.vowel_reduced, reduce(a.vowel_sum));
        prop_assert_eq!(a.consonant_reduced, reduce(a.consonant_sum));
        prop_assert_eq!(a.total_reduced, reduce(a.total_sum));
    }

    #[test]
    fn non_greek_input_is_all_zero(s in "[A-Za-z0-9 .,!?-]{0,64}") {
        let a = analyze(&s);
        prop_assert_eq!(a.total_sum, 0);
        prop_assert_eq!(a.total_reduced, 0);
    }

    #[test]
    fn analyze_is_stable_under_normalize(s in "[Α-Ωα-ω]{0,32}") {
        // Normalizing an already-uppercase word changes nothing; and
        // normalize is idempotent.
        let n = normalize(&s);
        prop_assert_eq!(analyze(&normalize(&n)), analyze(&n));
    }
}
