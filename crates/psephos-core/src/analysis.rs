//! Word analysis
//!
//! Category summation over the letter-value tables and the six-value
//! analysis derived from a word: per-category sums, the overall sum, and
//! their single-digit reductions.

use serde::{Deserialize, Serialize};

use crate::alphabet::{consonant_value, letter_value, vowel_value};
use crate::reduce::reduce;

/// The six derived values for a word.
///
/// `total_sum == vowel_sum + consonant_sum` holds for every input because
/// the vowel and consonant tables are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Sum of vowel-table values over the word
    pub vowel_sum: u32,
    /// `vowel_sum` reduced to a single digit
    pub vowel_reduced: u32,
    /// Sum of consonant-table values over the word
    pub consonant_sum: u32,
    /// `consonant_sum` reduced to a single digit
    pub consonant_reduced: u32,
    /// Sum over the union table
    pub total_sum: u32,
    /// `total_sum` reduced to a single digit
    pub total_reduced: u32,
}

/// Sum of vowel-table values over all characters of `word`.
///
/// Characters absent from the table contribute zero. An empty word, or a
/// word with no recognized letters, yields 0.
pub fn vowel_sum(word: &str) -> u32 {
    word.chars().filter_map(vowel_value).sum()
}

/// Sum of consonant-table values over all characters of `word`.
pub fn consonant_sum(word: &str) -> u32 {
    word.chars().filter_map(consonant_value).sum()
}

/// Sum over the union of both tables.
pub fn total_sum(word: &str) -> u32 {
    word.chars().filter_map(letter_value).sum()
}

/// Compute the six derived values for `word`.
///
/// Total over its input domain: any string, including empty or
/// all-unrecognized input, produces an all-zero analysis. The word is
/// looked up as-is; callers fold case first (see
/// [`crate::normalize::normalize`]).
pub fn analyze(word: &str) -> Analysis {
    let vowels = vowel_sum(word);
    let consonants = consonant_sum(word);
    let total = total_sum(word);
    Analysis {
        vowel_sum: vowels,
        vowel_reduced: reduce(vowels),
        consonant_sum: consonants,
        consonant_reduced: reduce(consonants),
        total_sum: total,
        total_reduced: reduce(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_beta() {
        // Α=1 (vowel), Β=2 (consonant); all sums single-digit already
        let a = analyze("ΑΒ");
        assert_eq!(a.vowel_sum, 1);
        assert_eq!(a.vowel_reduced, 1);
        assert_eq!(a.consonant_sum, 2);
        assert_eq!(a.consonant_reduced, 2);
        assert_eq!(a.total_sum, 3);
        assert_eq!(a.total_reduced, 3);
    }

    #[test]
    fn test_kali() {
        // Κ=1, Α=1, Λ=2, Η=7
        let a = analyze("ΚΑΛΗ");
        assert_eq!(a.vowel_sum, 8);
        assert_eq!(a.consonant_sum, 3);
        assert_eq!(a.total_sum, 11);
        assert_eq!(a.total_reduced, 2);
    }

    #[test]
    fn test_empty_word_is_all_zero() {
        let a = analyze("");
        assert_eq!(a, analyze("xyz 123 !?"));
        assert_eq!(a.vowel_sum, 0);
        assert_eq!(a.consonant_sum, 0);
        assert_eq!(a.total_sum, 0);
        assert_eq!(a.total_reduced, 0);
    }

    #[test]
    fn test_vowel_contributes_only_to_vowel_and_total() {
        let a = analyze("Ω");
        assert_eq!(a.vowel_sum, 6);
        assert_eq!(a.consonant_sum, 0);
        assert_eq!(a.total_sum, 6);
    }

    #[test]
    fn test_unrecognized_characters_are_skipped() {
        // Latin letters, digits, punctuation and lowercase Greek all
        // contribute zero without affecting the recognized letters.
        assert_eq!(analyze("Κ-Α.Λ9Η abc"), analyze("ΚΑΛΗ"));
    }

    #[test]
    fn test_serialization_field_names() {
        let json = serde_json::to_value(analyze("ΑΒ")).unwrap();
        assert_eq!(json["vowel_sum"], 1);
        assert_eq!(json["total_reduced"], 3);
    }
}
