//! Letter-value tables for the Greek alphabet
//!
//! Two disjoint partitions cover the 24 uppercase letters: 7 vowels and
//! 17 consonants, each assigned a fixed value in [1,9]. The tables are
//! process-wide constants expressed as match arms; no letter appears in
//! both partitions.

/// Value of an uppercase Greek vowel, or `None` for any other character.
pub fn vowel_value(c: char) -> Option<u32> {
    match c {
        'Α' => Some(1),
        'Ε' => Some(5),
        'Η' => Some(7),
        'Ι' => Some(9),
        'Ο' => Some(6),
        'Υ' => Some(2),
        'Ω' => Some(6),
        _ => None,
    }
}

/// Value of an uppercase Greek consonant, or `None` for any other character.
pub fn consonant_value(c: char) -> Option<u32> {
    match c {
        'Β' => Some(2),
        'Γ' => Some(3),
        'Δ' => Some(4),
        'Ζ' => Some(6),
        'Θ' => Some(8),
        'Κ' => Some(1),
        'Λ' => Some(2),
        'Μ' => Some(3),
        'Ν' => Some(4),
        'Ξ' => Some(5),
        'Π' => Some(7),
        'Ρ' => Some(8),
        'Σ' => Some(9),
        'Τ' => Some(1),
        'Φ' => Some(3),
        'Χ' => Some(4),
        'Ψ' => Some(5),
        _ => None,
    }
}

/// Value of any recognized uppercase Greek letter (union of both tables).
///
/// Unrecognized characters - non-Greek letters, digits, punctuation,
/// lowercase - yield `None`. Case folding is the caller's responsibility;
/// see [`crate::normalize::normalize`].
pub fn letter_value(c: char) -> Option<u32> {
    vowel_value(c).or_else(|| consonant_value(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOWELS: [char; 7] = ['Α', 'Ε', 'Η', 'Ι', 'Ο', 'Υ', 'Ω'];
    const CONSONANTS: [char; 17] = [
        'Β', 'Γ', 'Δ', 'Ζ', 'Θ', 'Κ', 'Λ', 'Μ', 'Ν', 'Ξ', 'Π', 'Ρ', 'Σ', 'Τ', 'Φ', 'Χ', 'Ψ',
    ];

    #[test]
    fn test_partitions_are_disjoint() {
        for c in VOWELS {
            assert!(consonant_value(c).is_none(), "{} is in both tables", c);
        }
        for c in CONSONANTS {
            assert!(vowel_value(c).is_none(), "{} is in both tables", c);
        }
    }

    #[test]
    fn test_all_letters_covered() {
        assert_eq!(VOWELS.len() + CONSONANTS.len(), 24);
        for c in VOWELS.iter().chain(CONSONANTS.iter()) {
            let v = letter_value(*c).unwrap();
            assert!((1..=9).contains(&v), "{} has value {} out of range", c, v);
        }
    }

    #[test]
    fn test_union_matches_partition() {
        assert_eq!(letter_value('Α'), Some(1));
        assert_eq!(letter_value('Β'), Some(2));
        assert_eq!(letter_value('Ω'), Some(6));
        assert_eq!(letter_value('Σ'), Some(9));
    }

    #[test]
    fn test_unrecognized_characters() {
        for c in ['A', 'z', '3', '-', ' ', 'α', 'ω', 'ά'] {
            assert_eq!(letter_value(c), None, "{} should not be recognized", c);
        }
    }
}
