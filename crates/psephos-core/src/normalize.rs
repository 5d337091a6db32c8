//! Caller-side input normalization
//!
//! The lookup tables hold uppercase unaccented Greek only; these helpers
//! bring raw user input into that domain. Accented forms are left as-is
//! and therefore skipped by the tables - they are not folded to their
//! base letter.

/// Trim surrounding whitespace and uppercase the word.
///
/// Uses Unicode case mapping, so lowercase Greek (α..ω, including final
/// sigma ς) reaches the uppercase tables.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Split free text into normalized words.
///
/// Commas are treated as separators alongside whitespace; empty pieces
/// are dropped. This is the multi-word entry path: "καλη, ΑΒ" yields
/// ["ΚΑΛΗ", "ΑΒ"].
pub fn split_words(text: &str) -> Vec<String> {
    text.replace(',', " ")
        .split_whitespace()
        .map(normalize)
        .filter(|w| !w.is_empty())
        .collect()
}
