//! Psephos Core - Greek-letter numerology kernel
//!
//! This crate provides the pure computational core of psephos:
//! - Fixed letter-value tables for the Greek alphabet (vowel and consonant
//!   partitions)
//! - Category summation over a word
//! - Iterative digit reduction to a single digit
//! - Word analysis producing the six derived values
//! - Input normalization helpers for callers
//!
//! Everything here is deterministic, side-effect-free, and total over its
//! input domain: no error type is needed.

pub mod alphabet;
pub mod analysis;
pub mod normalize;
pub mod reduce;

// Re-export commonly used items
pub use alphabet::{consonant_value, letter_value, vowel_value};
pub use analysis::{analyze, consonant_sum, total_sum, vowel_sum, Analysis};
pub use normalize::{normalize, split_words};
pub use reduce::reduce;
