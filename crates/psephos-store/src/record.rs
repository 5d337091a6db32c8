//! Persisted word record

use psephos_core::Analysis;
use serde::Serialize;

/// A raw row from the `words` table.
///
/// The six value columns are derived from `word` by the core on every
/// write path; they are never accepted from callers, so a stored row can
/// not diverge from what [`psephos_core::analyze`] would produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    /// Rowid, stable for the lifetime of the row
    pub id: i64,
    /// The word text, stored uppercase
    pub word: String,
    pub vowel_sum: u32,
    pub vowel_reduced: u32,
    pub consonant_sum: u32,
    pub consonant_reduced: u32,
    pub total_sum: u32,
    pub total_reduced: u32,
    /// Creation timestamp, seconds since epoch
    pub created_at: i64,
}

impl WordRecord {
    /// The six derived values as a core [`Analysis`].
    pub fn analysis(&self) -> Analysis {
        Analysis {
            vowel_sum: self.vowel_sum,
            vowel_reduced: self.vowel_reduced,
            consonant_sum: self.consonant_sum,
            consonant_reduced: self.consonant_reduced,
            total_sum: self.total_sum,
            total_reduced: self.total_reduced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psephos_core::analyze;

    #[test]
    fn test_serializes_with_column_names() {
        let a = analyze("ΑΒ");
        let record = WordRecord {
            id: 7,
            word: "ΑΒ".to_string(),
            vowel_sum: a.vowel_sum,
            vowel_reduced: a.vowel_reduced,
            consonant_sum: a.consonant_sum,
            consonant_reduced: a.consonant_reduced,
            total_sum: a.total_sum,
            total_reduced: a.total_reduced,
            created_at: 0,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["word"], "ΑΒ");
        assert_eq!(json["total_sum"], 3);
    }

    #[test]
    fn test_analysis_round_trip() {
        let a = analyze("ΚΑΛΗ");
        let record = WordRecord {
            id: 1,
            word: "ΚΑΛΗ".to_string(),
            vowel_sum: a.vowel_sum,
            vowel_reduced: a.vowel_reduced,
            consonant_sum: a.consonant_sum,
            consonant_reduced: a.consonant_reduced,
            total_sum: a.total_sum,
            total_reduced: a.total_reduced,
            created_at: 0,
        };
        assert_eq!(record.analysis(), a);
    }
}
