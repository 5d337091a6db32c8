//! Word repository
//!
//! Persists analyzed words to SQLite. Every write path normalizes the
//! word and recomputes the six derived values through the core, so the
//! stored values can never diverge from the analysis of the word text.

use crate::errors::{from_rusqlite, Result, StoreError};
use crate::query::{Page, SortDirection, SortKey, WordFilter};
use crate::record::WordRecord;
use psephos_core::{analyze, normalize};
use rusqlite::{Connection, OptionalExtension, Transaction};
use tracing::debug;

const UPSERT_SQL: &str = "INSERT INTO words \
     (word, vowel_sum, vowel_reduced, consonant_sum, consonant_reduced, total_sum, total_reduced, created_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
     ON CONFLICT(word) DO UPDATE SET \
        vowel_sum = excluded.vowel_sum, \
        vowel_reduced = excluded.vowel_reduced, \
        consonant_sum = excluded.consonant_sum, \
        consonant_reduced = excluded.consonant_reduced, \
        total_sum = excluded.total_sum, \
        total_reduced = excluded.total_reduced";

const SELECT_COLUMNS: &str =
    "id, word, vowel_sum, vowel_reduced, consonant_sum, consonant_reduced, \
     total_sum, total_reduced, created_at";

/// SQLite repository for word records
pub struct WordRepo;

impl WordRepo {
    /// Insert or refresh a word.
    ///
    /// The raw input is normalized and analyzed; an existing row for the
    /// same word keeps its id and created_at but has its values
    /// refreshed. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `EmptyWord` if the input normalizes to an empty string.
    pub fn upsert_word(conn: &Connection, raw: &str) -> Result<WordRecord> {
        let word = Self::execute_upsert(conn, raw)?;

        Self::find_by_text(conn, &word)?.ok_or_else(|| StoreError::Persistence {
            op: "upsert_word".to_string(),
            message: format!("row for '{}' missing after upsert", word),
        })
    }

    /// Insert or refresh a word inside a batch transaction.
    ///
    /// Same semantics as [`WordRepo::upsert_word`] but skips reading the
    /// row back, for high-volume import paths.
    pub fn upsert_word_tx(tx: &Transaction, raw: &str) -> Result<()> {
        Self::execute_upsert(tx, raw)?;
        Ok(())
    }

    fn execute_upsert(conn: &Connection, raw: &str) -> Result<String> {
        let word = normalize(raw);
        if word.is_empty() {
            return Err(StoreError::EmptyWord);
        }

        let values = analyze(&word);
        let now = chrono::Utc::now().timestamp();
        conn.execute(
            UPSERT_SQL,
            rusqlite::params![
                word,
                values.vowel_sum,
                values.vowel_reduced,
                values.consonant_sum,
                values.consonant_reduced,
                values.total_sum,
                values.total_reduced,
                now,
            ],
        )
        .map_err(from_rusqlite("upsert_word"))?;

        debug!(word = %word, total_sum = values.total_sum, "upserted word");
        Ok(word)
    }

    /// Get a word record by id
    pub fn get_word(conn: &Connection, id: i64) -> Result<Option<WordRecord>> {
        conn.query_row(
            &format!("SELECT {} FROM words WHERE id = ?1", SELECT_COLUMNS),
            [id],
            row_to_record,
        )
        .optional()
        .map_err(from_rusqlite("get_word"))
    }

    /// Find a word record by its text (normalized before lookup)
    pub fn find_by_text(conn: &Connection, word: &str) -> Result<Option<WordRecord>> {
        conn.query_row(
            &format!("SELECT {} FROM words WHERE word = ?1", SELECT_COLUMNS),
            [normalize(word)],
            row_to_record,
        )
        .optional()
        .map_err(from_rusqlite("find_by_text"))
    }

    /// Delete a word by id. Returns true if a row existed.
    pub fn delete_word(conn: &Connection, id: i64) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM words WHERE id = ?1", [id])
            .map_err(from_rusqlite("delete_word"))?;
        Ok(affected > 0)
    }

    /// Count rows matching the filter
    pub fn count_words(conn: &Connection, filter: &WordFilter) -> Result<u64> {
        let (where_sql, params) = filter.to_sql();
        let count: i64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM words{}", where_sql),
                rusqlite::params_from_iter(params),
                |row| row.get(0),
            )
            .map_err(from_rusqlite("count_words"))?;
        Ok(count as u64)
    }

    /// List one page of rows matching the filter, in the given order
    pub fn list_words(
        conn: &Connection,
        filter: &WordFilter,
        sort: SortKey,
        direction: SortDirection,
        page: Page,
    ) -> Result<Vec<WordRecord>> {
        let (where_sql, mut params) = filter.to_sql();
        let sql = format!(
            "SELECT {} FROM words{} ORDER BY {} {} LIMIT ? OFFSET ?",
            SELECT_COLUMNS,
            where_sql,
            sort.column(),
            direction.keyword(),
        );
        params.push(rusqlite::types::Value::Integer(i64::from(page.per_page())));
        params.push(rusqlite::types::Value::Integer(page.offset() as i64));

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite("list_words"))?;
        let rows: std::result::Result<Vec<_>, _> = stmt
            .query_map(rusqlite::params_from_iter(params), row_to_record)
            .map_err(from_rusqlite("list_words"))?
            .collect();
        rows.map_err(from_rusqlite("list_words"))
    }

    /// All rows matching the filter, word ascending, for export
    pub fn export_rows(conn: &Connection, filter: &WordFilter) -> Result<Vec<WordRecord>> {
        let (where_sql, params) = filter.to_sql();
        let sql = format!(
            "SELECT {} FROM words{} ORDER BY word ASC",
            SELECT_COLUMNS, where_sql,
        );

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite("export_rows"))?;
        let rows: std::result::Result<Vec<_>, _> = stmt
            .query_map(rusqlite::params_from_iter(params), row_to_record)
            .map_err(from_rusqlite("export_rows"))?
            .collect();
        rows.map_err(from_rusqlite("export_rows"))
    }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<WordRecord> {
    Ok(WordRecord {
        id: row.get(0)?,
        word: row.get(1)?,
        vowel_sum: row.get(2)?,
        vowel_reduced: row.get(3)?,
        consonant_sum: row.get(4)?,
        consonant_reduced: row.get(5)?,
        total_sum: row.get(6)?,
        total_reduced: row.get(7)?,
        created_at: row.get(8)?,
    })
}
