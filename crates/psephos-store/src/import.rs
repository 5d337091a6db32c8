//! Dataset importer
//!
//! Imports a UTF-8 tab-separated dataset file: the first column of each
//! line is the word, remaining columns are ignored. Rows are upserted in
//! batches, one transaction per batch, so re-importing the same dataset
//! is idempotent.

use crate::errors::{from_rusqlite, io_error, Result};
use crate::repo::WordRepo;
use psephos_core::normalize;
use rusqlite::Connection;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Rows written per transaction
const BATCH_SIZE: usize = 2000;

/// Import a dataset file into the database.
///
/// Blank lines and lines whose first column is empty are skipped.
/// Returns the number of rows written.
pub fn import_dataset(conn: &mut Connection, path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|e| io_error("import_dataset", e))?;
    let reader = BufReader::new(file);

    let mut imported = 0usize;
    let mut batch: Vec<String> = Vec::with_capacity(BATCH_SIZE);

    for line in reader.lines() {
        let line = line.map_err(|e| io_error("import_dataset", e))?;
        let word = normalize(line.split('\t').next().unwrap_or(""));
        if word.is_empty() {
            continue;
        }
        batch.push(word);

        if batch.len() >= BATCH_SIZE {
            imported += flush_batch(conn, &batch)?;
            info!(rows = imported, "import batch committed");
            batch.clear();
        }
    }

    if !batch.is_empty() {
        imported += flush_batch(conn, &batch)?;
    }

    info!(rows = imported, path = %path.display(), "dataset import complete");
    Ok(imported)
}

fn flush_batch(conn: &mut Connection, batch: &[String]) -> Result<usize> {
    let tx = conn.transaction().map_err(from_rusqlite("import_dataset"))?;
    for word in batch {
        WordRepo::upsert_word_tx(&tx, word)?;
    }
    tx.commit().map_err(from_rusqlite("import_dataset"))?;
    Ok(batch.len())
}
