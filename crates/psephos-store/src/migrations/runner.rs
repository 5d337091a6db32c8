//! Migration runner
//!
//! Applies migrations with checksums and idempotency

use crate::errors::{from_rusqlite, Result, StoreError};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;
use rusqlite::{Connection, OptionalExtension};

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    // Create schema_version table if it doesn't exist
    create_schema_version_table(conn)?;

    // Apply each migration
    for migration in get_migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite("create_schema_version_table"))?;

    Ok(())
}

/// Apply a single migration if not already applied
///
/// A previously applied migration is verified against its recorded
/// checksum and otherwise skipped.
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let checksum = compute_checksum(sql);

    let recorded: Option<Option<String>> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite("apply_migration"))?;

    if let Some(recorded) = recorded {
        // Idempotent: already applied, but detect edited migration SQL
        if let Some(expected) = recorded {
            if expected != checksum {
                return Err(StoreError::ChecksumMismatch {
                    migration_id: migration_id.to_string(),
                    expected,
                    actual: checksum,
                });
            }
        }
        return Ok(());
    }

    let tx = conn
        .transaction()
        .map_err(from_rusqlite("apply_migration"))?;

    tx.execute_batch(sql).map_err(|e| StoreError::Migration {
        migration_id: migration_id.to_string(),
        reason: e.to_string(),
    })?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration_id, now, checksum],
    )
    .map_err(from_rusqlite("apply_migration"))?;

    tx.commit().map_err(from_rusqlite("apply_migration"))?;

    Ok(())
}
