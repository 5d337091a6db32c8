//! Error handling for psephos-store

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error taxonomy for persistence operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite operation failed
    #[error("Persistence error in {op}: {message}")]
    Persistence { op: String, message: String },

    /// Migration failed to apply
    #[error("Migration {migration_id} failed: {reason}")]
    Migration {
        migration_id: String,
        reason: String,
    },

    /// Applied migration SQL no longer matches its recorded checksum
    #[error("Checksum mismatch for migration {migration_id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        migration_id: String,
        expected: String,
        actual: String,
    },

    /// Word normalizes to an empty string and cannot be stored
    #[error("Word is empty after normalization")]
    EmptyWord,

    /// Filesystem operation failed
    #[error("I/O error in {op}: {source}")]
    Io {
        op: String,
        #[source]
        source: std::io::Error,
    },
}

/// Create a persistence error from rusqlite::Error
pub fn from_rusqlite(op: &str) -> impl Fn(rusqlite::Error) -> StoreError + '_ {
    move |err| StoreError::Persistence {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create an I/O error
pub fn io_error(op: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        op: op.to_string(),
        source,
    }
}
