//! Delete command
//!
//! Usage: psephos delete <ID> [--db PATH]

use clap::Args;
use psephos_store::WordRepo;
use std::path::PathBuf;

use super::{open_database, resolve_db_path};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the row to delete
    pub id: i64,

    /// Path to the SQLite database
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute delete
pub fn execute(args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_database(&resolve_db_path(args.db))?;

    if WordRepo::delete_word(&conn, args.id)? {
        println!("✓ Deleted word {}", args.id);
    } else {
        println!("No word with id {}", args.id);
    }

    Ok(())
}
