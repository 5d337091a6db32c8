//! Dataset import command
//!
//! Usage: psephos import <PATH> [--db PATH]

use clap::Args;
use std::path::PathBuf;

use super::{open_database, resolve_db_path};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to a UTF-8 tab-separated dataset file (first column: word)
    pub path: PathBuf,

    /// Path to the SQLite database
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute import
pub fn execute(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_database(&resolve_db_path(args.db))?;

    println!("Importing {}...", args.path.display());
    let imported = psephos_store::import::import_dataset(&mut conn, &args.path)?;
    println!("✓ Imported/updated {} words", imported);

    Ok(())
}
