//! Database initialization command
//!
//! Usage: psephos init [--db PATH] [--force]

use clap::Args;
use std::path::PathBuf;

use super::{open_database, resolve_db_path};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Path to the SQLite database
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Delete an existing database file before creating the schema
    #[arg(long)]
    pub force: bool,
}

/// Execute init
pub fn execute(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = resolve_db_path(args.db);

    if args.force && path.exists() {
        std::fs::remove_file(&path)?;
        println!("Removed existing database at {}", path.display());
    }

    let conn = open_database(&path)?;
    drop(conn);

    println!("✓ Database ready: {}", path.display());
    Ok(())
}
