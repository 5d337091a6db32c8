//! CSV export command
//!
//! Usage: psephos export [--db PATH] [--output PATH] [filters]
//!
//! Writes CSV to stdout unless --output is given. Filters match the
//! `list` command.

use clap::Args;
use psephos_store::export::render_csv;
use psephos_store::WordRepo;
use std::path::PathBuf;

use super::{open_database, resolve_db_path, FilterArgs};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Path to the SQLite database
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Execute export
pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_database(&resolve_db_path(args.db))?;

    let rows = WordRepo::export_rows(&conn, &args.filter.to_filter())?;
    let csv = render_csv(&rows);

    match args.output {
        Some(path) => {
            std::fs::write(&path, csv)?;
            println!("✓ Exported {} words to {}", rows.len(), path.display());
        }
        None => {
            print!("{}", csv);
        }
    }

    Ok(())
}
