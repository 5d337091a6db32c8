//! Add command
//!
//! Usage: psephos add <TEXT>... [--db PATH]
//!
//! Splits the input into words, analyzes each, and upserts them into the
//! lexicon.

use clap::Args;
use psephos_core::split_words;
use psephos_store::WordRepo;
use std::path::PathBuf;

use super::{open_database, resolve_db_path};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Words to add (commas and whitespace both separate words)
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Path to the SQLite database
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute add
pub fn execute(args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let words = split_words(&args.text.join(" "));
    if words.is_empty() {
        return Err("No valid words found".into());
    }

    let conn = open_database(&resolve_db_path(args.db))?;

    let mut added = 0usize;
    for word in &words {
        let record = WordRepo::upsert_word(&conn, word)?;
        println!(
            "{:>6}  {}  v={}/{} c={}/{} t={}/{}",
            record.id,
            record.word,
            record.vowel_sum,
            record.vowel_reduced,
            record.consonant_sum,
            record.consonant_reduced,
            record.total_sum,
            record.total_reduced,
        );
        added += 1;
    }

    println!("✓ Added/updated {} words", added);
    Ok(())
}
