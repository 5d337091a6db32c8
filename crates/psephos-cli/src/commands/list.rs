//! List command
//!
//! Usage: psephos list [--db PATH] [filters] [--sort KEY] [--desc]
//!        [--page N] [--per-page N]

use clap::Args;
use psephos_store::query::Page;
use psephos_store::WordRepo;
use std::path::PathBuf;

use super::{direction_from_flag, open_database, resolve_db_path, FilterArgs, SortArg};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Path to the SQLite database
    #[arg(long)]
    pub db: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Sort column
    #[arg(long, value_enum, default_value = "word")]
    pub sort: SortArg,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page
    #[arg(long, default_value_t = 50)]
    pub per_page: u32,
}

/// Execute list
pub fn execute(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_database(&resolve_db_path(args.db))?;

    let filter = args.filter.to_filter();
    let page = Page::new(args.page, args.per_page);

    let total = WordRepo::count_words(&conn, &filter)?;
    let rows = WordRepo::list_words(
        &conn,
        &filter,
        args.sort.to_sort_key(),
        direction_from_flag(args.desc),
        page,
    )?;

    println!(
        "{:>6}  {:<20} {:>5} {:>4} {:>5} {:>4} {:>5} {:>4}",
        "ID", "WORD", "VOW", "VR", "CON", "CR", "TOT", "TR"
    );
    for row in &rows {
        println!(
            "{:>6}  {:<20} {:>5} {:>4} {:>5} {:>4} {:>5} {:>4}",
            row.id,
            row.word,
            row.vowel_sum,
            row.vowel_reduced,
            row.consonant_sum,
            row.consonant_reduced,
            row.total_sum,
            row.total_reduced,
        );
    }

    let pages = total.div_ceil(u64::from(page.per_page())).max(1);
    println!(
        "Page {}/{} ({} per page), {} words total",
        page.page(),
        pages,
        page.per_page(),
        total
    );

    Ok(())
}
