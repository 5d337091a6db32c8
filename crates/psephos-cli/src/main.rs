//! Psephos CLI
//!
//! Command-line interface for the Greek-letter numerology lexicon

use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Debug, Parser)]
#[command(name = "psephos")]
#[command(about = "Psephos - Greek-letter numerology lexicon", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create or refresh the database schema
    Init(commands::init::InitArgs),
    /// Analyze words without touching the database
    Analyze(commands::analyze::AnalyzeArgs),
    /// Add words to the lexicon
    Add(commands::add::AddArgs),
    /// List lexicon entries with filters, sorting, and pagination
    List(commands::list::ListArgs),
    /// Delete a lexicon entry by id
    Delete(commands::delete::DeleteArgs),
    /// Import a tab-separated dataset file
    Import(commands::import::ImportArgs),
    /// Export filtered entries as CSV
    Export(commands::export::ExportArgs),
}

fn main() {
    logging::init(logging::profile_from_env());

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Analyze(args) => commands::analyze::execute(args),
        Commands::Add(args) => commands::add::execute(args),
        Commands::List(args) => commands::list::execute(args),
        Commands::Delete(args) => commands::delete::execute(args),
        Commands::Import(args) => commands::import::execute(args),
        Commands::Export(args) => commands::export::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
