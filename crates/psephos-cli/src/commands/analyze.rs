//! Pure analysis command
//!
//! Usage: psephos analyze <WORD>...
//!
//! Computes the six values without touching the database.

use clap::Args;
use psephos_core::{analyze, split_words};

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Words to analyze (commas and whitespace both separate words)
    #[arg(required = true)]
    pub words: Vec<String>,
}

/// Execute analyze
pub fn execute(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let words = split_words(&args.words.join(" "));
    if words.is_empty() {
        return Err("No words to analyze".into());
    }

    for word in words {
        let a = analyze(&word);
        println!("{}", word);
        println!("  vowel_sum:         {:>6}  reduced: {}", a.vowel_sum, a.vowel_reduced);
        println!(
            "  consonant_sum:     {:>6}  reduced: {}",
            a.consonant_sum, a.consonant_reduced
        );
        println!("  total_sum:         {:>6}  reduced: {}", a.total_sum, a.total_reduced);
    }

    Ok(())
}
