//! CLI subcommands

pub mod add;
pub mod analyze;
pub mod delete;
pub mod export;
pub mod import;
pub mod init;
pub mod list;

use clap::Args;
use psephos_store::query::{
    SortDirection, SortKey, ValueConstraint, ValueField, WordFilter,
};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Default database location, relative to the working directory
pub const DEFAULT_DB_PATH: &str = ".psephos/words.db";

/// Resolve the database path: `--db` flag, then `PSEPHOS_DB`, then the
/// default location.
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("PSEPHOS_DB").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
}

/// Open the database and bring the schema up to date
pub fn open_database(path: &Path) -> Result<Connection, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    tracing::debug!(path = %path.display(), "opening database");
    let mut conn = psephos_store::db::open(path)?;
    psephos_store::db::configure(&conn)?;
    psephos_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}

/// Filter flags shared by `list` and `export`
#[derive(Debug, Args, Default)]
pub struct FilterArgs {
    /// Substring to match in the word (case-insensitive)
    #[arg(long = "match")]
    pub pattern: Option<String>,

    /// Exact vowel sum
    #[arg(long)]
    pub vowel_sum: Option<u32>,
    /// Minimum vowel sum
    #[arg(long)]
    pub vowel_sum_min: Option<u32>,
    /// Maximum vowel sum
    #[arg(long)]
    pub vowel_sum_max: Option<u32>,

    /// Exact reduced vowel sum
    #[arg(long)]
    pub vowel_reduced: Option<u32>,
    /// Minimum reduced vowel sum
    #[arg(long)]
    pub vowel_reduced_min: Option<u32>,
    /// Maximum reduced vowel sum
    #[arg(long)]
    pub vowel_reduced_max: Option<u32>,

    /// Exact consonant sum
    #[arg(long)]
    pub consonant_sum: Option<u32>,
    /// Minimum consonant sum
    #[arg(long)]
    pub consonant_sum_min: Option<u32>,
    /// Maximum consonant sum
    #[arg(long)]
    pub consonant_sum_max: Option<u32>,

    /// Exact reduced consonant sum
    #[arg(long)]
    pub consonant_reduced: Option<u32>,
    /// Minimum reduced consonant sum
    #[arg(long)]
    pub consonant_reduced_min: Option<u32>,
    /// Maximum reduced consonant sum
    #[arg(long)]
    pub consonant_reduced_max: Option<u32>,

    /// Exact total sum
    #[arg(long)]
    pub total_sum: Option<u32>,
    /// Minimum total sum
    #[arg(long)]
    pub total_sum_min: Option<u32>,
    /// Maximum total sum
    #[arg(long)]
    pub total_sum_max: Option<u32>,

    /// Exact reduced total sum
    #[arg(long)]
    pub total_reduced: Option<u32>,
    /// Minimum reduced total sum
    #[arg(long)]
    pub total_reduced_min: Option<u32>,
    /// Maximum reduced total sum
    #[arg(long)]
    pub total_reduced_max: Option<u32>,
}

impl FilterArgs {
    /// Translate the flags into a store filter. An exact flag wins over
    /// min/max for the same column.
    pub fn to_filter(&self) -> WordFilter {
        let mut filter = WordFilter::new();
        if let Some(pattern) = &self.pattern {
            filter = filter.with_pattern(pattern.clone());
        }

        let columns: [(ValueField, Option<u32>, Option<u32>, Option<u32>); 6] = [
            (
                ValueField::VowelSum,
                self.vowel_sum,
                self.vowel_sum_min,
                self.vowel_sum_max,
            ),
            (
                ValueField::VowelReduced,
                self.vowel_reduced,
                self.vowel_reduced_min,
                self.vowel_reduced_max,
            ),
            (
                ValueField::ConsonantSum,
                self.consonant_sum,
                self.consonant_sum_min,
                self.consonant_sum_max,
            ),
            (
                ValueField::ConsonantReduced,
                self.consonant_reduced,
                self.consonant_reduced_min,
                self.consonant_reduced_max,
            ),
            (
                ValueField::TotalSum,
                self.total_sum,
                self.total_sum_min,
                self.total_sum_max,
            ),
            (
                ValueField::TotalReduced,
                self.total_reduced,
                self.total_reduced_min,
                self.total_reduced_max,
            ),
        ];

        for (field, exact, min, max) in columns {
            if let Some(n) = exact {
                filter = filter.with_value(field, ValueConstraint::Exact(n));
            } else if min.is_some() || max.is_some() {
                filter = filter.with_value(field, ValueConstraint::Range { min, max });
            }
        }

        filter
    }
}

/// Sortable columns, as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortArg {
    #[default]
    Word,
    VowelSum,
    VowelReduced,
    ConsonantSum,
    ConsonantReduced,
    TotalSum,
    TotalReduced,
}

impl SortArg {
    pub fn to_sort_key(self) -> SortKey {
        match self {
            SortArg::Word => SortKey::Word,
            SortArg::VowelSum => SortKey::Value(ValueField::VowelSum),
            SortArg::VowelReduced => SortKey::Value(ValueField::VowelReduced),
            SortArg::ConsonantSum => SortKey::Value(ValueField::ConsonantSum),
            SortArg::ConsonantReduced => SortKey::Value(ValueField::ConsonantReduced),
            SortArg::TotalSum => SortKey::Value(ValueField::TotalSum),
            SortArg::TotalReduced => SortKey::Value(ValueField::TotalReduced),
        }
    }
}

/// Map a `--desc` flag to a direction
pub fn direction_from_flag(desc: bool) -> SortDirection {
    if desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psephos_store::query::ValueConstraint;

    #[test]
    fn test_exact_wins_over_range() {
        let args = FilterArgs {
            total_sum: Some(9),
            total_sum_min: Some(1),
            total_sum_max: Some(20),
            ..Default::default()
        };
        let filter = args.to_filter();
        assert_eq!(
            filter.value(ValueField::TotalSum),
            Some(ValueConstraint::Exact(9))
        );
    }

    #[test]
    fn test_half_open_range() {
        let args = FilterArgs {
            vowel_sum_min: Some(4),
            ..Default::default()
        };
        let filter = args.to_filter();
        assert_eq!(
            filter.value(ValueField::VowelSum),
            Some(ValueConstraint::Range {
                min: Some(4),
                max: None
            })
        );
    }

    #[test]
    fn test_no_flags_builds_empty_filter() {
        let filter = FilterArgs::default().to_filter();
        let (sql, params) = filter.to_sql();
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }

    #[test]
    fn test_resolve_db_path_prefers_flag() {
        let path = resolve_db_path(Some(PathBuf::from("custom.db")));
        assert_eq!(path, PathBuf::from("custom.db"));
    }
}
