//! Filter, sort, and pagination model for word queries
//!
//! Translates structured filters into a WHERE clause with positional
//! parameters. Column names are never taken from user text: sortable and
//! filterable columns are whitelisted through enums.

use rusqlite::types::Value;

/// Upper bound accepted for any value constraint
pub const VALUE_MAX: u32 = 999_999;

/// Default page size
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Largest allowed page size
pub const MAX_PER_PAGE: u32 = 500;

/// The six filterable/sortable value columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    VowelSum,
    VowelReduced,
    ConsonantSum,
    ConsonantReduced,
    TotalSum,
    TotalReduced,
}

impl ValueField {
    /// All fields in column order
    pub const ALL: [ValueField; 6] = [
        ValueField::VowelSum,
        ValueField::VowelReduced,
        ValueField::ConsonantSum,
        ValueField::ConsonantReduced,
        ValueField::TotalSum,
        ValueField::TotalReduced,
    ];

    /// SQL column name
    pub fn column(&self) -> &'static str {
        match self {
            ValueField::VowelSum => "vowel_sum",
            ValueField::VowelReduced => "vowel_reduced",
            ValueField::ConsonantSum => "consonant_sum",
            ValueField::ConsonantReduced => "consonant_reduced",
            ValueField::TotalSum => "total_sum",
            ValueField::TotalReduced => "total_reduced",
        }
    }

    fn index(&self) -> usize {
        ValueField::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Constraint on one value column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueConstraint {
    /// Column equals the value exactly
    Exact(u32),
    /// Column lies in the (half-open at either end) range
    Range { min: Option<u32>, max: Option<u32> },
}

/// Structured filter over the words table
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    /// Substring match on the word text (matched against the uppercase
    /// stored form)
    pub pattern: Option<String>,
    constraints: [Option<ValueConstraint>; 6],
}

impl WordFilter {
    /// Filter matching every row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the substring pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set a constraint on one value column, replacing any previous one
    pub fn with_value(mut self, field: ValueField, constraint: ValueConstraint) -> Self {
        self.constraints[field.index()] = Some(constraint);
        self
    }

    /// Constraint on one value column, if set
    pub fn value(&self, field: ValueField) -> Option<ValueConstraint> {
        self.constraints[field.index()]
    }

    /// Build the WHERE clause (including the leading ` WHERE `, empty if
    /// unconstrained) and its positional parameters.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut clauses: Vec<String> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(pattern) = &self.pattern {
            let pattern = psephos_core::normalize(pattern);
            if !pattern.is_empty() {
                clauses.push("word LIKE ? ESCAPE '\\'".to_string());
                params.push(Value::Text(format!("%{}%", escape_like(&pattern))));
            }
        }

        for field in ValueField::ALL {
            let Some(constraint) = self.value(field) else {
                continue;
            };
            match constraint {
                ValueConstraint::Exact(n) => {
                    clauses.push(format!("{} = ?", field.column()));
                    params.push(Value::Integer(i64::from(clamp_value(n))));
                }
                ValueConstraint::Range { min, max } => {
                    let min = min.map(clamp_value);
                    let mut max = max.map(clamp_value);

                    // An inverted range is repaired rather than rejected:
                    // the upper bound is bumped just past the lower one.
                    if let (Some(lo), Some(hi)) = (min, max) {
                        if hi <= lo {
                            max = Some((lo + 1).min(VALUE_MAX));
                        }
                    }

                    if let Some(lo) = min {
                        clauses.push(format!("{} >= ?", field.column()));
                        params.push(Value::Integer(i64::from(lo)));
                    }
                    if let Some(hi) = max {
                        clauses.push(format!("{} <= ?", field.column()));
                        params.push(Value::Integer(i64::from(hi)));
                    }
                }
            }
        }

        if clauses.is_empty() {
            (String::new(), params)
        } else {
            (format!(" WHERE {}", clauses.join(" AND ")), params)
        }
    }
}

/// Clamp a constraint value into [0, VALUE_MAX]
pub fn clamp_value(n: u32) -> u32 {
    n.min(VALUE_MAX)
}

/// Escape LIKE metacharacters so user input matches literally
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Word,
    Value(ValueField),
}

impl SortKey {
    /// SQL column name
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::Word => "word",
            SortKey::Value(field) => field.column(),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// SQL keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: u32,
    per_page: u32,
}

impl Page {
    /// Build a page, clamping out-of-range input: page >= 1, per_page in
    /// [1, MAX_PER_PAGE].
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Rows per page
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// OFFSET for the SQL query
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}
