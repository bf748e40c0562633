use std::fmt;

use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Column – the six listing columns the analyzer understands
// ---------------------------------------------------------------------------

/// A known column of a listing export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Brand,
    Price,
    Rank,
    Date,
    Id,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Title,
        Column::Brand,
        Column::Price,
        Column::Rank,
        Column::Date,
        Column::Id,
    ];

    /// Header name as it appears in marketplace exports.
    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Brand => "Brand",
            Column::Price => "Price",
            Column::Rank => "BSR",
            Column::Date => "Date",
            Column::Id => "ASIN",
        }
    }

    /// Match a source header (trimmed, ASCII case-insensitive).
    pub fn from_header(name: &str) -> Option<Column> {
        let name = name.trim();
        Column::ALL
            .into_iter()
            .find(|c| c.header().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// ---------------------------------------------------------------------------
// Columns – which columns the source file carried
// ---------------------------------------------------------------------------

/// Schema-level presence flags.
///
/// A column that is absent here disables every step that depends on it.
/// This is distinct from a single row lacking a value (`None` in [`Listing`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub title: bool,
    pub brand: bool,
    pub price: bool,
    pub rank: bool,
    pub date: bool,
    pub id: bool,
}

impl Columns {
    /// Every known column present.
    #[cfg(test)]
    pub fn all() -> Self {
        Columns {
            title: true,
            brand: true,
            price: true,
            rank: true,
            date: true,
            id: true,
        }
    }

    pub fn has(&self, column: Column) -> bool {
        match column {
            Column::Title => self.title,
            Column::Brand => self.brand,
            Column::Price => self.price,
            Column::Rank => self.rank,
            Column::Date => self.date,
            Column::Id => self.id,
        }
    }

    pub fn insert(&mut self, column: Column) {
        match column {
            Column::Title => self.title = true,
            Column::Brand => self.brand = true,
            Column::Price => self.price = true,
            Column::Rank => self.rank = true,
            Column::Date => self.date = true,
            Column::Id => self.id = true,
        }
    }

    /// Present columns, in display order.
    pub fn present(&self) -> Vec<Column> {
        Column::ALL.into_iter().filter(|c| self.has(*c)).collect()
    }
}

// ---------------------------------------------------------------------------
// Listing – one row of the export
// ---------------------------------------------------------------------------

/// A single marketplace listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    /// Best-sellers rank (BSR); lower is better.
    pub rank: Option<i64>,
    pub date: Option<NaiveDateTime>,
    /// Product identifier (ASIN).
    pub id: Option<String>,
}

// ---------------------------------------------------------------------------
// Listings – the loaded (or derived) row set
// ---------------------------------------------------------------------------

/// An ordered collection of listings together with the source schema.
///
/// Operations over `Listings` never mutate it; they return a new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listings {
    /// Rows in source-file order.
    pub rows: Vec<Listing>,
    pub columns: Columns,
}

impl Listings {
    pub fn new(rows: Vec<Listing>, columns: Columns) -> Self {
        Listings { rows, columns }
    }

    /// A new row set with the same schema.
    pub fn with_rows(&self, rows: Vec<Listing>) -> Self {
        Listings {
            rows,
            columns: self.columns,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.rows.iter()
    }
}
