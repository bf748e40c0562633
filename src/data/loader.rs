use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::coerce;
use super::model::{Column, Columns, Listing, Listings};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a listing export from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with some subset of `Title, Brand, Price, BSR, Date, ASIN`
/// * `.json`    – `[{ "Title": "...", "BSR": 1234, ... }, ...]`
/// * `.parquet` – the same column names, any scalar column types
///
/// Unknown columns are ignored. Cells that cannot be interpreted are loaded
/// as missing values; only structural problems fail the load.
pub fn load_file(path: &Path) -> Result<Listings> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// Row assembly shared by all formats
// ---------------------------------------------------------------------------

/// Builds one [`Listing`] cell by cell and tallies cells that had content
/// but could not be coerced.
#[derive(Default)]
struct RowBuilder {
    coerced: usize,
}

impl RowBuilder {
    fn set(&mut self, listing: &mut Listing, column: Column, raw: &str) {
        let blank = raw.trim().is_empty();
        let ok = match column {
            Column::Title => {
                listing.title = coerce::text(raw);
                true
            }
            Column::Brand => {
                listing.brand = coerce::text(raw);
                true
            }
            Column::Id => {
                listing.id = coerce::text(raw);
                true
            }
            Column::Price => {
                listing.price = coerce::price(raw);
                listing.price.is_some()
            }
            Column::Rank => {
                listing.rank = coerce::rank(raw);
                listing.rank.is_some()
            }
            Column::Date => {
                listing.date = coerce::date(raw);
                listing.date.is_some()
            }
        };
        if !ok && !blank {
            self.coerced += 1;
        }
    }

    fn finish(self, source: &str, listings: &Listings) {
        if self.coerced > 0 {
            log::warn!(
                "{source}: {} cell(s) could not be parsed and were treated as missing",
                self.coerced
            );
        }
        log::info!(
            "Loaded {} listings from {source} with columns {:?}",
            listings.len(),
            listings.columns.present()
        );
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Listings> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    read_csv(file)
}

/// Parse CSV listing data from any reader.
///
/// Rows may have fewer or more fields than the header; missing trailing
/// fields are treated as empty cells.
pub fn read_csv<R: Read>(input: R) -> Result<Listings> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers().context("reading CSV headers")?.clone();

    // Map source column index → known column. First occurrence wins.
    let mut columns = Columns::default();
    let mut mapping: Vec<(usize, Column)> = Vec::new();
    for (idx, name) in headers.iter().enumerate() {
        if let Some(col) = Column::from_header(name) {
            if !columns.has(col) {
                columns.insert(col);
                mapping.push((idx, col));
            }
        }
    }

    let mut builder = RowBuilder::default();
    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut listing = Listing::default();
        for &(idx, col) in &mapping {
            builder.set(&mut listing, col, record.get(idx).unwrap_or(""));
        }
        rows.push(listing);
    }

    let listings = Listings::new(rows, columns);
    builder.finish("CSV", &listings);
    Ok(listings)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Listings> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Expected JSON schema (records-oriented, e.g. `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Title": "Funny Cat Tee", "Brand": "Acme", "Price": 19.99, "BSR": 1234 },
///   ...
/// ]
/// ```
pub fn parse_json(text: &str) -> Result<Listings> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = root.as_array().ok_or(LoadError::JsonNotArray)?;

    let mut columns = Columns::default();
    let mut builder = RowBuilder::default();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec.as_object().ok_or(LoadError::JsonNotObject(i))?;

        // Keys that differ only in case map to one column; first wins.
        let mut seen = Columns::default();
        let mut listing = Listing::default();
        for (key, val) in obj {
            let Some(col) = Column::from_header(key) else {
                continue;
            };
            if seen.has(col) {
                continue;
            }
            seen.insert(col);
            columns.insert(col);
            builder.set(&mut listing, col, &json_to_text(val));
        }
        rows.push(listing);
    }

    let listings = Listings::new(rows, columns);
    builder.finish("JSON", &listings);
    Ok(listings)
}

fn json_to_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of listings.
///
/// Each known column is cast to UTF-8 by Arrow and then goes through the
/// same cell coercion as CSV, so integer, float, string, date and
/// timestamp columns are all accepted.
fn load_parquet(path: &Path) -> Result<Listings> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;

    // Column presence comes from the file schema, so an empty file still
    // reports its columns. First occurrence of a column wins.
    let mut columns = Columns::default();
    let mut mapping: Vec<(usize, Column)> = Vec::new();
    for (idx, field) in builder.schema().fields().iter().enumerate() {
        if let Some(col) = Column::from_header(field.name()) {
            if !columns.has(col) {
                columns.insert(col);
                mapping.push((idx, col));
            }
        }
    }

    let reader = builder.build().context("building parquet reader")?;
    let mut row_builder = RowBuilder::default();
    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let mut known: Vec<(Column, ArrayRef)> = Vec::with_capacity(mapping.len());
        for &(idx, col) in &mapping {
            let as_text = cast(batch.column(idx), &DataType::Utf8)
                .with_context(|| format!("converting parquet column '{}'", col.header()))?;
            known.push((col, as_text));
        }

        for row in 0..batch.num_rows() {
            let mut listing = Listing::default();
            for (col, array) in &known {
                let strings = array.as_string::<i32>();
                let raw = if strings.is_null(row) {
                    ""
                } else {
                    strings.value(row)
                };
                row_builder.set(&mut listing, *col, raw);
            }
            rows.push(listing);
        }
    }

    let listings = Listings::new(rows, columns);
    row_builder.finish("parquet", &listings);
    Ok(listings)
}
