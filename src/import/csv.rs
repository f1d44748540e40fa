//! CSV import functionality
//!
//! Reads a comma-delimited file in the export format back into the store.
//! The header row is skipped, the id column is ignored (the store assigns
//! fresh identities), and year/price are coerced from text. A malformed
//! numeric field or a row with missing columns aborts the import with a
//! format error; rows inserted
//! before it stay in the store, and no backup is taken for the aborted run.

use std::path::Path;

use csv::StringRecord;

use crate::error::{LivrariaError, LivrariaResult};
use crate::models::NewBook;
use crate::store::BookStore;

/// Import every data row of the CSV at `path` into the store
///
/// Rows are parsed and inserted one at a time; the whole successful batch
/// triggers a single backup inside [`BookStore::import`]. Returns the
/// number of records imported.
pub fn import_books_csv(store: &BookStore, path: &Path) -> LivrariaResult<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| LivrariaError::Io(format!("Failed to open CSV file: {}", e)))?;

    let rows = reader
        .records()
        .enumerate()
        .map(|(idx, record)| parse_record(idx + 1, record));

    store.import(rows)
}

/// Parse one data row into a NewBook
///
/// `row` is 1-based over data rows (the header does not count). Column
/// layout matches [`crate::export::CSV_HEADER`]; column 0 holds the old id
/// and is deliberately ignored.
fn parse_record(
    row: usize,
    record: Result<StringRecord, csv::Error>,
) -> LivrariaResult<NewBook> {
    let record =
        record.map_err(|e| LivrariaError::format(row, format!("unreadable record: {}", e)))?;

    let title = field(&record, row, 1, "title")?;
    let author = field(&record, row, 2, "author")?;
    let year = parse_optional_int(&record, row, 3, "year")?;
    let price = parse_optional_float(&record, row, 4, "price")?;

    Ok(NewBook::new(title, author, year, price))
}

/// Fetch a required text column
fn field<'r>(
    record: &'r StringRecord,
    row: usize,
    index: usize,
    name: &str,
) -> LivrariaResult<&'r str> {
    record
        .get(index)
        .ok_or_else(|| LivrariaError::format(row, format!("missing {} column", name)))
}

/// Coerce the year column. The column must be present; an empty field
/// means absent, anything else must be an integer.
fn parse_optional_int(
    record: &StringRecord,
    row: usize,
    index: usize,
    name: &str,
) -> LivrariaResult<Option<i64>> {
    match field(record, row, index, name)?.trim() {
        "" => Ok(None),
        text => text
            .parse::<i64>()
            .map(Some)
            .map_err(|_| LivrariaError::format(row, format!("invalid {}: '{}'", name, text))),
    }
}

/// Coerce the price column. The column must be present; an empty field
/// means absent, anything else must be a number.
fn parse_optional_float(
    record: &StringRecord,
    row: usize,
    index: usize,
    name: &str,
) -> LivrariaResult<Option<f64>> {
    match field(record, row, index, name)?.trim() {
        "" => Ok(None),
        text => text
            .parse::<f64>()
            .map(Some)
            .map_err(|_| LivrariaError::format(row, format!("invalid {}: '{}'", name, text))),
    }
}
