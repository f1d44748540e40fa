//! Export module
//!
//! Serializes the catalog to CSV for spreadsheets or re-import.

pub mod csv;

pub use csv::{export_books_csv, export_books_to_file, CSV_HEADER};
