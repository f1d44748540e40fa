//! Import module
//!
//! Reads CSV files in the export format back into the store.

pub mod csv;

pub use csv::import_books_csv;
