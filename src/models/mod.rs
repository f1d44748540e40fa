//! Core data models
//!
//! Plain data holders mirroring the `livros` table. The store layer maps
//! SQLite rows into these types; every other layer only sees the structs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A persisted book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Primary key assigned by the store on insert. Never supplied by
    /// callers and never reused after removal.
    pub id: i64,
    /// Book title
    pub title: String,
    /// Author name, used for exact-match lookup
    pub author: String,
    /// Publication year, absent when unknown
    pub year: Option<i64>,
    /// Price, absent when unknown
    pub price: Option<f64>,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.author)
    }
}

/// Input for creating a book record. Identity is assigned by the store,
/// so there is no id field here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    /// Book title (required)
    pub title: String,
    /// Author name (required)
    pub author: String,
    /// Publication year (optional)
    pub year: Option<i64>,
    /// Price (optional)
    pub price: Option<f64>,
}

impl NewBook {
    /// Convenience constructor for fully populated records
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: Option<i64>,
        price: Option<f64>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_display() {
        let book = Book {
            id: 1,
            title: "Dune".into(),
            author: "Herbert".into(),
            year: Some(1965),
            price: Some(15.50),
        };
        assert_eq!(book.to_string(), "Dune - Herbert");
    }

    #[test]
    fn test_new_book_constructor() {
        let book = NewBook::new("Dune", "Herbert", Some(1965), Some(15.50));
        assert_eq!(book.title, "Dune");
        assert_eq!(book.year, Some(1965));
    }
}
