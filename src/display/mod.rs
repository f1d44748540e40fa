//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod book;

pub use book::{format_book_details, format_book_list};
