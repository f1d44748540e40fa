//! Book CLI command handlers
//!
//! Bridges clap argument parsing with the record store. These functions
//! only dispatch and print; the store owns all the behavior.

use std::path::PathBuf;

use crate::config::paths::LivrariaPaths;
use crate::display::{format_book_details, format_book_list};
use crate::error::LivrariaResult;
use crate::export::export_books_to_file;
use crate::import::import_books_csv;
use crate::models::NewBook;
use crate::store::BookStore;

/// Handle the `add` command
pub fn handle_add(
    store: &BookStore,
    title: String,
    author: String,
    year: Option<i64>,
    price: Option<f64>,
) -> LivrariaResult<()> {
    let book = NewBook::new(title, author, year, price);
    let id = store.add(&book)?;
    println!("Added book #{}: {}", id, book.title);
    Ok(())
}

/// Handle the `list` command
pub fn handle_list(store: &BookStore) -> LivrariaResult<()> {
    let books = store.list_all()?;
    print!("{}", format_book_list(&books));
    Ok(())
}

/// Handle the `show` command
pub fn handle_show(store: &BookStore, id: i64) -> LivrariaResult<()> {
    match store.get(id)? {
        Some(book) => print!("{}", format_book_details(&book)),
        None => println!("No book with id {}.", id),
    }
    Ok(())
}

/// Handle the `update-price` command
pub fn handle_update_price(store: &BookStore, id: i64, price: f64) -> LivrariaResult<()> {
    let updated = store.update_price(id, price)?;
    if updated == 0 {
        println!("No book with id {}; nothing changed.", id);
    } else {
        println!("Updated price of book #{} to {:.2}.", id, price);
    }
    Ok(())
}

/// Handle the `remove` command
pub fn handle_remove(store: &BookStore, id: i64) -> LivrariaResult<()> {
    let removed = store.remove(id)?;
    if removed == 0 {
        println!("No book with id {}; nothing removed.", id);
    } else {
        println!("Removed book #{}.", id);
    }
    Ok(())
}

/// Handle the `find` command (exact author match)
pub fn handle_find(store: &BookStore, author: &str) -> LivrariaResult<()> {
    let books = store.find_by_author(author)?;
    print!("{}", format_book_list(&books));
    Ok(())
}

/// Handle the `export` command
pub fn handle_export(
    store: &BookStore,
    paths: &LivrariaPaths,
    output: Option<PathBuf>,
) -> LivrariaResult<()> {
    let target = output.unwrap_or_else(|| paths.default_export_file());
    let count = export_books_to_file(store, &target)?;
    println!("Exported {} book(s) to {}", count, target.display());
    Ok(())
}

/// Handle the `import` command
pub fn handle_import(store: &BookStore, file: &PathBuf) -> LivrariaResult<()> {
    let imported = import_books_csv(store, file)?;
    println!("Imported {} book(s) from {}", imported, file.display());
    Ok(())
}
