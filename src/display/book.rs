//! Book display formatting
//!
//! Formats book records for terminal output in table and detail views.

use crate::models::Book;

/// Format a list of books as a table
pub fn format_book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.".to_string();
    }

    // Calculate column widths
    let title_width = books
        .iter()
        .map(|b| b.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let author_width = books
        .iter()
        .map(|b| b.author.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<title_width$}  {:<author_width$}  {:>6}  {:>10}\n",
        "ID",
        "Title",
        "Author",
        "Year",
        "Price",
        title_width = title_width,
        author_width = author_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:->4}  {:-<title_width$}  {:-<author_width$}  {:->6}  {:->10}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
        author_width = author_width,
    ));

    // Book rows
    for book in books {
        let year = book.year.map(|y| y.to_string()).unwrap_or_default();
        let price = book.price.map(|p| format!("{:.2}", p)).unwrap_or_default();

        output.push_str(&format!(
            "{:>4}  {:<title_width$}  {:<author_width$}  {:>6}  {:>10}\n",
            book.id,
            book.title,
            book.author,
            year,
            price,
            title_width = title_width,
            author_width = author_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} book(s)\n", books.len()));

    output
}

/// Format a single book as a detail block
pub fn format_book_details(book: &Book) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:     {}\n", book.id));
    output.push_str(&format!("Title:  {}\n", book.title));
    output.push_str(&format!("Author: {}\n", book.author));
    output.push_str(&format!(
        "Year:   {}\n",
        book.year.map(|y| y.to_string()).unwrap_or_else(|| "-".into())
    ));
    output.push_str(&format!(
        "Price:  {}\n",
        book.price
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".into())
    ));
    output
}
