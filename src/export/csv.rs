//! CSV export functionality
//!
//! Writes the whole catalog to a comma-delimited UTF-8 file. The header and
//! column order are a fixed contract shared with the import side, so an
//! exported file can be re-imported without loss.

use std::io::Write;
use std::path::Path;

use crate::error::{LivrariaError, LivrariaResult};
use crate::store::BookStore;

/// Header row shared by export and import. Column 0 carries the record id,
/// which the import side deliberately ignores.
pub const CSV_HEADER: [&str; 5] = ["ID", "Título", "Autor", "Ano de Publicação", "Preço"];

/// Export every record to CSV in insertion order
///
/// Absent year/price values become empty fields, which the import side
/// reads back as absent. Returns the number of data rows written.
pub fn export_books_csv<W: Write>(store: &BookStore, writer: W) -> LivrariaResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| LivrariaError::Io(format!("Failed to write CSV header: {}", e)))?;

    let books = store.list_all()?;
    let count = books.len();

    for book in books {
        let year = book.year.map(|y| y.to_string()).unwrap_or_default();
        let price = book.price.map(|p| p.to_string()).unwrap_or_default();

        csv_writer
            .write_record([
                book.id.to_string(),
                book.title,
                book.author,
                year,
                price,
            ])
            .map_err(|e| LivrariaError::Io(format!("Failed to write CSV row: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LivrariaError::Io(format!("Failed to flush CSV output: {}", e)))?;

    Ok(count)
}

/// Export to a file path, overwriting any existing file
///
/// Creates the parent directory if needed. Returns the number of data rows
/// written.
pub fn export_books_to_file(store: &BookStore, path: &Path) -> LivrariaResult<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| LivrariaError::Io(format!("Failed to create export directory: {}", e)))?;
    }

    let file = std::fs::File::create(path)
        .map_err(|e| LivrariaError::Io(format!("Failed to create export file: {}", e)))?;

    export_books_csv(store, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LivrariaPaths;
    use crate::config::settings::BackupRetention;
    use crate::models::NewBook;
    use tempfile::TempDir;

    fn create_test_store() -> (BookStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LivrariaPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let store = BookStore::new(paths, BackupRetention::default());
        store.initialize().unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_export_header_and_rows() {
        let (store, _temp) = create_test_store();

        store
            .add(&NewBook::new("Dune", "Herbert", Some(1965), Some(15.50)))
            .unwrap();

        let mut output = Vec::new();
        let count = export_books_csv(&store, &mut output).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID,Título,Autor,Ano de Publicação,Preço"
        );
        assert_eq!(lines.next().unwrap(), "1,Dune,Herbert,1965,15.5");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_export_empty_store_writes_header_only() {
        let (store, _temp) = create_test_store();

        let mut output = Vec::new();
        let count = export_books_csv(&store, &mut output).unwrap();
        assert_eq!(count, 0);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_export_quotes_embedded_commas() {
        let (store, _temp) = create_test_store();

        store
            .add(&NewBook::new(
                "Dune, Deluxe Edition",
                "Herbert",
                Some(1965),
                Some(45.00),
            ))
            .unwrap();

        let mut output = Vec::new();
        export_books_csv(&store, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"Dune, Deluxe Edition\""));
    }

    #[test]
    fn test_export_absent_fields_are_empty() {
        let (store, _temp) = create_test_store();

        store
            .add(&NewBook::new("Fragment", "Anon", None, None))
            .unwrap();

        let mut output = Vec::new();
        export_books_csv(&store, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with("Fragment,Anon,,"));
    }

    #[test]
    fn test_export_to_file_overwrites() {
        let (store, temp_dir) = create_test_store();
        let path = temp_dir.path().join("exports").join("livros.csv");

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale contents").unwrap();

        store
            .add(&NewBook::new("Dune", "Herbert", Some(1965), Some(15.50)))
            .unwrap();
        export_books_to_file(&store, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("ID,"));
        assert!(!text.contains("stale contents"));
    }
}
