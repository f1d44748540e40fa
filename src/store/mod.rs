//! SQLite-backed record store
//!
//! Owns the `livros` schema and all CRUD/query access to it. Each operation
//! opens a scoped connection, does its work, and drops the handle before
//! returning, so no state is shared across calls. Every mutation triggers a
//! backup (with retention pruning) synchronously after its write commits.

use std::fs;

use rusqlite::{params, Connection};

use crate::backup::BackupManager;
use crate::config::paths::LivrariaPaths;
use crate::config::settings::BackupRetention;
use crate::error::{LivrariaError, LivrariaResult};
use crate::models::{Book, NewBook};

/// Durable storage for book records
pub struct BookStore {
    paths: LivrariaPaths,
    backup: BackupManager,
}

impl BookStore {
    /// Create a store rooted at the given paths with the given backup
    /// retention policy. Call [`BookStore::initialize`] before first use.
    pub fn new(paths: LivrariaPaths, retention: BackupRetention) -> Self {
        let backup = BackupManager::new(&paths, retention);
        Self { paths, backup }
    }

    /// Access the backup manager that this store triggers on mutation
    pub fn backup_manager(&self) -> &BackupManager {
        &self.backup
    }

    /// Open a scoped connection to the database file
    fn connect(&self) -> LivrariaResult<Connection> {
        Connection::open(self.paths.db_file())
            .map_err(|e| LivrariaError::Storage(format!("Failed to open database: {}", e)))
    }

    /// Ensure the data directory and the `livros` table exist
    ///
    /// Idempotent: safe to call on an already-initialized store.
    pub fn initialize(&self) -> LivrariaResult<()> {
        fs::create_dir_all(self.paths.data_dir())
            .map_err(|e| LivrariaError::Storage(format!("Failed to create data directory: {}", e)))?;

        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS livros (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                titulo TEXT NOT NULL,
                autor TEXT NOT NULL,
                ano_publicacao INTEGER,
                preco REAL)",
            [],
        )
        .map_err(|e| LivrariaError::Storage(format!("Failed to create schema: {}", e)))?;

        Ok(())
    }

    /// Insert a new record and return its assigned id
    ///
    /// AUTOINCREMENT guarantees ids are monotonically increasing and never
    /// reused, even after removals. Triggers a backup after the commit.
    pub fn add(&self, book: &NewBook) -> LivrariaResult<i64> {
        let id = {
            let conn = self.connect()?;
            conn.execute(
                "INSERT INTO livros (titulo, autor, ano_publicacao, preco)
                 VALUES (?1, ?2, ?3, ?4)",
                params![book.title, book.author, book.year, book.price],
            )?;
            conn.last_insert_rowid()
        };

        self.backup_after_mutation()?;
        Ok(id)
    }

    /// Return every record in insertion order (increasing id)
    pub fn list_all(&self) -> LivrariaResult<Vec<Book>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, titulo, autor, ano_publicacao, preco FROM livros ORDER BY id",
        )?;

        let books = stmt
            .query_map([], row_to_book)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(books)
    }

    /// Set the price of the record with the given id
    ///
    /// A nonexistent id is a successful no-op affecting zero rows. Returns
    /// the number of rows updated. Triggers a backup either way.
    pub fn update_price(&self, id: i64, new_price: f64) -> LivrariaResult<usize> {
        let updated = {
            let conn = self.connect()?;
            conn.execute(
                "UPDATE livros SET preco = ?1 WHERE id = ?2",
                params![new_price, id],
            )?
        };

        self.backup_after_mutation()?;
        Ok(updated)
    }

    /// Delete the record with the given id
    ///
    /// A nonexistent id is a successful no-op. Returns the number of rows
    /// deleted. Triggers a backup either way.
    pub fn remove(&self, id: i64) -> LivrariaResult<usize> {
        let removed = {
            let conn = self.connect()?;
            conn.execute("DELETE FROM livros WHERE id = ?1", params![id])?
        };

        self.backup_after_mutation()?;
        Ok(removed)
    }

    /// Fetch a single record by id, `None` when absent
    pub fn get(&self, id: i64) -> LivrariaResult<Option<Book>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, titulo, autor, ano_publicacao, preco FROM livros WHERE id = ?1",
        )?;

        let mut rows = stmt.query_map(params![id], row_to_book)?;
        match rows.next() {
            Some(book) => Ok(Some(book?)),
            None => Ok(None),
        }
    }

    /// Exact-match author lookup, case-sensitive, no normalization
    pub fn find_by_author(&self, author: &str) -> LivrariaResult<Vec<Book>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, titulo, autor, ano_publicacao, preco
             FROM livros WHERE autor = ?1 ORDER BY id",
        )?;

        let books = stmt
            .query_map(params![author], row_to_book)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(books)
    }

    /// Insert a batch of parsed records, one backup for the whole batch
    ///
    /// Rows are inserted as they arrive, each committing on its own; the
    /// first `Err` from the iterator aborts the remainder and propagates,
    /// leaving already-inserted rows in place. There is no rollback -
    /// partial import is a documented outcome, not hidden. The backup only
    /// runs when the whole batch succeeds.
    pub fn import<I>(&self, rows: I) -> LivrariaResult<usize>
    where
        I: IntoIterator<Item = LivrariaResult<NewBook>>,
    {
        let imported = {
            let conn = self.connect()?;
            let mut stmt = conn.prepare(
                "INSERT INTO livros (titulo, autor, ano_publicacao, preco)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;

            let mut imported = 0;
            for row in rows {
                let book = row?;
                stmt.execute(params![book.title, book.author, book.year, book.price])?;
                imported += 1;
            }
            imported
        };

        self.backup_after_mutation()?;
        Ok(imported)
    }

    /// Snapshot the database after a committed write
    ///
    /// Prune deletion failures are tolerated: they are reported on stderr
    /// and never fail the mutation that triggered the backup.
    fn backup_after_mutation(&self) -> LivrariaResult<()> {
        let (_, report) = self.backup.create_backup_with_retention()?;
        for (path, reason) in &report.failed {
            eprintln!(
                "warning: could not delete stale backup {}: {}",
                path.display(),
                reason
            );
        }
        Ok(())
    }
}

/// Map a `livros` row onto the Book model
fn row_to_book(row: &rusqlite::Row<'_>) -> Result<Book, rusqlite::Error> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        year: row.get(3)?,
        price: row.get(4)?,
    })
}
