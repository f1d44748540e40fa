//! End-to-end tests for the `livraria` binary
//!
//! Each test runs the binary against its own temporary data directory via
//! the `LIVRARIA_DATA_DIR` override, so tests never touch the real catalog
//! and can run in parallel.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn livraria(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("livraria").unwrap();
    cmd.env("LIVRARIA_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_creates_database() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog initialized"));

    assert!(dir.path().join("data").join("livraria.db").exists());

    // A second init is a harmless no-op
    livraria(&dir)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn show_prints_details_or_absence() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["add", "Dune", "Herbert", "--year", "1965", "--price", "15.50"])
        .assert()
        .success();

    livraria(&dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:  Dune"))
        .stdout(predicate::str::contains("Price:  15.50"));

    livraria(&dir)
        .args(["show", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No book with id 42."));
}

#[test]
fn list_empty_catalog() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["add", "Dune", "Herbert", "--year", "1965", "--price", "15.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added book #1"));

    livraria(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Herbert"))
        .stdout(predicate::str::contains("15.50"));
}

#[test]
fn update_price_missing_id_is_noop() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["update-price", "42", "9.99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing changed"));
}

#[test]
fn find_is_exact_match() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["add", "Dune", "Herbert"])
        .assert()
        .success();

    livraria(&dir)
        .args(["find", "Herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));

    livraria(&dir)
        .args(["find", "herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));
}

#[test]
fn mutation_creates_backup() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["add", "Dune", "Herbert"])
        .assert()
        .success();

    let snapshots: Vec<_> = std::fs::read_dir(dir.path().join("backups"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "db"))
        .collect();
    assert_eq!(snapshots.len(), 1);
    assert!(snapshots[0]
        .file_name()
        .to_string_lossy()
        .starts_with("backup_livraria_"));
}

#[test]
fn export_writes_default_file() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["add", "Dune", "Herbert", "--year", "1965", "--price", "15.50"])
        .assert()
        .success();

    livraria(&dir)
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 book(s)"));

    let exported = dir
        .path()
        .join("exports")
        .join("livros_exportados.csv");
    let contents = std::fs::read_to_string(exported).unwrap();
    assert!(contents.starts_with("ID,Título,Autor,Ano de Publicação,Preço"));
    assert!(contents.contains("Dune"));
}

#[test]
fn import_round_trip_between_catalogs() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    livraria(&source)
        .args(["add", "Dune", "Herbert", "--year", "1965", "--price", "15.50"])
        .assert()
        .success();

    let csv_path = source.path().join("books.csv");
    livraria(&source)
        .args(["export", "--output", csv_path.to_str().unwrap()])
        .assert()
        .success();

    livraria(&target)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 book(s)"));

    livraria(&target)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));
}

#[test]
fn import_malformed_numeric_fails() {
    let dir = TempDir::new().unwrap();

    let csv_path = dir.path().join("bad.csv");
    std::fs::write(
        &csv_path,
        "ID,Título,Autor,Ano de Publicação,Preço\n1,Dune,Herbert,not-a-year,15.5\n",
    )
    .unwrap();

    livraria(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed CSV data at row 1"));
}

#[test]
fn import_short_row_fails() {
    let dir = TempDir::new().unwrap();

    let csv_path = dir.path().join("short.csv");
    std::fs::write(
        &csv_path,
        "ID,Título,Autor,Ano de Publicação,Preço\n1,Dune,Herbert\n",
    )
    .unwrap();

    livraria(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing year column"));

    livraria(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));
}

#[test]
fn backup_list_reports_snapshots() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No backups found."));

    livraria(&dir)
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    livraria(&dir)
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1 backup(s)"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("livraria.db"))
        .stdout(predicate::str::contains("keep 5 snapshot(s)"));
}
