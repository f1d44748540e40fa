//! livraria-cli - Command-line book catalog manager
//!
//! This library provides the core functionality for the livraria book
//! catalog: an embedded SQLite record store, timestamped backups with
//! retention pruning, and a CSV export/import bridge.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (books)
//! - `store`: SQLite record store
//! - `backup`: Automatic backup management
//! - `export` / `import`: CSV bridge
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers for the `livraria` binary

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod store;

pub use error::{LivrariaError, LivrariaResult};
pub use models::{Book, NewBook};
pub use store::BookStore;
