//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the core library.

pub mod backup;
pub mod book;

pub use backup::{handle_backup_command, BackupCommands};
pub use book::{
    handle_add, handle_export, handle_find, handle_import, handle_list, handle_remove,
    handle_show, handle_update_price,
};
