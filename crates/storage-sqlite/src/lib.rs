//! SQLite storage implementation for pocketplan.
//!
//! This crate implements the repository traits defined in `pocketplan-core`
//! with Diesel and SQLite. It contains:
//! - Database initialization, connection pooling and embedded migrations
//! - Repository implementations for category overrides, accounts, goals and
//!   user preferences
//! - Database-specific model types (with Diesel derives)
//!
//! This is the only crate with Diesel dependencies; the core crate works with
//! traits only.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;
pub mod categories;
pub mod goals;
pub mod settings;

pub use db::{create_pool, get_connection, get_db_path, init, read_with, run_migrations, DbConnection, DbPool};

pub use errors::{IntoCore, StorageError};

// Re-export from pocketplan-core for convenience
pub use pocketplan_core::errors::{DatabaseError, Error, Result};
