//! Pocketplan Core - budget categorization and goal allocation engine.
//!
//! This crate contains the deterministic rule layer behind the dashboard:
//! transaction categorization (user override, system default, keyword
//! fallback) and the goal funding pipeline (available funds, priority
//! allocation, validation). It is database-agnostic and defines the
//! repository traits implemented by the `storage-sqlite` crate.

pub mod accounts;
pub mod budget;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod planning;
pub mod reporting;
pub mod settings;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
