//! Storage-specific error types for SQLite operations.
//!
//! Diesel, r2d2 and blocking-task errors are wrapped here and converted to
//! the database-agnostic errors defined in `pocketplan_core`.

use std::str::FromStr;

use diesel::result::Error as DieselError;
use pocketplan_core::errors::{DatabaseError, Error, ValidationError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Blocking task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            )) => Error::Database(DatabaseError::UniqueViolation(info.message().to_string())),
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::TaskFailed(e) => Error::Database(DatabaseError::Internal(e.to_string())),
        }
    }
}

/// Extension trait for converting Diesel and r2d2 results to core results.
///
/// `From<DieselError> for Error` is not possible because of orphan rules.
pub trait IntoCore<T> {
    fn into_core(self) -> pocketplan_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> pocketplan_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> pocketplan_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, tokio::task::JoinError> {
    fn into_core(self) -> pocketplan_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

/// Parses a decimal stored as TEXT.
pub(crate) fn parse_decimal(raw: &str, field: &str) -> pocketplan_core::Result<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|e| {
        log::error!("Failed to parse {} '{}': {}", field, raw, e);
        Error::Validation(ValidationError::DecimalParse(e))
    })
}

/// Parses an optional decimal stored as nullable TEXT. Blank values read as `None`.
pub(crate) fn parse_optional_decimal(
    raw: Option<&str>,
    field: &str,
) -> pocketplan_core::Result<Option<Decimal>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_decimal(value, field).map(Some),
    }
}
