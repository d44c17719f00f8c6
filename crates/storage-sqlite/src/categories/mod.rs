//! SQLite storage implementation for category overrides and system defaults.

mod model;
mod repository;

pub use model::{CategoryOverrideDB, NewCategoryOverrideDB};
pub use repository::CategoryOverrideRepository;
