//! Transactions module - the transaction snapshot consumed by categorization and reporting.

mod transactions_model;

pub use transactions_model::Transaction;
