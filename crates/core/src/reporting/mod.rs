//! Reporting module - monthly cashflow and per-category spending aggregates.

mod cashflow_report;
mod reporting_model;
mod spending_service;

pub use cashflow_report::CashflowReport;
pub use reporting_model::{CategorySpending, MonthlyCashflow};
pub use spending_service::{SpendingBreakdownService, SpendingBreakdownServiceTrait};
