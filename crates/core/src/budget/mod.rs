//! Budget module - arithmetic consistency checks for suggested budgets.

mod budget_checker;
mod budget_model;

pub use budget_checker::check_budget_suggestion;
pub use budget_model::{BudgetConsistency, BudgetIssue, BudgetLine, BudgetSuggestion};
