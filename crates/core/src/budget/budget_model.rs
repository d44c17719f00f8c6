use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::MainBucket;

/// A single category line of a suggested monthly budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub category: String,
    pub amount: Decimal,
}

/// A monthly budget proposed by an external generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSuggestion {
    pub monthly_income: Decimal,
    pub lines: Vec<BudgetLine>,
    /// Total the generator claims its lines add up to
    pub declared_total: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetIssue {
    NegativeAmount { category: String, amount: Decimal },
    DuplicateCategory { category: String },
    DeclaredTotalMismatch { declared: Decimal, computed: Decimal },
    ExceedsIncome { total: Decimal, income: Decimal },
}

/// Result of checking a [`BudgetSuggestion`]'s arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetConsistency {
    pub is_consistent: bool,
    pub computed_total: Decimal,
    /// Income minus computed total; negative when over budget
    pub unbudgeted: Decimal,
    pub by_bucket: BTreeMap<MainBucket, Decimal>,
    pub issues: Vec<BudgetIssue>,
}
