use std::collections::{BTreeMap, HashSet};

use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::budget_model::{BudgetConsistency, BudgetIssue, BudgetSuggestion};
use crate::categories::classify_main_bucket;

/// Declared totals within a cent of the computed sum are accepted.
const TOTAL_TOLERANCE: Decimal = dec!(0.01);

/// Checks only the arithmetic of a suggested budget: line amounts are
/// non-negative, categories are unique, the declared total matches the
/// lines and the lines fit within income.
pub fn check_budget_suggestion(suggestion: &BudgetSuggestion) -> BudgetConsistency {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let mut by_bucket: BTreeMap<_, Decimal> = BTreeMap::new();
    let mut computed_total = Decimal::ZERO;

    for line in &suggestion.lines {
        if line.amount < Decimal::ZERO {
            issues.push(BudgetIssue::NegativeAmount {
                category: line.category.clone(),
                amount: line.amount,
            });
        }
        if !seen.insert(line.category.trim().to_lowercase()) {
            issues.push(BudgetIssue::DuplicateCategory {
                category: line.category.clone(),
            });
        }
        computed_total += line.amount;
        *by_bucket
            .entry(classify_main_bucket(Some(&line.category)))
            .or_insert(Decimal::ZERO) += line.amount;
    }

    if let Some(declared) = suggestion.declared_total {
        if (declared - computed_total).abs() > TOTAL_TOLERANCE {
            issues.push(BudgetIssue::DeclaredTotalMismatch {
                declared,
                computed: computed_total,
            });
        }
    }

    if computed_total > suggestion.monthly_income {
        issues.push(BudgetIssue::ExceedsIncome {
            total: computed_total,
            income: suggestion.monthly_income,
        });
    }

    if issues.is_empty() {
        debug!("Budget suggestion is consistent (total {})", computed_total);
    } else {
        warn!("Budget suggestion has {} arithmetic issue(s)", issues.len());
    }

    BudgetConsistency {
        is_consistent: issues.is_empty(),
        computed_total,
        unbudgeted: suggestion.monthly_income - computed_total,
        by_bucket,
        issues,
    }
}
