use std::collections::BTreeMap;

use log::debug;

use super::reporting_model::MonthlyCashflow;
use crate::categories::{classify_main_bucket, is_income_transaction};
use crate::transactions::Transaction;

/// Aggregates transactions into per-month income and spending.
///
/// Inflows count as income only when they pass the narrow income test
/// (payroll, deposits, transfers, ... but not payments); other inflows are
/// reported separately. Outflows are bucketed with the main-bucket classifier.
pub struct CashflowReport;

impl CashflowReport {
    /// Returns one entry per month present in `transactions`, oldest first.
    pub fn monthly(transactions: &[Transaction]) -> Vec<MonthlyCashflow> {
        let mut months: BTreeMap<String, MonthlyCashflow> = BTreeMap::new();

        for transaction in transactions {
            if transaction.amount.is_zero() {
                continue;
            }
            let key = transaction.month_key();
            let month = months
                .entry(key.clone())
                .or_insert_with(|| MonthlyCashflow::new(key));
            let text = transaction.category.as_deref();

            if transaction.is_inflow() {
                if is_income_transaction(transaction.amount, text) {
                    month.add_income(transaction.amount);
                } else {
                    month.add_other_inflow(transaction.amount);
                }
            } else {
                month.add_spending(classify_main_bucket(text), transaction.amount);
            }
        }

        debug!(
            "Built cashflow for {} months from {} transactions",
            months.len(),
            transactions.len()
        );
        months.into_values().collect()
    }
}
