use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::MainBucket;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Income and spending totals for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashflow {
    /// `YYYY-MM`
    pub month: String,
    pub income: Decimal,
    /// Absolute sum of outflows
    pub spending: Decimal,
    /// Part of `spending` whose main bucket is Savings
    pub savings: Decimal,
    /// Inflows that did not pass the income test (refunds, reimbursements, ...)
    pub other_inflows: Decimal,
    pub by_bucket: BTreeMap<MainBucket, Decimal>,
    pub net: Decimal,
}

impl MonthlyCashflow {
    pub fn new(month: impl Into<String>) -> Self {
        MonthlyCashflow {
            month: month.into(),
            income: Decimal::ZERO,
            spending: Decimal::ZERO,
            savings: Decimal::ZERO,
            other_inflows: Decimal::ZERO,
            by_bucket: BTreeMap::new(),
            net: Decimal::ZERO,
        }
    }

    pub fn add_income(&mut self, amount: Decimal) {
        self.income += amount;
        self.net += amount;
    }

    pub fn add_other_inflow(&mut self, amount: Decimal) {
        self.other_inflows += amount;
        self.net += amount;
    }

    pub fn add_spending(&mut self, bucket: MainBucket, amount: Decimal) {
        let amount = amount.abs();
        self.spending += amount;
        self.net -= amount;
        if bucket == MainBucket::Savings {
            self.savings += amount;
        }
        *self.by_bucket.entry(bucket).or_insert(Decimal::ZERO) += amount;
    }
}

/// Spending total for one detailed category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: String,
    pub amount: Decimal,
    pub transaction_count: usize,
    /// Percentage of total spending, 0-100
    pub percentage: Decimal,
}

impl CategorySpending {
    pub(crate) fn round_for_display(&mut self) {
        self.amount = self.amount.round_dp(DISPLAY_DECIMAL_PRECISION);
        self.percentage = self.percentage.round_dp(DISPLAY_DECIMAL_PRECISION);
    }
}
