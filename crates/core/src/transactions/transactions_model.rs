//! Transaction domain model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bank transaction as supplied by the import/sync layer.
///
/// Amounts are signed from the account holder's point of view: positive
/// values are money in, negative values are money out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    /// Free-text category label from the provider or the user
    pub category: Option<String>,
    /// Provider's category identifier, used for override and default lookups
    pub provider_category_id: Option<String>,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_inflow(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    pub fn is_outflow(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Month key in `YYYY-MM` form, used for monthly aggregation.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn transaction(amount: Decimal) -> Transaction {
        Transaction {
            id: "t1".to_string(),
            user_id: "u1".to_string(),
            amount,
            category: None,
            provider_category_id: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        }
    }

    #[test]
    fn direction_follows_sign() {
        assert!(transaction(dec!(10)).is_inflow());
        assert!(transaction(dec!(-10)).is_outflow());
        assert!(!transaction(dec!(0)).is_inflow());
        assert!(!transaction(dec!(0)).is_outflow());
    }

    #[test]
    fn month_key_is_zero_padded() {
        assert_eq!(transaction(dec!(1)).month_key(), "2024-03");
    }
}
