//! Account domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accounts_constants::is_liquid_subtype;
use crate::errors::{Error, ValidationError};

/// Coarse account type as reported by the bank-sync provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Depository,
    Credit,
    Investment,
    Loan,
    #[default]
    Other,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Depository => "DEPOSITORY",
            AccountType::Credit => "CREDIT",
            AccountType::Investment => "INVESTMENT",
            AccountType::Loan => "LOAN",
            AccountType::Other => "OTHER",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEPOSITORY" => Ok(AccountType::Depository),
            "CREDIT" => Ok(AccountType::Credit),
            "INVESTMENT" => Ok(AccountType::Investment),
            "LOAN" => Ok(AccountType::Loan),
            "OTHER" => Ok(AccountType::Other),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown account type: {}",
                other
            )))),
        }
    }
}

/// Domain model representing a linked bank account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub account_type: AccountType,
    /// Provider subtype such as "checking" or "savings"
    pub account_subtype: Option<String>,
    pub balance: Decimal,
    /// Balance net of pending transactions, when the provider reports one
    pub available_balance: Option<Decimal>,
    pub is_active: bool,
}

impl Account {
    /// Returns true for active depository accounts with a liquid subtype.
    pub fn is_liquid(&self) -> bool {
        self.is_active
            && self.account_type == AccountType::Depository
            && self
                .account_subtype
                .as_deref()
                .map(is_liquid_subtype)
                .unwrap_or(false)
    }

    /// The balance that counts toward available funds: the available
    /// balance when present, the ledger balance otherwise.
    pub fn spendable_balance(&self) -> Decimal {
        self.available_balance.unwrap_or(self.balance)
    }
}
