//! Database models for accounts.

use std::str::FromStr;

use diesel::prelude::*;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{parse_decimal, parse_optional_decimal};
use pocketplan_core::accounts::{Account, AccountType};

/// Database model for accounts. Balances are stored as TEXT.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AccountDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub account_type: String,
    pub account_subtype: Option<String>,
    pub balance: String,
    pub available_balance: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[serde(rename_all = "camelCase")]
pub struct NewAccountDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub account_type: String,
    pub account_subtype: Option<String>,
    pub balance: String,
    pub available_balance: Option<String>,
    pub is_active: bool,
}

impl TryFrom<AccountDB> for Account {
    type Error = pocketplan_core::Error;

    fn try_from(db: AccountDB) -> Result<Self, Self::Error> {
        let account_type = AccountType::from_str(&db.account_type).unwrap_or_else(|_| {
            warn!(
                "Unknown account type '{}' for account {}; treating as OTHER",
                db.account_type, db.id
            );
            AccountType::Other
        });

        Ok(Account {
            balance: parse_decimal(&db.balance, "balance")?,
            available_balance: parse_optional_decimal(
                db.available_balance.as_deref(),
                "available_balance",
            )?,
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            account_type,
            account_subtype: db.account_subtype,
            is_active: db.is_active,
        })
    }
}

impl From<Account> for NewAccountDB {
    fn from(domain: Account) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            account_type: domain.account_type.as_str().to_string(),
            account_subtype: domain.account_subtype,
            balance: domain.balance.to_string(),
            available_balance: domain.available_balance.map(|b| b.to_string()),
            is_active: domain.is_active,
        }
    }
}
