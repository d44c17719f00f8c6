use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use pocketplan_core::accounts::{Account, AccountRepositoryTrait};
use pocketplan_core::Result;

use super::model::AccountDB;
use crate::db::{read_with, DbPool};
use crate::errors::IntoCore;
use crate::schema::accounts;

pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AccountRepository { pool }
    }

    fn list_liquid_accounts_impl(conn: &mut SqliteConnection, owner: &str) -> Result<Vec<Account>> {
        let rows = accounts::table
            .filter(accounts::user_id.eq(owner))
            .filter(accounts::is_active.eq(true))
            .order(accounts::id.asc())
            .select(AccountDB::as_select())
            .load::<AccountDB>(conn)
            .into_core()?;

        // Type and subtype matching is case-insensitive, so it happens after loading
        let mut liquid = Vec::with_capacity(rows.len());
        for row in rows {
            let account = Account::try_from(row)?;
            if account.is_liquid() {
                liquid.push(account);
            }
        }
        debug!("Found {} liquid accounts for user {}", liquid.len(), owner);
        Ok(liquid)
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn list_liquid_accounts(&self, owner_id: &str) -> Result<Vec<Account>> {
        let owner_id = owner_id.to_string();
        read_with(&self.pool, move |conn| {
            Self::list_liquid_accounts_impl(conn, &owner_id)
        })
        .await
    }
}
