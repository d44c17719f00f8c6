use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use pocketplan_core::settings::UserPreferenceRepositoryTrait;
use pocketplan_core::Result;

use super::model::UserPreferenceDB;
use crate::db::{read_with, DbPool};
use crate::errors::{parse_optional_decimal, IntoCore};
use crate::schema::user_preferences;

pub struct UserPreferenceRepository {
    pool: Arc<DbPool>,
}

impl UserPreferenceRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        UserPreferenceRepository { pool }
    }

    fn get_buffer_impl(conn: &mut SqliteConnection, owner: &str) -> Result<Option<Decimal>> {
        let row = user_preferences::table
            .find(owner)
            .select(UserPreferenceDB::as_select())
            .first::<UserPreferenceDB>(conn)
            .optional()
            .into_core()?;

        match row {
            Some(pref) => parse_optional_decimal(pref.safety_buffer.as_deref(), "safety_buffer"),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserPreferenceRepositoryTrait for UserPreferenceRepository {
    async fn get_user_buffer_preference(&self, owner_id: &str) -> Result<Option<Decimal>> {
        let owner_id = owner_id.to_string();
        read_with(&self.pool, move |conn| Self::get_buffer_impl(conn, &owner_id)).await
    }
}
