use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use pocketplan_core::categories::{CategoryOverride, CategoryOverrideRepositoryTrait};
use pocketplan_core::Result;

use super::model::CategoryOverrideDB;
use crate::db::{read_with, DbPool};
use crate::errors::IntoCore;
use crate::schema::category_overrides::dsl::*;

pub struct CategoryOverrideRepository {
    pool: Arc<DbPool>,
}

impl CategoryOverrideRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        CategoryOverrideRepository { pool }
    }

    fn find_override_impl(
        conn: &mut SqliteConnection,
        owner: &str,
        provider_id: &str,
    ) -> Result<Option<CategoryOverride>> {
        let row = category_overrides
            .filter(is_system_defined.eq(false))
            .filter(user_id.eq(owner))
            .filter(provider_category_id.eq(provider_id))
            .select(CategoryOverrideDB::as_select())
            .first::<CategoryOverrideDB>(conn)
            .optional()
            .into_core()?;
        Ok(row.map(CategoryOverride::from))
    }

    fn find_system_default_impl(
        conn: &mut SqliteConnection,
        provider_id: &str,
    ) -> Result<Option<CategoryOverride>> {
        let row = category_overrides
            .filter(is_system_defined.eq(true))
            .filter(provider_category_id.eq(provider_id))
            .order(id.asc())
            .select(CategoryOverrideDB::as_select())
            .first::<CategoryOverrideDB>(conn)
            .optional()
            .into_core()?;
        Ok(row.map(CategoryOverride::from))
    }
}

#[async_trait]
impl CategoryOverrideRepositoryTrait for CategoryOverrideRepository {
    async fn find_override_category(
        &self,
        owner_id: &str,
        provider_id: &str,
    ) -> Result<Option<CategoryOverride>> {
        debug!("Looking up override for {} / {}", owner_id, provider_id);
        let owner_id = owner_id.to_string();
        let provider_id = provider_id.to_string();
        read_with(&self.pool, move |conn| {
            Self::find_override_impl(conn, &owner_id, &provider_id)
        })
        .await
    }

    async fn find_system_default_category(
        &self,
        provider_id: &str,
    ) -> Result<Option<CategoryOverride>> {
        let provider_id = provider_id.to_string();
        read_with(&self.pool, move |conn| {
            Self::find_system_default_impl(conn, &provider_id)
        })
        .await
    }
}
