use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use pocketplan_core::goals::{Goal, GoalRepositoryTrait};
use pocketplan_core::Result;

use super::model::GoalDB;
use crate::db::{read_with, DbPool};
use crate::errors::IntoCore;
use crate::schema::goals;

pub struct GoalRepository {
    pool: Arc<DbPool>,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        GoalRepository { pool }
    }

    /// Active goals in creation order; priority ordering is left to the allocator.
    fn list_active_goals_impl(conn: &mut SqliteConnection, owner: &str) -> Result<Vec<Goal>> {
        goals::table
            .filter(goals::user_id.eq(owner))
            .filter(goals::is_active.eq(true))
            .order((goals::created_at.asc(), goals::id.asc()))
            .select(GoalDB::as_select())
            .load::<GoalDB>(conn)
            .into_core()?
            .into_iter()
            .map(Goal::try_from)
            .collect()
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn list_active_goals(&self, owner_id: &str) -> Result<Vec<Goal>> {
        let owner_id = owner_id.to_string();
        read_with(&self.pool, move |conn| Self::list_active_goals_impl(conn, &owner_id)).await
    }
}
