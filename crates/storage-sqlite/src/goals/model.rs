//! Database models for goals.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::parse_decimal;
use pocketplan_core::goals::Goal;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub priority: Option<i32>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub priority: Option<i32>,
    pub is_active: bool,
}

impl TryFrom<GoalDB> for Goal {
    type Error = pocketplan_core::Error;

    fn try_from(db: GoalDB) -> Result<Self, Self::Error> {
        Ok(Goal {
            target_amount: parse_decimal(&db.target_amount, "target_amount")?,
            current_amount: parse_decimal(&db.current_amount, "current_amount")?,
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            priority: db.priority,
            is_active: db.is_active,
        })
    }
}

impl From<Goal> for NewGoalDB {
    fn from(domain: Goal) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            target_amount: domain.target_amount.to_string(),
            current_amount: domain.current_amount.to_string(),
            priority: domain.priority,
            is_active: domain.is_active,
        }
    }
}
