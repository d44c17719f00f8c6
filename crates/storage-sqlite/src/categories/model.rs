//! Database models for category overrides.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pocketplan_core::categories::CategoryOverride;

#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::category_overrides)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CategoryOverrideDB {
    pub id: String,
    pub user_id: Option<String>,
    pub provider_category_id: String,
    pub category_name: String,
    pub is_system_defined: bool,
    pub is_essential: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Insert model; timestamps come from column defaults.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::category_overrides)]
#[serde(rename_all = "camelCase")]
pub struct NewCategoryOverrideDB {
    pub id: String,
    pub user_id: Option<String>,
    pub provider_category_id: String,
    pub category_name: String,
    pub is_system_defined: bool,
    pub is_essential: bool,
}

impl From<CategoryOverrideDB> for CategoryOverride {
    fn from(db: CategoryOverrideDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            provider_category_id: db.provider_category_id,
            category_name: db.category_name,
            is_system_defined: db.is_system_defined,
            is_essential: db.is_essential,
        }
    }
}

impl From<CategoryOverride> for NewCategoryOverrideDB {
    fn from(domain: CategoryOverride) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            provider_category_id: domain.provider_category_id,
            category_name: domain.category_name,
            is_system_defined: domain.is_system_defined,
            is_essential: domain.is_essential,
        }
    }
}
