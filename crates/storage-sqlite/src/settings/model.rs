//! Database models for user preferences.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::user_preferences)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserPreferenceDB {
    pub user_id: String,
    /// Decimal stored as TEXT; NULL means "use the default"
    pub safety_buffer: Option<String>,
    pub updated_at: String,
}
