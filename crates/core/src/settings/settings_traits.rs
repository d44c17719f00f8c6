//! Repository traits for user preferences.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;

/// Repository trait for per-user planning preferences.
#[async_trait]
pub trait UserPreferenceRepositoryTrait: Send + Sync {
    /// Returns the user's configured safety buffer, or `None` when no
    /// preference row exists.
    async fn get_user_buffer_preference(&self, user_id: &str) -> Result<Option<Decimal>>;
}
