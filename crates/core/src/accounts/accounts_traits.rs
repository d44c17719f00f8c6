//! Account repository trait.
//!
//! The trait defines the contract for account reads without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::Account;
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Lists the user's active liquid accounts (depository checking,
    /// savings or equivalent).
    async fn list_liquid_accounts(&self, user_id: &str) -> Result<Vec<Account>>;
}
