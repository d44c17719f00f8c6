use async_trait::async_trait;

use super::categories_model::{CategoryOverride, ResolvedCategory};
use crate::errors::Result;
use crate::transactions::Transaction;

/// Read access to persisted category overrides and system defaults.
#[async_trait]
pub trait CategoryOverrideRepositoryTrait: Send + Sync {
    /// Finds the user's own (non system-defined) mapping for a provider category.
    async fn find_override_category(
        &self,
        user_id: &str,
        provider_category_id: &str,
    ) -> Result<Option<CategoryOverride>>;

    /// Finds the shared system default mapping for a provider category.
    async fn find_system_default_category(
        &self,
        provider_category_id: &str,
    ) -> Result<Option<CategoryOverride>>;
}

/// Category resolution contract. Implementations never fail and never
/// return an empty category name.
#[async_trait]
pub trait CategoryResolverTrait: Send + Sync {
    async fn resolve(
        &self,
        user_id: &str,
        provider_category_id: Option<&str>,
        raw_category: Option<&str>,
    ) -> String;

    async fn resolve_transaction(&self, transaction: &Transaction) -> ResolvedCategory;

    async fn resolve_many(&self, transactions: &[Transaction]) -> Vec<ResolvedCategory>;
}
