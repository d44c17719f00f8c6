use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::categories_model::{CategoryOverride, CategorySource, MainBucket, ResolvedCategory};
use super::categories_traits::{CategoryOverrideRepositoryTrait, CategoryResolverTrait};
use super::keyword_classifier::{classify_detailed, classify_main_bucket};
use crate::settings::FeatureFlagProvider;
use crate::transactions::Transaction;

/// Resolves transaction categories with the precedence
/// user override > system default > keyword rules.
///
/// Persisted mappings are only consulted when the feature flag is on.
/// Lookup failures are logged and fall through to the keyword rules.
pub struct CategoryResolver {
    override_repository: Arc<dyn CategoryOverrideRepositoryTrait>,
    feature_flags: Arc<dyn FeatureFlagProvider>,
}

impl CategoryResolver {
    pub fn new(
        override_repository: Arc<dyn CategoryOverrideRepositoryTrait>,
        feature_flags: Arc<dyn FeatureFlagProvider>,
    ) -> Self {
        CategoryResolver {
            override_repository,
            feature_flags,
        }
    }

    /// Runs the persisted lookups. Performs zero, one or two repository
    /// calls and never fails.
    async fn lookup_persisted(
        &self,
        user_id: &str,
        provider_category_id: Option<&str>,
    ) -> Option<(CategoryOverride, CategorySource)> {
        if !self.feature_flags.is_db_mapping_enabled() {
            debug!("DB category mapping disabled; using keyword rules");
            return None;
        }

        let provider_id = provider_category_id
            .map(str::trim)
            .filter(|id| !id.is_empty())?;

        match self
            .override_repository
            .find_override_category(user_id, provider_id)
            .await
        {
            Ok(Some(row)) if row.usable_name().is_some() => {
                return Some((row, CategorySource::UserOverride));
            }
            Ok(_) => {}
            Err(e) => {
                warn!(
                    "Override lookup failed for user {} / provider category {}: {}. Falling back to keyword rules.",
                    user_id, provider_id, e
                );
                return None;
            }
        }

        match self
            .override_repository
            .find_system_default_category(provider_id)
            .await
        {
            Ok(Some(row)) if row.usable_name().is_some() => {
                Some((row, CategorySource::SystemDefault))
            }
            Ok(_) => None,
            Err(e) => {
                warn!(
                    "System default lookup failed for provider category {}: {}. Falling back to keyword rules.",
                    provider_id, e
                );
                None
            }
        }
    }
}

#[async_trait]
impl CategoryResolverTrait for CategoryResolver {
    async fn resolve(
        &self,
        user_id: &str,
        provider_category_id: Option<&str>,
        raw_category: Option<&str>,
    ) -> String {
        match self.lookup_persisted(user_id, provider_category_id).await {
            Some((row, _)) => row.usable_name().unwrap_or_default().to_string(),
            None => classify_detailed(raw_category).to_string(),
        }
    }

    async fn resolve_transaction(&self, transaction: &Transaction) -> ResolvedCategory {
        let raw_category = transaction.category.as_deref();
        let main_bucket = classify_main_bucket(raw_category);

        match self
            .lookup_persisted(
                &transaction.user_id,
                transaction.provider_category_id.as_deref(),
            )
            .await
        {
            Some((row, source)) => ResolvedCategory {
                detailed: row.usable_name().unwrap_or_default().to_string(),
                main_bucket,
                is_essential: row.is_essential,
                source,
            },
            None => ResolvedCategory {
                detailed: classify_detailed(raw_category).to_string(),
                main_bucket,
                is_essential: main_bucket == MainBucket::Essentials,
                source: CategorySource::Keyword,
            },
        }
    }

    async fn resolve_many(&self, transactions: &[Transaction]) -> Vec<ResolvedCategory> {
        let mut resolved = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            resolved.push(self.resolve_transaction(transaction).await);
        }
        resolved
    }
}
