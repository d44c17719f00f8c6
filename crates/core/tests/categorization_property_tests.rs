//! Property-based tests for transaction categorization.

use std::sync::Arc;

use async_trait::async_trait;
use pocketplan_core::categories::{
    classify_detailed, classify_main_bucket, detailed_categories, CategoryOverride,
    CategoryOverrideRepositoryTrait, CategoryResolver, CategoryResolverTrait, MainBucket,
};
use pocketplan_core::errors::{DatabaseError, Error, Result};
use pocketplan_core::settings::CategorizationConfig;
use proptest::prelude::*;

/// Repository that fails or returns rows with arbitrary (possibly blank) names.
struct ChaoticRepository {
    fail: bool,
    name: String,
}

#[async_trait]
impl CategoryOverrideRepositoryTrait for ChaoticRepository {
    async fn find_override_category(
        &self,
        user_id: &str,
        provider_category_id: &str,
    ) -> Result<Option<CategoryOverride>> {
        if self.fail {
            return Err(Error::Database(DatabaseError::QueryFailed("boom".to_string())));
        }
        Ok(Some(CategoryOverride {
            id: "o1".to_string(),
            user_id: Some(user_id.to_string()),
            provider_category_id: provider_category_id.to_string(),
            category_name: self.name.clone(),
            is_system_defined: false,
            is_essential: false,
        }))
    }

    async fn find_system_default_category(
        &self,
        _provider_category_id: &str,
    ) -> Result<Option<CategoryOverride>> {
        Ok(None)
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

proptest! {
    #[test]
    fn detailed_classification_is_never_empty(text in proptest::option::of(".{0,40}")) {
        let category = classify_detailed(text.as_deref());
        prop_assert!(!category.is_empty());
        prop_assert!(detailed_categories().contains(&category));
    }

    #[test]
    fn classification_ignores_case_and_padding(text in "[a-zA-Z &]{1,30}") {
        let padded = format!("  {}  ", text.to_uppercase());
        prop_assert_eq!(classify_detailed(Some(&text)), classify_detailed(Some(&padded)));
        prop_assert_eq!(classify_main_bucket(Some(&text)), classify_main_bucket(Some(&padded)));
    }

    #[test]
    fn resolve_never_returns_empty(
        fail in any::<bool>(),
        enabled in any::<bool>(),
        name in "[ a-zA-Z]{0,12}",
        provider_id in proptest::option::of("[0-9 ]{0,8}"),
        text in proptest::option::of(".{0,30}"),
    ) {
        let resolver = CategoryResolver::new(
            Arc::new(ChaoticRepository { fail, name }),
            Arc::new(CategorizationConfig { db_mapping_enabled: enabled }),
        );
        let category = block_on(resolver.resolve("user-1", provider_id.as_deref(), text.as_deref()));
        prop_assert!(!category.trim().is_empty());
    }
}

#[test]
fn null_inputs_keep_their_distinct_fallbacks() {
    assert_eq!(classify_detailed(None), "Miscellaneous");
    assert_eq!(classify_main_bucket(None), MainBucket::Lifestyle);
}
