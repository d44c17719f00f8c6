//! Feature-flag collaborator for categorization.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::settings_model::CategorizationConfig;

/// Source of the database category-mapping flag.
///
/// The resolver reads the flag once per call, so a change is picked up by
/// the next call without any caching.
pub trait FeatureFlagProvider: Send + Sync {
    fn is_db_mapping_enabled(&self) -> bool;
}

impl FeatureFlagProvider for CategorizationConfig {
    fn is_db_mapping_enabled(&self) -> bool {
        self.db_mapping_enabled
    }
}

/// Runtime-toggleable flag shared between the owner and any resolvers.
#[derive(Debug, Clone, Default)]
pub struct ToggleFeatureFlags {
    db_mapping_enabled: Arc<AtomicBool>,
}

impl ToggleFeatureFlags {
    pub fn new(enabled: bool) -> Self {
        Self {
            db_mapping_enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn set_db_mapping_enabled(&self, enabled: bool) {
        self.db_mapping_enabled.store(enabled, Ordering::SeqCst);
    }
}

impl FeatureFlagProvider for ToggleFeatureFlags {
    fn is_db_mapping_enabled(&self) -> bool {
        self.db_mapping_enabled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_visible_through_clones() {
        let flags = ToggleFeatureFlags::new(false);
        let shared = flags.clone();
        assert!(!shared.is_db_mapping_enabled());
        flags.set_db_mapping_enabled(true);
        assert!(shared.is_db_mapping_enabled());
    }

    #[test]
    fn config_reports_its_own_value() {
        let config = CategorizationConfig {
            db_mapping_enabled: true,
        };
        assert!(config.is_db_mapping_enabled());
        assert!(!CategorizationConfig::default().is_db_mapping_enabled());
    }
}
