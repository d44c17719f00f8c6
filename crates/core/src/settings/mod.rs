//! Settings module - engine configuration, feature flags and preference traits.

mod feature_flags;
mod settings_model;
mod settings_traits;

pub use feature_flags::{FeatureFlagProvider, ToggleFeatureFlags};
pub use settings_model::{parse_flag, CategorizationConfig, EngineConfig, PlanningConfig};
pub use settings_traits::UserPreferenceRepositoryTrait;
