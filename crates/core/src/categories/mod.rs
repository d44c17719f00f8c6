//! Categories module - keyword classification and override-aware category resolution.

mod categories_model;
mod categories_traits;
mod category_resolver;
pub mod keyword_classifier;

pub use categories_model::{CategoryOverride, CategorySource, MainBucket, ResolvedCategory};
pub use categories_traits::{CategoryOverrideRepositoryTrait, CategoryResolverTrait};
pub use category_resolver::CategoryResolver;
pub use keyword_classifier::{
    classify_detailed, classify_main_bucket, detailed_categories, is_income_transaction,
    KeywordRule,
};
