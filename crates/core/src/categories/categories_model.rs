//! Category domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// A persisted mapping from a provider category id to a detailed category.
///
/// User overrides (`is_system_defined == false`) are unique per
/// `(user_id, provider_category_id)`. System defaults are shared across users
/// and carry no user id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOverride {
    pub id: String,
    pub user_id: Option<String>,
    pub provider_category_id: String,
    pub category_name: String,
    pub is_system_defined: bool,
    pub is_essential: bool,
}

impl CategoryOverride {
    /// Returns the trimmed category name, or `None` when it is blank.
    pub fn usable_name(&self) -> Option<&str> {
        let name = self.category_name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Coarse spending bucket used for dashboard-level aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MainBucket {
    Essentials,
    Lifestyle,
    Savings,
    Income,
}

impl MainBucket {
    pub const ALL: [MainBucket; 4] = [
        MainBucket::Essentials,
        MainBucket::Lifestyle,
        MainBucket::Savings,
        MainBucket::Income,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MainBucket::Essentials => "Essentials",
            MainBucket::Lifestyle => "Lifestyle",
            MainBucket::Savings => "Savings",
            MainBucket::Income => "Income",
        }
    }
}

impl fmt::Display for MainBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MainBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MainBucket::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown main bucket: {}",
                    s
                )))
            })
    }
}

/// Where a resolved category came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategorySource {
    UserOverride,
    SystemDefault,
    Keyword,
}

/// Fully resolved category information for one transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCategory {
    pub detailed: String,
    pub main_bucket: MainBucket,
    pub is_essential: bool,
    pub source: CategorySource,
}
