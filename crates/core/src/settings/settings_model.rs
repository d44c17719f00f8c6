//! Engine configuration models.

use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DB_CATEGORY_MAPPING_ENV, DEFAULT_SAFETY_BUFFER, DEFAULT_SAFETY_BUFFER_ENV};
use crate::errors::{Error, Result};

/// Configuration for transaction categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizationConfig {
    /// Consult persisted overrides and system defaults before keyword rules (default: false)
    pub db_mapping_enabled: bool,
}

/// Configuration for goal funding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningConfig {
    /// Buffer used when the user has no stored preference (default: 2000)
    pub default_safety_buffer: Decimal,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            default_safety_buffer: DEFAULT_SAFETY_BUFFER,
        }
    }
}

/// Top-level engine configuration, resolved once at startup and passed
/// explicitly into the services that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub categorization: CategorizationConfig,
    pub planning: PlanningConfig,
}

impl EngineConfig {
    /// Builds the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Missing keys keep their defaults; present but malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = EngineConfig::default();

        if let Some(raw) = lookup(DB_CATEGORY_MAPPING_ENV) {
            config.categorization.db_mapping_enabled = parse_flag(&raw).ok_or_else(|| {
                Error::InvalidConfigValue(format!("{}={}", DB_CATEGORY_MAPPING_ENV, raw))
            })?;
        }

        if let Some(raw) = lookup(DEFAULT_SAFETY_BUFFER_ENV) {
            let buffer = Decimal::from_str(raw.trim()).map_err(|_| {
                Error::InvalidConfigValue(format!("{}={}", DEFAULT_SAFETY_BUFFER_ENV, raw))
            })?;
            if buffer.is_sign_negative() {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must not be negative, got {}",
                    DEFAULT_SAFETY_BUFFER_ENV, raw
                )));
            }
            config.planning.default_safety_buffer = buffer;
        }

        debug!("Resolved engine config: {:?}", config);
        Ok(config)
    }
}

/// Parses a boolean-ish flag value. Returns `None` for unrecognized input.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
