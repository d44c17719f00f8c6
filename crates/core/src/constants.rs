use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Safety buffer kept in liquid accounts when the user has not configured one.
pub const DEFAULT_SAFETY_BUFFER: Decimal = dec!(2000);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Detailed category returned when no keyword rule matches.
pub const FALLBACK_DETAILED_CATEGORY: &str = "Miscellaneous";

/// Environment variable toggling database-backed category mapping.
pub const DB_CATEGORY_MAPPING_ENV: &str = "POCKETPLAN_DB_CATEGORY_MAPPING";

/// Environment variable overriding the default safety buffer.
pub const DEFAULT_SAFETY_BUFFER_ENV: &str = "POCKETPLAN_DEFAULT_SAFETY_BUFFER";
