/// Account subtype constants for depository accounts
pub mod account_subtypes {
    pub const CHECKING: &str = "checking";
    pub const SAVINGS: &str = "savings";
    pub const MONEY_MARKET: &str = "money market";
    pub const CASH_MANAGEMENT: &str = "cash management";
    pub const CD: &str = "cd";
    pub const HSA: &str = "hsa";
    pub const PREPAID: &str = "prepaid";
}

/// Depository subtypes whose balances count toward available funds.
pub const LIQUID_SUBTYPES: &[&str] = &[
    account_subtypes::CHECKING,
    account_subtypes::SAVINGS,
    account_subtypes::MONEY_MARKET,
    account_subtypes::CASH_MANAGEMENT,
];

/// Returns true if the given depository subtype counts as liquid.
///
/// Comparison ignores case and surrounding whitespace.
pub fn is_liquid_subtype(subtype: &str) -> bool {
    let normalized = subtype.trim().to_lowercase();
    LIQUID_SUBTYPES.iter().any(|s| *s == normalized)
}
