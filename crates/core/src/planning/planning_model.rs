//! Planning result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::AllocationPlan;

/// Outcome of comparing a plan against freshly computed available funds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationCheck {
    /// Sum of every entry in the plan
    pub requested: Decimal,
    /// Available funds at the time of the check
    pub available: Decimal,
    /// How far the plan overshoots `available`; zero when it fits
    pub shortfall: Decimal,
    /// True when some entry is negative. Reported only; does not affect validity
    pub has_negative_entries: bool,
}

impl AllocationCheck {
    pub fn new(requested: Decimal, available: Decimal, has_negative_entries: bool) -> Self {
        Self {
            requested,
            available,
            shortfall: (requested - available).max(Decimal::ZERO),
            has_negative_entries,
        }
    }

    /// `requested <= available`
    pub fn is_valid(&self) -> bool {
        self.requested <= self.available
    }
}

/// A proposed funding plan for a user's active goals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationProposal {
    pub available_funds: Decimal,
    pub plan: AllocationPlan,
    /// Funds left over once every reachable need is met
    pub unallocated: Decimal,
    pub is_valid: bool,
}
