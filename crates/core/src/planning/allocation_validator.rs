use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::planning_model::AllocationCheck;
use super::planning_traits::{AllocationValidatorTrait, FundsAvailabilityTrait};
use crate::goals::AllocationPlan;

/// Checks a plan against available funds fetched at validation time.
///
/// Read-only: it never writes. The result can go stale before a caller
/// persists the plan, so callers should re-validate right before commit.
pub struct AllocationValidator {
    funds: Arc<dyn FundsAvailabilityTrait>,
}

impl AllocationValidator {
    pub fn new(funds: Arc<dyn FundsAvailabilityTrait>) -> Self {
        AllocationValidator { funds }
    }
}

#[async_trait]
impl AllocationValidatorTrait for AllocationValidator {
    async fn validate(&self, plan: &AllocationPlan, user_id: &str) -> bool {
        self.check(plan, user_id).await.is_valid()
    }

    async fn check(&self, plan: &AllocationPlan, user_id: &str) -> AllocationCheck {
        let has_negative_entries = plan.iter().any(|a| a.amount < Decimal::ZERO);
        if has_negative_entries {
            warn!("Allocation plan for user {} contains negative amounts", user_id);
        }

        let requested = plan.total();
        let available = self.funds.available_funds(user_id).await;
        let check = AllocationCheck::new(requested, available, has_negative_entries);

        debug!(
            "Validated plan for user {}: requested {} / available {} (valid: {})",
            user_id,
            requested,
            available,
            check.is_valid()
        );
        check
    }
}
