use async_trait::async_trait;
use rust_decimal::Decimal;

use super::planning_model::{AllocationCheck, AllocationProposal};
use crate::goals::AllocationPlan;

/// Computes how much a user can allocate to goals right now.
#[async_trait]
pub trait FundsAvailabilityTrait: Send + Sync {
    /// Liquid funds minus the safety buffer, never negative. Never fails:
    /// lookup errors degrade to documented defaults.
    async fn available_funds(&self, user_id: &str) -> Decimal;
}

#[async_trait]
pub trait AllocationValidatorTrait: Send + Sync {
    /// True when the plan total fits within freshly computed available funds.
    /// Negative entries count toward the total as given.
    async fn validate(&self, plan: &AllocationPlan, user_id: &str) -> bool;

    async fn check(&self, plan: &AllocationPlan, user_id: &str) -> AllocationCheck;
}

#[async_trait]
pub trait GoalPlanningServiceTrait: Send + Sync {
    async fn propose(&self, user_id: &str) -> AllocationProposal;
}
