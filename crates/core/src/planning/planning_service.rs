use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info};
use rust_decimal::Decimal;

use super::planning_model::AllocationProposal;
use super::planning_traits::{AllocationValidatorTrait, FundsAvailabilityTrait, GoalPlanningServiceTrait};
use super::priority_allocator::PriorityAllocator;
use crate::goals::{Goal, GoalRepositoryTrait};

/// Runs the full goal funding pipeline for a user.
pub struct GoalPlanningService {
    funds: Arc<dyn FundsAvailabilityTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    validator: Arc<dyn AllocationValidatorTrait>,
    allocator: PriorityAllocator,
}

impl GoalPlanningService {
    pub fn new(
        funds: Arc<dyn FundsAvailabilityTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        validator: Arc<dyn AllocationValidatorTrait>,
    ) -> Self {
        GoalPlanningService {
            funds,
            goal_repository,
            validator,
            allocator: PriorityAllocator::new(),
        }
    }

    async fn active_goals(&self, user_id: &str) -> Vec<Goal> {
        match self.goal_repository.list_active_goals(user_id).await {
            Ok(goals) => goals.into_iter().filter(|g| g.is_active).collect(),
            Err(e) => {
                error!("Failed to list goals for user {}: {}", user_id, e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl GoalPlanningServiceTrait for GoalPlanningService {
    async fn propose(&self, user_id: &str) -> AllocationProposal {
        let available_funds = self.funds.available_funds(user_id).await;
        let goals = self.active_goals(user_id).await;
        let plan = self.allocator.allocate(&goals, available_funds);
        let unallocated = (available_funds - plan.total()).max(Decimal::ZERO);
        let is_valid = self.validator.validate(&plan, user_id).await;

        info!(
            "Proposed {} allocations for user {} ({} unallocated, valid: {})",
            plan.len(),
            user_id,
            unallocated,
            is_valid
        );

        AllocationProposal {
            available_funds,
            plan,
            unallocated,
            is_valid,
        }
    }
}
