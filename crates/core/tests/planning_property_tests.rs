//! Property-based tests for the goal funding pipeline.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use pocketplan_core::goals::{AllocationPlan, Goal};
use pocketplan_core::planning::{
    AllocationValidator, AllocationValidatorTrait, FundsAvailabilityTrait, PriorityAllocator,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Amounts in cents between -1,000.00 and 100,000.00.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-100_000i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_goal(index: usize) -> impl Strategy<Value = Goal> {
    (
        arb_amount(),
        arb_amount(),
        proptest::option::of(-3i32..10),
        any::<bool>(),
    )
        .prop_map(move |(target, current, priority, is_active)| Goal {
            id: format!("goal-{}", index),
            user_id: "user-1".to_string(),
            name: format!("Goal {}", index),
            target_amount: target,
            current_amount: current,
            priority,
            is_active,
        })
}

fn arb_goals() -> impl Strategy<Value = Vec<Goal>> {
    (0usize..12).prop_flat_map(|len| (0..len).map(arb_goal).collect::<Vec<_>>())
}

struct FixedFunds(Decimal);

#[async_trait]
impl FundsAvailabilityTrait for FixedFunds {
    async fn available_funds(&self, _user_id: &str) -> Decimal {
        self.0
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn allocation_never_exceeds_available(goals in arb_goals(), available in arb_amount()) {
        let plan = PriorityAllocator::new().allocate(&goals, available);
        prop_assert!(plan.total() <= available.max(Decimal::ZERO));
    }

    #[test]
    fn no_goal_is_over_funded(goals in arb_goals(), available in arb_amount()) {
        let plan = PriorityAllocator::new().allocate(&goals, available);
        for goal in &goals {
            if let Some(amount) = plan.get(&goal.id) {
                prop_assert!(amount > Decimal::ZERO);
                prop_assert!(amount <= goal.remaining_need());
            }
        }
    }

    #[test]
    fn fully_funded_goals_never_appear(goals in arb_goals(), available in arb_amount()) {
        let plan = PriorityAllocator::new().allocate(&goals, available);
        for goal in goals.iter().filter(|g| g.is_fully_funded()) {
            prop_assert!(!plan.contains(&goal.id));
        }
    }

    #[test]
    fn at_most_one_goal_is_partially_funded(goals in arb_goals(), available in arb_amount()) {
        let plan = PriorityAllocator::new().allocate(&goals, available);
        let partial = goals
            .iter()
            .filter(|g| plan.get(&g.id).is_some_and(|a| a < g.remaining_need()))
            .count();
        prop_assert!(partial <= 1);
        let ids: HashSet<_> = plan.iter().map(|a| a.goal_id.clone()).collect();
        prop_assert_eq!(ids.len(), plan.len());
    }

    #[test]
    fn allocator_output_always_validates(goals in arb_goals(), available in arb_amount()) {
        let funds = available.max(Decimal::ZERO);
        let plan = PriorityAllocator::new().allocate(&goals, funds);
        let validator = AllocationValidator::new(Arc::new(FixedFunds(funds)));
        prop_assert!(block_on(validator.validate(&plan, "user-1")));
    }

    #[test]
    fn validation_matches_sum_comparison(
        amounts in proptest::collection::vec(0i64..500_000, 0..8),
        available in 0i64..2_000_000,
    ) {
        let plan: AllocationPlan = amounts
            .iter()
            .enumerate()
            .map(|(i, cents)| (format!("goal-{}", i), Decimal::new(*cents, 2)))
            .collect();
        let available = Decimal::new(available, 2);
        let validator = AllocationValidator::new(Arc::new(FixedFunds(available)));

        let expected = plan.total() <= available;
        prop_assert_eq!(block_on(validator.validate(&plan, "user-1")), expected);
    }
}
