use log::debug;
use rust_decimal::Decimal;

use crate::goals::{AllocationPlan, Goal};

/// Greedy allocator that funds goals in priority order.
///
/// Goals are stable-sorted by ascending priority rank with unranked goals
/// last. Each goal receives `min(need, remaining)` until funds run out.
/// Fully funded goals are skipped wherever they sit in the order. The
/// allocator does not filter inactive goals; callers pass only active ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityAllocator;

impl PriorityAllocator {
    pub fn new() -> Self {
        PriorityAllocator
    }

    pub fn allocate(&self, goals: &[Goal], available: Decimal) -> AllocationPlan {
        let mut ordered: Vec<&Goal> = goals.iter().collect();
        // Vec::sort_by_key is stable
        ordered.sort_by_key(|goal| (goal.priority.is_none(), goal.priority));

        let mut plan = AllocationPlan::new();
        let mut remaining = available.max(Decimal::ZERO);

        for goal in ordered {
            if remaining.is_zero() {
                break;
            }
            let need = goal.remaining_need();
            if need.is_zero() {
                continue;
            }
            let amount = need.min(remaining);
            plan.add(goal.id.as_str(), amount);
            remaining -= amount;
        }

        debug!(
            "Allocated {} of {} across {} goals",
            plan.total(),
            available,
            plan.len()
        );
        plan
    }
}
