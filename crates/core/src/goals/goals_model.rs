//! Goals domain models.

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    /// Lower ranks are funded first; `None` sorts after every ranked goal
    pub priority: Option<i32>,
    pub is_active: bool,
}

impl Goal {
    /// Amount still needed to reach the target.
    ///
    /// Negative targets and negative current amounts are clamped to zero,
    /// so the result is never negative and never exceeds the target.
    pub fn remaining_need(&self) -> Decimal {
        let target = self.target_amount.max(Decimal::ZERO);
        let current = self.current_amount.max(Decimal::ZERO);
        (target - current).max(Decimal::ZERO)
    }

    pub fn is_fully_funded(&self) -> bool {
        self.remaining_need().is_zero()
    }
}

/// A single proposed contribution to a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalAllocation {
    pub goal_id: String,
    pub amount: Decimal,
}

/// Ephemeral mapping of goal id to proposed amount.
///
/// Entries keep the order in which goals were funded. Goals that receive
/// nothing are absent rather than mapped to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationPlan {
    allocations: Vec<GoalAllocation>,
}

impl AllocationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or increases the allocation for a goal. Non-positive amounts are ignored.
    ///
    /// A repeated goal id is merged into the existing entry and logged.
    pub fn add(&mut self, goal_id: impl Into<String>, amount: Decimal) {
        if amount <= Decimal::ZERO {
            return;
        }
        let goal_id = goal_id.into();
        match self.allocations.iter_mut().find(|a| a.goal_id == goal_id) {
            Some(existing) => {
                warn!(
                    "Merging duplicate allocation for goal {}: {} + {}",
                    goal_id, existing.amount, amount
                );
                existing.amount += amount;
            }
            None => self.allocations.push(GoalAllocation { goal_id, amount }),
        }
    }

    pub fn get(&self, goal_id: &str) -> Option<Decimal> {
        self.allocations
            .iter()
            .find(|a| a.goal_id == goal_id)
            .map(|a| a.amount)
    }

    pub fn contains(&self, goal_id: &str) -> bool {
        self.get(goal_id).is_some()
    }

    pub fn total(&self) -> Decimal {
        self.allocations.iter().map(|a| a.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GoalAllocation> {
        self.allocations.iter()
    }
}

impl FromIterator<(String, Decimal)> for AllocationPlan {
    /// Builds a plan from raw pairs without filtering, so callers can
    /// submit arbitrary (including invalid) plans for validation.
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self {
            allocations: iter
                .into_iter()
                .map(|(goal_id, amount)| GoalAllocation { goal_id, amount })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn goal(target: Decimal, current: Decimal) -> Goal {
        Goal {
            id: "g1".to_string(),
            user_id: "u1".to_string(),
            name: "Emergency fund".to_string(),
            target_amount: target,
            current_amount: current,
            priority: Some(1),
            is_active: true,
        }
    }

    #[test]
    fn remaining_need_is_clamped() {
        assert_eq!(goal(dec!(5000), dec!(1200)).remaining_need(), dec!(3800));
        assert_eq!(goal(dec!(5000), dec!(6000)).remaining_need(), dec!(0));
        assert_eq!(goal(dec!(-100), dec!(0)).remaining_need(), dec!(0));
        assert_eq!(goal(dec!(1000), dec!(-50)).remaining_need(), dec!(1000));
        assert!(goal(dec!(10), dec!(10)).is_fully_funded());
    }

    #[test]
    fn plan_skips_non_positive_amounts_and_merges_duplicates() {
        let mut plan = AllocationPlan::new();
        plan.add("g1", dec!(100));
        plan.add("g2", dec!(0));
        plan.add("g3", dec!(-5));
        plan.add("g1", dec!(50));

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.get("g1"), Some(dec!(150)));
        assert!(!plan.contains("g2"));
        assert_eq!(plan.total(), dec!(150));
    }

    #[test]
    fn duplicate_goal_ids_merge_in_place() {
        let mut plan = AllocationPlan::new();
        plan.add("g1", dec!(40));
        plan.add("g2", dec!(10));
        plan.add("g1", dec!(2.5));

        let ids: Vec<&str> = plan.iter().map(|a| a.goal_id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "g2"]);
        assert_eq!(plan.get("g1"), Some(dec!(42.5)));
        assert_eq!(plan.total(), dec!(52.5));
    }

    #[test]
    fn plan_from_pairs_keeps_everything() {
        let plan: AllocationPlan = vec![("g1".to_string(), dec!(10)), ("g2".to_string(), dec!(-3))]
            .into_iter()
            .collect();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.total(), dec!(7));
        assert_eq!(plan.get("g2"), Some(dec!(-3)));
    }
}
