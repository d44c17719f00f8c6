//! Goals module - savings goals, allocation plans, and repository traits.

mod goals_model;
mod goals_traits;

pub use goals_model::{AllocationPlan, Goal, GoalAllocation};
pub use goals_traits::GoalRepositoryTrait;
