//! Planning module - available funds, priority allocation and plan validation.

mod allocation_validator;
mod funds_calculator;
mod planning_model;
mod planning_service;
mod planning_traits;
mod priority_allocator;

pub use allocation_validator::AllocationValidator;
pub use funds_calculator::FundsAvailabilityCalculator;
pub use planning_model::{AllocationCheck, AllocationProposal};
pub use planning_service::GoalPlanningService;
pub use planning_traits::{AllocationValidatorTrait, FundsAvailabilityTrait, GoalPlanningServiceTrait};
pub use priority_allocator::PriorityAllocator;
