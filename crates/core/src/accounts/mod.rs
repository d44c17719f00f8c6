//! Accounts module - domain models, liquidity rules, and repository traits.

mod accounts_constants;
mod accounts_model;
mod accounts_traits;

// Re-export the public interface
pub use accounts_constants::*;
pub use accounts_model::{Account, AccountType};
pub use accounts_traits::AccountRepositoryTrait;
