use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, warn};
use rust_decimal::Decimal;

use super::planning_traits::FundsAvailabilityTrait;
use crate::accounts::{Account, AccountRepositoryTrait};
use crate::settings::{PlanningConfig, UserPreferenceRepositoryTrait};

/// Computes `max(0, liquid balances - safety buffer)` for a user.
pub struct FundsAvailabilityCalculator {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    preference_repository: Arc<dyn UserPreferenceRepositoryTrait>,
    config: PlanningConfig,
}

impl FundsAvailabilityCalculator {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        preference_repository: Arc<dyn UserPreferenceRepositoryTrait>,
        config: PlanningConfig,
    ) -> Self {
        FundsAvailabilityCalculator {
            account_repository,
            preference_repository,
            config,
        }
    }

    fn liquid_total(accounts: &[Account]) -> Decimal {
        accounts
            .iter()
            .filter(|account| account.is_liquid())
            .map(Account::spendable_balance)
            .sum()
    }

    async fn safety_buffer(&self, user_id: &str) -> Decimal {
        let default_buffer = self.config.default_safety_buffer;
        match self
            .preference_repository
            .get_user_buffer_preference(user_id)
            .await
        {
            Ok(Some(buffer)) if buffer >= Decimal::ZERO => buffer,
            Ok(Some(buffer)) => {
                warn!(
                    "Ignoring negative safety buffer {} for user {}; using default {}",
                    buffer, user_id, default_buffer
                );
                default_buffer
            }
            Ok(None) => default_buffer,
            Err(e) => {
                warn!(
                    "Failed to load safety buffer for user {}: {}. Using default {}",
                    user_id, e, default_buffer
                );
                default_buffer
            }
        }
    }
}

#[async_trait]
impl FundsAvailabilityTrait for FundsAvailabilityCalculator {
    async fn available_funds(&self, user_id: &str) -> Decimal {
        let accounts = match self.account_repository.list_liquid_accounts(user_id).await {
            Ok(accounts) => accounts,
            Err(e) => {
                error!(
                    "Failed to list liquid accounts for user {}: {}. Reporting no available funds",
                    user_id, e
                );
                return Decimal::ZERO;
            }
        };

        let liquid = Self::liquid_total(&accounts);
        let buffer = self.safety_buffer(user_id).await;
        let available = (liquid - buffer).max(Decimal::ZERO);

        debug!(
            "Available funds for user {}: liquid {} - buffer {} => {}",
            user_id, liquid, buffer, available
        );
        available
    }
}
