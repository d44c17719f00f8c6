use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::reporting_model::CategorySpending;
use crate::categories::CategoryResolverTrait;
use crate::transactions::Transaction;

#[async_trait]
pub trait SpendingBreakdownServiceTrait: Send + Sync {
    /// Sums outflows per detailed category, largest first.
    async fn spending_by_category(
        &self,
        user_id: &str,
        transactions: &[Transaction],
    ) -> Vec<CategorySpending>;
}

pub struct SpendingBreakdownService {
    resolver: Arc<dyn CategoryResolverTrait>,
}

impl SpendingBreakdownService {
    pub fn new(resolver: Arc<dyn CategoryResolverTrait>) -> Self {
        SpendingBreakdownService { resolver }
    }
}

#[async_trait]
impl SpendingBreakdownServiceTrait for SpendingBreakdownService {
    async fn spending_by_category(
        &self,
        user_id: &str,
        transactions: &[Transaction],
    ) -> Vec<CategorySpending> {
        let mut by_category: HashMap<String, CategorySpending> = HashMap::new();
        let mut total = Decimal::ZERO;

        for transaction in transactions.iter().filter(|t| t.is_outflow()) {
            let category = self
                .resolver
                .resolve(
                    user_id,
                    transaction.provider_category_id.as_deref(),
                    transaction.category.as_deref(),
                )
                .await;
            let amount = transaction.amount.abs();
            total += amount;

            by_category
                .entry(category.clone())
                .and_modify(|entry| {
                    entry.amount += amount;
                    entry.transaction_count += 1;
                })
                .or_insert_with(|| CategorySpending {
                    category,
                    amount,
                    transaction_count: 1,
                    percentage: Decimal::ZERO,
                });
        }

        let mut breakdown: Vec<CategorySpending> = by_category.into_values().collect();
        for entry in breakdown.iter_mut() {
            if total > Decimal::ZERO {
                entry.percentage = entry.amount / total * dec!(100);
            }
            entry.round_for_display();
        }
        breakdown.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        debug!(
            "Spending breakdown for user {}: {} categories, total {}",
            user_id,
            breakdown.len(),
            total
        );
        breakdown
    }
}
