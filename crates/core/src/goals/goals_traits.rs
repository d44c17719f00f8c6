use crate::errors::Result;
use crate::goals::goals_model::Goal;
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Lists the user's active goals in storage order.
    async fn list_active_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
}
