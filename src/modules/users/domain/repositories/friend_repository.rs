use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Symmetric friendship edges. Every write touches both directions in one
/// logical operation so that no caller can observe an asymmetric state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendRepository: Send + Sync {
    /// Record the edge in both directions. Adding an existing edge is a no-op.
    async fn add_friend(&self, user_id: i64, friend_id: i64) -> AppResult<()>;
    /// Remove the edge in both directions. Removing an absent edge is a no-op.
    async fn delete_friend(&self, user_id: i64, friend_id: i64) -> AppResult<()>;
    async fn find_friend_ids(&self, user_id: i64) -> AppResult<Vec<i64>>;
}
