use std::collections::HashMap;

use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// The like ledger: which users liked which films. Counts are derived on
/// read; nothing here mutates film or user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Record a like. Liking twice has the same effect as once.
    async fn add_like(&self, film_id: i64, user_id: i64) -> AppResult<()>;
    /// Remove a like. Removing an absent like is a no-op.
    async fn delete_like(&self, film_id: i64, user_id: i64) -> AppResult<()>;
    async fn count_for_film(&self, film_id: i64) -> AppResult<i64>;
    /// Like counts keyed by film id; films with no likes are absent.
    async fn counts_by_film(&self) -> AppResult<HashMap<i64, i64>>;
}
