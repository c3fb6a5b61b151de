use crate::modules::users::domain::entities::{User, UserDraft};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;
    /// Resolve a batch of user ids; unknown ids are simply absent from the result.
    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<User>>;
    /// Persist a new user and return the record with its assigned id.
    async fn create(&self, draft: UserDraft) -> AppResult<User>;
    /// Replace the stored record wholesale. Returns `None` when the id is unknown.
    async fn update(&self, user: &User) -> AppResult<Option<User>>;
}
