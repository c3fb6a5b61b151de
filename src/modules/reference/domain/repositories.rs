use crate::modules::reference::domain::entities::{Genre, Mpa};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// All genres in the catalog, ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Genre>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Genre>>;
    /// Resolve a batch of genre ids; unknown ids are simply absent from the result.
    async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Genre>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MpaRepository: Send + Sync {
    /// All ratings in the catalog, ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Mpa>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Mpa>>;
}
