use crate::modules::films::domain::entities::{Film, FilmDraft};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// All films with their MPA rating and genre sets populated.
    async fn find_all(&self) -> AppResult<Vec<Film>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Film>>;
    /// Persist a new film and its genre associations, returning the record
    /// with its assigned id.
    async fn create(&self, draft: FilmDraft) -> AppResult<Film>;
    /// Replace the stored record wholesale; prior genre associations are
    /// replaced, not merged. Returns `None` when the id is unknown.
    async fn update(&self, film: &Film) -> AppResult<Option<Film>>;
}
