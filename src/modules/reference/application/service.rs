use std::sync::Arc;

use crate::log_debug;
use crate::modules::reference::domain::{Genre, GenreRepository, Mpa, MpaRepository};
use crate::shared::errors::{AppError, AppResult};

/// Read-only lookup over the fixed genre and MPA rating catalogs.
pub struct ReferenceService {
    genre_repo: Arc<dyn GenreRepository>,
    mpa_repo: Arc<dyn MpaRepository>,
}

impl ReferenceService {
    pub fn new(genre_repo: Arc<dyn GenreRepository>, mpa_repo: Arc<dyn MpaRepository>) -> Self {
        Self {
            genre_repo,
            mpa_repo,
        }
    }

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.genre_repo.find_all().await
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<Genre> {
        log_debug!("Looking up genre {}", id);
        self.genre_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))
    }

    pub async fn list_mpa_ratings(&self) -> AppResult<Vec<Mpa>> {
        self.mpa_repo.find_all().await
    }

    pub async fn get_mpa_rating(&self, id: i32) -> AppResult<Mpa> {
        log_debug!("Looking up MPA rating {}", id);
        self.mpa_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("MPA rating with id {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::reference::domain::repositories::{MockGenreRepository, MockMpaRepository};

    #[tokio::test]
    async fn unknown_genre_id_is_not_found() {
        let mut genre_repo = MockGenreRepository::new();
        genre_repo.expect_find_by_id().returning(|_| Ok(None));
        let mpa_repo = MockMpaRepository::new();

        let service = ReferenceService::new(Arc::new(genre_repo), Arc::new(mpa_repo));

        let err = service.get_genre(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn known_mpa_id_resolves() {
        let genre_repo = MockGenreRepository::new();
        let mut mpa_repo = MockMpaRepository::new();
        mpa_repo.expect_find_by_id().returning(|id| {
            Ok(Some(Mpa {
                id,
                name: "PG".to_string(),
            }))
        });

        let service = ReferenceService::new(Arc::new(genre_repo), Arc::new(mpa_repo));

        let mpa = service.get_mpa_rating(2).await.unwrap();
        assert_eq!(mpa.name, "PG");
    }
}
