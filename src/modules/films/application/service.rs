use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::films::domain::{Film, FilmDraft, FilmRepository, LikeRepository, NewFilm};
use crate::modules::reference::domain::{Genre, GenreRepository, Mpa, MpaRepository};
use crate::modules::users::application::UserService;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Number of films `popular_films` callers get when they have no opinion.
pub const DEFAULT_POPULAR_COUNT: usize = 10;

/// Film catalog, like ledger and popularity ranking.
pub struct FilmService {
    film_repo: Arc<dyn FilmRepository>,
    like_repo: Arc<dyn LikeRepository>,
    genre_repo: Arc<dyn GenreRepository>,
    mpa_repo: Arc<dyn MpaRepository>,
    user_service: Arc<UserService>,
}

impl FilmService {
    pub fn new(
        film_repo: Arc<dyn FilmRepository>,
        like_repo: Arc<dyn LikeRepository>,
        genre_repo: Arc<dyn GenreRepository>,
        mpa_repo: Arc<dyn MpaRepository>,
        user_service: Arc<UserService>,
    ) -> Self {
        Self {
            film_repo,
            like_repo,
            genre_repo,
            mpa_repo,
            user_service,
        }
    }

    pub async fn list_films(&self) -> AppResult<Vec<Film>> {
        self.film_repo.find_all().await
    }

    pub async fn create_film(&self, candidate: NewFilm) -> AppResult<Film> {
        Self::validate_film(&candidate)?;
        let draft = self.resolve_references(candidate).await?;

        let film = self.film_repo.create(draft).await?;
        log_info!("Created film {} (id {})", film.name, film.id);
        Ok(film)
    }

    /// Wholesale replace of the stored record; the id must already exist.
    pub async fn update_film(&self, id: i64, candidate: NewFilm) -> AppResult<Film> {
        Self::validate_film(&candidate)?;
        let draft = self.resolve_references(candidate).await?;

        let film = Film {
            id,
            name: draft.name,
            description: draft.description,
            release_date: draft.release_date,
            duration: draft.duration,
            mpa: draft.mpa,
            genres: draft.genres,
        };

        let film = self
            .film_repo
            .update(&film)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Film with id {} not found", id)))?;
        log_info!("Updated film {} (id {})", film.name, film.id);
        Ok(film)
    }

    pub async fn get_film(&self, id: i64) -> AppResult<Film> {
        if id <= 0 {
            return Err(AppError::NotFound(format!(
                "Film id must be positive, got {}",
                id
            )));
        }
        self.film_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Film with id {} not found", id)))
    }

    pub async fn add_like(&self, film_id: i64, user_id: i64) -> AppResult<()> {
        let film = self.get_film(film_id).await?;
        let user = self.user_service.get_user(user_id).await?;
        self.like_repo.add_like(film_id, user_id).await?;
        log_info!("User {} liked film {}", user.name, film.name);
        Ok(())
    }

    pub async fn delete_like(&self, film_id: i64, user_id: i64) -> AppResult<()> {
        let film = self.get_film(film_id).await?;
        let user = self.user_service.get_user(user_id).await?;
        self.like_repo.delete_like(film_id, user_id).await?;
        log_info!("User {} removed the like from film {}", user.name, film.name);
        Ok(())
    }

    pub async fn like_count(&self, film_id: i64) -> AppResult<i64> {
        self.get_film(film_id).await?;
        self.like_repo.count_for_film(film_id).await
    }

    /// Films ordered by descending like count, truncated to `limit`.
    /// Films nobody liked count as zero and are still ranked.
    pub async fn popular_films(&self, limit: usize) -> AppResult<Vec<Film>> {
        log_debug!("Ranking films by popularity, limit {}", limit);
        let mut films = self.film_repo.find_all().await?;
        let counts = self.like_repo.counts_by_film().await?;

        films.sort_by_key(|f| Reverse(counts.get(&f.id).copied().unwrap_or(0)));
        films.truncate(limit);
        Ok(films)
    }

    fn validate_film(candidate: &NewFilm) -> AppResult<()> {
        Validator::validate_film_name(&candidate.name)?;
        Validator::validate_film_description(&candidate.description)?;
        Validator::validate_release_date(candidate.release_date)?;
        Validator::validate_duration(candidate.duration)?;
        Ok(())
    }

    /// Resolve the candidate's MPA and genre ids against the reference
    /// catalogs. Duplicate genre ids collapse; first-mention order survives.
    async fn resolve_references(&self, candidate: NewFilm) -> AppResult<FilmDraft> {
        let mpa = self.resolve_mpa(candidate.mpa_id).await?;

        let mut seen = HashSet::new();
        let ordered_ids: Vec<i32> = candidate
            .genre_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let genres = self.resolve_genres(&ordered_ids).await?;

        Ok(FilmDraft {
            name: candidate.name,
            description: candidate.description,
            release_date: candidate.release_date,
            duration: candidate.duration,
            mpa,
            genres,
        })
    }

    async fn resolve_mpa(&self, mpa_id: i32) -> AppResult<Mpa> {
        self.mpa_repo
            .find_by_id(mpa_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("MPA rating with id {} not found", mpa_id)))
    }

    async fn resolve_genres(&self, ordered_ids: &[i32]) -> AppResult<Vec<Genre>> {
        if ordered_ids.is_empty() {
            return Ok(Vec::new());
        }

        let found = self.genre_repo.find_by_ids(ordered_ids).await?;
        ordered_ids
            .iter()
            .map(|id| {
                found
                    .iter()
                    .find(|g| g.id == *id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::films::domain::repositories::film_repository::MockFilmRepository;
    use crate::modules::films::domain::repositories::like_repository::MockLikeRepository;
    use crate::modules::reference::domain::repositories::{MockGenreRepository, MockMpaRepository};
    use crate::modules::users::infrastructure::{InMemoryFriendRepository, InMemoryUserRepository};
    use chrono::NaiveDate;

    fn user_service() -> Arc<UserService> {
        Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryFriendRepository::new()),
        ))
    }

    fn candidate() -> NewFilm {
        NewFilm {
            name: "Arrival".to_string(),
            description: "A linguist decodes an alien language".to_string(),
            release_date: NaiveDate::from_ymd_opt(2016, 11, 11).unwrap(),
            duration: 116,
            mpa_id: 3,
            genre_ids: vec![2],
        }
    }

    fn service_with(
        film_repo: MockFilmRepository,
        mpa_repo: MockMpaRepository,
        genre_repo: MockGenreRepository,
    ) -> FilmService {
        FilmService::new(
            Arc::new(film_repo),
            Arc::new(MockLikeRepository::new()),
            Arc::new(genre_repo),
            Arc::new(mpa_repo),
            user_service(),
        )
    }

    #[tokio::test]
    async fn release_date_before_floor_is_rejected() {
        let mut film_repo = MockFilmRepository::new();
        film_repo.expect_create().never();

        let svc = service_with(film_repo, MockMpaRepository::new(), MockGenreRepository::new());

        let mut draft = candidate();
        draft.release_date = NaiveDate::from_ymd_opt(1895, 12, 27).unwrap();
        let err = svc.create_film(draft).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn unknown_mpa_id_is_not_found() {
        let mut film_repo = MockFilmRepository::new();
        film_repo.expect_create().never();
        let mut mpa_repo = MockMpaRepository::new();
        mpa_repo.expect_find_by_id().returning(|_| Ok(None));

        let svc = service_with(film_repo, mpa_repo, MockGenreRepository::new());

        let err = svc.create_film(candidate()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn unknown_genre_id_is_not_found() {
        let mut film_repo = MockFilmRepository::new();
        film_repo.expect_create().never();
        let mut mpa_repo = MockMpaRepository::new();
        mpa_repo.expect_find_by_id().returning(|id| {
            Ok(Some(Mpa {
                id,
                name: "PG-13".to_string(),
            }))
        });
        let mut genre_repo = MockGenreRepository::new();
        genre_repo.expect_find_by_ids().returning(|_| Ok(Vec::new()));

        let svc = service_with(film_repo, mpa_repo, genre_repo);

        let err = svc.create_film(candidate()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn duplicate_genre_ids_collapse_in_submission_order() {
        let mut film_repo = MockFilmRepository::new();
        film_repo
            .expect_create()
            .withf(|draft| draft.genres.iter().map(|g| g.id).collect::<Vec<_>>() == vec![2, 1])
            .returning(|draft| {
                Ok(Film {
                    id: 1,
                    name: draft.name,
                    description: draft.description,
                    release_date: draft.release_date,
                    duration: draft.duration,
                    mpa: draft.mpa,
                    genres: draft.genres,
                })
            });
        let mut mpa_repo = MockMpaRepository::new();
        mpa_repo.expect_find_by_id().returning(|id| {
            Ok(Some(Mpa {
                id,
                name: "PG-13".to_string(),
            }))
        });
        let mut genre_repo = MockGenreRepository::new();
        genre_repo.expect_find_by_ids().returning(|ids| {
            Ok(ids
                .iter()
                .map(|id| Genre {
                    id: *id,
                    name: format!("Genre {}", id),
                })
                .collect())
        });

        let svc = service_with(film_repo, mpa_repo, genre_repo);

        let mut draft = candidate();
        draft.genre_ids = vec![2, 1, 2, 1, 2];
        let film = svc.create_film(draft).await.unwrap();
        assert_eq!(film.genres.len(), 2);
    }
}
