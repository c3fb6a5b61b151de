use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::modules::films::domain::entities::{Film, FilmDraft};
use crate::modules::films::domain::repositories::FilmRepository;
use crate::shared::errors::AppResult;

/// Map-backed film store. Ids are handed out by an atomic counter starting
/// at 1, matching the relational backend's sequence.
pub struct InMemoryFilmRepository {
    films: DashMap<i64, Film>,
    next_id: AtomicI64,
}

impl InMemoryFilmRepository {
    pub fn new() -> Self {
        Self {
            films: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryFilmRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FilmRepository for InMemoryFilmRepository {
    async fn find_all(&self) -> AppResult<Vec<Film>> {
        let mut films: Vec<Film> = self.films.iter().map(|e| e.value().clone()).collect();
        films.sort_by_key(|f| f.id);
        Ok(films)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Film>> {
        Ok(self.films.get(&id).map(|e| e.value().clone()))
    }

    async fn create(&self, draft: FilmDraft) -> AppResult<Film> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let film = Film {
            id,
            name: draft.name,
            description: draft.description,
            release_date: draft.release_date,
            duration: draft.duration,
            mpa: draft.mpa,
            genres: draft.genres,
        };
        self.films.insert(id, film.clone());
        Ok(film)
    }

    async fn update(&self, film: &Film) -> AppResult<Option<Film>> {
        match self.films.get_mut(&film.id) {
            Some(mut entry) => {
                *entry = film.clone();
                Ok(Some(film.clone()))
            }
            None => Ok(None),
        }
    }
}
