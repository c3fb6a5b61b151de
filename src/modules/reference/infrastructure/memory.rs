use async_trait::async_trait;

use crate::modules::reference::domain::{Genre, GenreRepository, Mpa, MpaRepository};
use crate::shared::errors::AppResult;

/// The same fixed catalogs the relational backend seeds through migrations.
fn seed_genres() -> Vec<Genre> {
    ["Comedy", "Drama", "Cartoon", "Thriller", "Documentary", "Action"]
        .iter()
        .enumerate()
        .map(|(i, name)| Genre {
            id: i as i32 + 1,
            name: (*name).to_string(),
        })
        .collect()
}

fn seed_mpa_ratings() -> Vec<Mpa> {
    ["G", "PG", "PG-13", "R", "NC-17"]
        .iter()
        .enumerate()
        .map(|(i, name)| Mpa {
            id: i as i32 + 1,
            name: (*name).to_string(),
        })
        .collect()
}

pub struct InMemoryGenreRepository {
    genres: Vec<Genre>,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self {
            genres: seed_genres(),
        }
    }
}

impl Default for InMemoryGenreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    async fn find_all(&self) -> AppResult<Vec<Genre>> {
        Ok(self.genres.clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Genre>> {
        Ok(self.genres.iter().find(|g| g.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Genre>> {
        Ok(self
            .genres
            .iter()
            .filter(|g| ids.contains(&g.id))
            .cloned()
            .collect())
    }
}

pub struct InMemoryMpaRepository {
    ratings: Vec<Mpa>,
}

impl InMemoryMpaRepository {
    pub fn new() -> Self {
        Self {
            ratings: seed_mpa_ratings(),
        }
    }
}

impl Default for InMemoryMpaRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MpaRepository for InMemoryMpaRepository {
    async fn find_all(&self) -> AppResult<Vec<Mpa>> {
        Ok(self.ratings.clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Mpa>> {
        Ok(self.ratings.iter().find(|m| m.id == id).cloned())
    }
}
