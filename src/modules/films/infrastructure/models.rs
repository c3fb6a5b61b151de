use chrono::NaiveDate;
use diesel::prelude::*;

use crate::modules::films::domain::entities::{Film, FilmDraft};
use crate::modules::reference::domain::{Genre, Mpa};
use crate::schema::{film_genres, films};

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = films)]
pub struct FilmRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: i32,
}

impl FilmRow {
    pub fn into_entity(self, mpa: Mpa, genres: Vec<Genre>) -> Film {
        Film {
            id: self.id,
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
            mpa,
            genres,
        }
    }
}

/// Insert payload (write); the id comes from the database sequence.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = films)]
pub struct NewFilmRow {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: i32,
}

impl From<&FilmDraft> for NewFilmRow {
    fn from(draft: &FilmDraft) -> Self {
        Self {
            name: draft.name.clone(),
            description: draft.description.clone(),
            release_date: draft.release_date,
            duration: draft.duration,
            mpa_id: draft.mpa.id,
        }
    }
}

/// Update payload (write) — excludes `id`.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = films)]
pub struct FilmChangeset {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: i32,
}

impl From<&Film> for FilmChangeset {
    fn from(film: &Film) -> Self {
        Self {
            name: film.name.clone(),
            description: film.description.clone(),
            release_date: film.release_date,
            duration: film.duration,
            mpa_id: film.mpa.id,
        }
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = film_genres)]
pub struct NewFilmGenreRow {
    pub film_id: i64,
    pub genre_id: i32,
}
