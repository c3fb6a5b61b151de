use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::reference::domain::{Genre, Mpa};

/// A film in the catalog. Carries exactly one MPA rating and a deduplicated
/// genre set; like counts live in the like ledger, never on the entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Film {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa: Mpa,
    pub genres: Vec<Genre>,
}

/// Catalog candidate as a caller submits it: the rating and genres arrive as
/// reference ids and are resolved against the reference catalogs before
/// anything is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFilm {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: i32,
    pub genre_ids: Vec<i32>,
}

/// Fully validated and resolved shape handed to a storage backend, which
/// assigns the id.
#[derive(Debug, Clone)]
pub struct FilmDraft {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa: Mpa,
    pub genres: Vec<Genre>,
}
