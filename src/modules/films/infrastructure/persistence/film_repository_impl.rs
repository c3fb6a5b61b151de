use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::log_debug;
use crate::modules::films::domain::entities::{Film, FilmDraft};
use crate::modules::films::domain::repositories::FilmRepository;
use crate::modules::films::infrastructure::models::{
    FilmChangeset, FilmRow, NewFilmGenreRow, NewFilmRow,
};
use crate::modules::reference::domain::Genre;
use crate::modules::reference::infrastructure::models::MpaRow;
use crate::schema::{film_genres, films, genres, mpa};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct FilmRepositoryImpl {
    db: Arc<Database>,
}

impl FilmRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Swap the film's genre associations for the given set. Prior rows are
    /// replaced, never merged.
    fn replace_genres_blocking(
        conn: &mut diesel::PgConnection,
        film_id: i64,
        genre_ids: &[i32],
    ) -> AppResult<()> {
        diesel::delete(film_genres::table.filter(film_genres::film_id.eq(film_id)))
            .execute(conn)?;

        if genre_ids.is_empty() {
            return Ok(());
        }

        let rows: Vec<NewFilmGenreRow> = genre_ids
            .iter()
            .map(|genre_id| NewFilmGenreRow {
                film_id,
                genre_id: *genre_id,
            })
            .collect();

        diesel::insert_into(film_genres::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(conn)?;

        Ok(())
    }

    /// Batch-load genre sets for the given film rows and assemble entities.
    /// A film with no genre rows gets an empty set.
    fn attach_genres_blocking(
        conn: &mut diesel::PgConnection,
        rows: Vec<(FilmRow, MpaRow)>,
    ) -> AppResult<Vec<Film>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let film_ids: Vec<i64> = rows.iter().map(|(f, _)| f.id).collect();

        let genre_rows = film_genres::table
            .inner_join(genres::table)
            .filter(film_genres::film_id.eq_any(&film_ids))
            .order((film_genres::film_id.asc(), genres::id.asc()))
            .select((film_genres::film_id, (genres::id, genres::name)))
            .load::<(i64, (i32, String))>(conn)?;

        let mut by_film: HashMap<i64, Vec<Genre>> = HashMap::new();
        for (film_id, (id, name)) in genre_rows {
            by_film.entry(film_id).or_default().push(Genre { id, name });
        }

        Ok(rows
            .into_iter()
            .map(|(film_row, mpa_row)| {
                let genres = by_film.remove(&film_row.id).unwrap_or_default();
                film_row.into_entity(mpa_row.into_entity(), genres)
            })
            .collect())
    }
}

#[async_trait]
impl FilmRepository for FilmRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Film>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Film>> {
            let mut conn = db.get_connection()?;
            let rows = films::table
                .inner_join(mpa::table)
                .order(films::id.asc())
                .load::<(FilmRow, MpaRow)>(&mut conn)?;
            Self::attach_genres_blocking(&mut conn, rows)
        })
        .await?
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Film>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Film>> {
            let mut conn = db.get_connection()?;
            let row = films::table
                .inner_join(mpa::table)
                .filter(films::id.eq(id))
                .first::<(FilmRow, MpaRow)>(&mut conn)
                .optional()?;

            match row {
                Some(pair) => {
                    let films = Self::attach_genres_blocking(&mut conn, vec![pair])?;
                    Ok(films.into_iter().next())
                }
                None => Ok(None),
            }
        })
        .await?
    }

    async fn create(&self, draft: FilmDraft) -> AppResult<Film> {
        let db = Arc::clone(&self.db);
        let new_row = NewFilmRow::from(&draft);
        let genre_ids: Vec<i32> = draft.genres.iter().map(|g| g.id).collect();

        let row = task::spawn_blocking(move || -> AppResult<FilmRow> {
            let mut conn = db.get_connection()?;
            conn.transaction::<FilmRow, AppError, _>(|conn| {
                let row = diesel::insert_into(films::table)
                    .values(&new_row)
                    .get_result::<FilmRow>(conn)?;
                Self::replace_genres_blocking(conn, row.id, &genre_ids)?;
                Ok(row)
            })
        })
        .await??;

        log_debug!("Inserted film row with id {}", row.id);

        // Assemble from the resolved draft instead of querying again.
        Ok(row.into_entity(draft.mpa, draft.genres))
    }

    async fn update(&self, film: &Film) -> AppResult<Option<Film>> {
        let db = Arc::clone(&self.db);
        let id = film.id;
        let changes = FilmChangeset::from(film);
        let genre_ids: Vec<i32> = film.genres.iter().map(|g| g.id).collect();

        let row = task::spawn_blocking(move || -> AppResult<Option<FilmRow>> {
            let mut conn = db.get_connection()?;
            conn.transaction::<Option<FilmRow>, AppError, _>(|conn| {
                let row = diesel::update(films::table.filter(films::id.eq(id)))
                    .set(&changes)
                    .get_result::<FilmRow>(conn)
                    .optional()?;

                if let Some(updated) = &row {
                    Self::replace_genres_blocking(conn, updated.id, &genre_ids)?;
                }
                Ok(row)
            })
        })
        .await??;

        Ok(row.map(|r| r.into_entity(film.mpa.clone(), film.genres.clone())))
    }
}
