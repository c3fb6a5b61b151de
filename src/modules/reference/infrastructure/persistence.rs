use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::reference::domain::{Genre, GenreRepository, Mpa, MpaRepository};
use crate::modules::reference::infrastructure::models::{GenreRow, MpaRow};
use crate::schema::{genres, mpa};
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct GenreRepositoryImpl {
    db: Arc<Database>,
}

impl GenreRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenreRepository for GenreRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Genre>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<GenreRow>> {
            let mut conn = db.get_connection()?;
            let rows = genres::table
                .order(genres::id.asc())
                .load::<GenreRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(GenreRow::into_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Genre>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<GenreRow>> {
            let mut conn = db.get_connection()?;
            let row = genres::table
                .filter(genres::id.eq(id))
                .first::<GenreRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(GenreRow::into_entity))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Genre>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<GenreRow>> {
            let mut conn = db.get_connection()?;
            let rows = genres::table
                .filter(genres::id.eq_any(&ids))
                .order(genres::id.asc())
                .load::<GenreRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(GenreRow::into_entity).collect())
    }
}

pub struct MpaRepositoryImpl {
    db: Arc<Database>,
}

impl MpaRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MpaRepository for MpaRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Mpa>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<MpaRow>> {
            let mut conn = db.get_connection()?;
            let rows = mpa::table.order(mpa::id.asc()).load::<MpaRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(MpaRow::into_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Mpa>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<MpaRow>> {
            let mut conn = db.get_connection()?;
            let row = mpa::table
                .filter(mpa::id.eq(id))
                .first::<MpaRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(MpaRow::into_entity))
    }
}
