use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::log_debug;
use crate::modules::users::domain::entities::{User, UserDraft};
use crate::modules::users::domain::repositories::UserRepository;
use crate::modules::users::infrastructure::models::{NewUserRow, UserChangeset, UserRow};
use crate::schema::users;
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<UserRow>> {
            let mut conn = db.get_connection()?;
            let rows = users::table
                .order(users::id.asc())
                .load::<UserRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(UserRow::into_entity).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<UserRow>> {
            let mut conn = db.get_connection()?;
            let row = users::table
                .filter(users::id.eq(id))
                .first::<UserRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(UserRow::into_entity))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<UserRow>> {
            let mut conn = db.get_connection()?;
            let rows = users::table
                .filter(users::id.eq_any(&ids))
                .order(users::id.asc())
                .load::<UserRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(UserRow::into_entity).collect())
    }

    async fn create(&self, draft: UserDraft) -> AppResult<User> {
        let db = Arc::clone(&self.db);
        let new_row = NewUserRow::from(draft);

        let row = task::spawn_blocking(move || -> AppResult<UserRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(users::table)
                .values(&new_row)
                .get_result::<UserRow>(&mut conn)?;
            Ok(row)
        })
        .await??;

        log_debug!("Inserted user row with id {}", row.id);
        Ok(row.into_entity())
    }

    async fn update(&self, user: &User) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let id = user.id;
        let changes = UserChangeset::from(user);

        let row = task::spawn_blocking(move || -> AppResult<Option<UserRow>> {
            let mut conn = db.get_connection()?;
            let row = diesel::update(users::table.filter(users::id.eq(id)))
                .set(&changes)
                .get_result::<UserRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(UserRow::into_entity))
    }
}
