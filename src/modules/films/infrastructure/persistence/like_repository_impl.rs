use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::prelude::*;
use tokio::task;

use crate::modules::films::domain::repositories::LikeRepository;
use crate::schema::likes;
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct LikeRepositoryImpl {
    db: Arc<Database>,
}

impl LikeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LikeRepository for LikeRepositoryImpl {
    async fn add_like(&self, film_id: i64, user_id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(likes::table)
                .values((likes::film_id.eq(film_id), likes::user_id.eq(user_id)))
                .on_conflict_do_nothing()
                .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn delete_like(&self, film_id: i64, user_id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(
                likes::table.filter(
                    likes::film_id
                        .eq(film_id)
                        .and(likes::user_id.eq(user_id)),
                ),
            )
            .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn count_for_film(&self, film_id: i64) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let count = likes::table
                .filter(likes::film_id.eq(film_id))
                .count()
                .get_result::<i64>(&mut conn)?;
            Ok(count)
        })
        .await?
    }

    async fn counts_by_film(&self) -> AppResult<HashMap<i64, i64>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<HashMap<i64, i64>> {
            let mut conn = db.get_connection()?;
            let counts = likes::table
                .group_by(likes::film_id)
                .select((likes::film_id, count_star()))
                .load::<(i64, i64)>(&mut conn)?;
            Ok(counts.into_iter().collect())
        })
        .await?
    }
}
