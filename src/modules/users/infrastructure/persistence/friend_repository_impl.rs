use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::users::domain::repositories::FriendRepository;
use crate::schema::friends;
use crate::shared::errors::AppResult;
use crate::shared::Database;

/// Stores one directed row per direction, two rows per symmetric edge.
/// Both rows are written (and removed) in a single statement so the edge is
/// never observable half-formed.
pub struct FriendRepositoryImpl {
    db: Arc<Database>,
}

impl FriendRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FriendRepository for FriendRepositoryImpl {
    async fn add_friend(&self, user_id: i64, friend_id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let both_directions = vec![
                (
                    friends::user_id.eq(user_id),
                    friends::friend_id.eq(friend_id),
                ),
                (
                    friends::user_id.eq(friend_id),
                    friends::friend_id.eq(user_id),
                ),
            ];
            diesel::insert_into(friends::table)
                .values(&both_directions)
                .on_conflict_do_nothing()
                .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn delete_friend(&self, user_id: i64, friend_id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(
                friends::table.filter(
                    friends::user_id
                        .eq(user_id)
                        .and(friends::friend_id.eq(friend_id))
                        .or(friends::user_id
                            .eq(friend_id)
                            .and(friends::friend_id.eq(user_id))),
                ),
            )
            .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn find_friend_ids(&self, user_id: i64) -> AppResult<Vec<i64>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<i64>> {
            let mut conn = db.get_connection()?;
            let ids = friends::table
                .filter(friends::user_id.eq(user_id))
                .order(friends::friend_id.asc())
                .select(friends::friend_id)
                .load::<i64>(&mut conn)?;
            Ok(ids)
        })
        .await?
    }
}
