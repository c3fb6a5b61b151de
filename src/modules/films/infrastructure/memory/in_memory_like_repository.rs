use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::modules::films::domain::repositories::LikeRepository;
use crate::shared::errors::{AppError, AppResult};

/// Like ledger keyed by film id. A `HashSet` per film makes repeated likes
/// collapse naturally.
pub struct InMemoryLikeRepository {
    likes: Mutex<HashMap<i64, HashSet<i64>>>,
}

impl InMemoryLikeRepository {
    pub fn new() -> Self {
        Self {
            likes: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<i64, HashSet<i64>>>> {
        self.likes
            .lock()
            .map_err(|_| AppError::InternalError("Like map lock poisoned".to_string()))
    }
}

impl Default for InMemoryLikeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn add_like(&self, film_id: i64, user_id: i64) -> AppResult<()> {
        let mut likes = self.lock()?;
        likes.entry(film_id).or_default().insert(user_id);
        Ok(())
    }

    async fn delete_like(&self, film_id: i64, user_id: i64) -> AppResult<()> {
        let mut likes = self.lock()?;
        if let Some(set) = likes.get_mut(&film_id) {
            set.remove(&user_id);
        }
        Ok(())
    }

    async fn count_for_film(&self, film_id: i64) -> AppResult<i64> {
        let likes = self.lock()?;
        Ok(likes.get(&film_id).map(|set| set.len() as i64).unwrap_or(0))
    }

    async fn counts_by_film(&self) -> AppResult<HashMap<i64, i64>> {
        let likes = self.lock()?;
        Ok(likes
            .iter()
            .map(|(film_id, set)| (*film_id, set.len() as i64))
            .collect())
    }
}
