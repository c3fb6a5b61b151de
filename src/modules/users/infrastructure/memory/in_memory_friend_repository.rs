use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::modules::users::domain::repositories::FriendRepository;
use crate::shared::errors::{AppError, AppResult};

/// Adjacency sets guarded by one mutex: both directions of an edge mutate
/// inside the same critical section.
pub struct InMemoryFriendRepository {
    edges: Mutex<HashMap<i64, HashSet<i64>>>,
}

impl InMemoryFriendRepository {
    pub fn new() -> Self {
        Self {
            edges: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<i64, HashSet<i64>>>> {
        self.edges
            .lock()
            .map_err(|_| AppError::InternalError("Friend map lock poisoned".to_string()))
    }
}

impl Default for InMemoryFriendRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FriendRepository for InMemoryFriendRepository {
    async fn add_friend(&self, user_id: i64, friend_id: i64) -> AppResult<()> {
        let mut edges = self.lock()?;
        edges.entry(user_id).or_default().insert(friend_id);
        edges.entry(friend_id).or_default().insert(user_id);
        Ok(())
    }

    async fn delete_friend(&self, user_id: i64, friend_id: i64) -> AppResult<()> {
        let mut edges = self.lock()?;
        if let Some(set) = edges.get_mut(&user_id) {
            set.remove(&friend_id);
        }
        if let Some(set) = edges.get_mut(&friend_id) {
            set.remove(&user_id);
        }
        Ok(())
    }

    async fn find_friend_ids(&self, user_id: i64) -> AppResult<Vec<i64>> {
        let edges = self.lock()?;
        let mut ids: Vec<i64> = edges
            .get(&user_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        ids.sort_unstable();
        Ok(ids)
    }
}
