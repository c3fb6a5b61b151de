use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::modules::users::domain::entities::{User, UserDraft};
use crate::modules::users::domain::repositories::UserRepository;
use crate::shared::errors::AppResult;

/// Map-backed user store. Ids are handed out by an atomic counter starting
/// at 1, matching the relational backend's sequence.
pub struct InMemoryUserRepository {
    users: DashMap<i64, User>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|e| e.value().clone()))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = ids
            .iter()
            .filter_map(|id| self.users.get(id).map(|e| e.value().clone()))
            .collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn create(&self, draft: UserDraft) -> AppResult<User> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            email: draft.email,
            login: draft.login,
            name: draft.name,
            birthday: draft.birthday,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<Option<User>> {
        match self.users.get_mut(&user.id) {
            Some(mut entry) => {
                *entry = user.clone();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}
