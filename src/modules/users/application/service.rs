use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::users::domain::{FriendRepository, NewUser, User, UserDraft, UserRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// User directory plus the symmetric friendship graph over it.
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    friend_repo: Arc<dyn FriendRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, friend_repo: Arc<dyn FriendRepository>) -> Self {
        Self {
            user_repo,
            friend_repo,
        }
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    pub async fn create_user(&self, candidate: NewUser) -> AppResult<User> {
        Validator::validate_email(&candidate.email)?;
        Validator::validate_login(&candidate.login)?;
        Validator::validate_birthday(candidate.birthday)?;

        let name = Self::resolve_name(candidate.name.as_deref(), &candidate.login);
        let draft = UserDraft {
            email: candidate.email,
            login: candidate.login,
            name,
            birthday: candidate.birthday,
        };

        let user = self.user_repo.create(draft).await?;
        log_info!("Created user {} (id {})", user.name, user.id);
        Ok(user)
    }

    /// Wholesale replace of the stored record; the id must already exist.
    pub async fn update_user(&self, mut candidate: User) -> AppResult<User> {
        Validator::validate_email(&candidate.email)?;
        Validator::validate_login(&candidate.login)?;
        Validator::validate_birthday(candidate.birthday)?;

        candidate.name = Self::resolve_name(Some(candidate.name.as_str()), &candidate.login);

        let id = candidate.id;
        let user = self
            .user_repo
            .update(&candidate)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;
        log_info!("Updated user {} (id {})", user.name, user.id);
        Ok(user)
    }

    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        if id <= 0 {
            return Err(AppError::NotFound(format!(
                "User id must be positive, got {}",
                id
            )));
        }
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    pub async fn add_friend(&self, user_id: i64, friend_id: i64) -> AppResult<()> {
        let user = self.get_user(user_id).await?;
        let friend = self.get_user(friend_id).await?;
        self.friend_repo.add_friend(user_id, friend_id).await?;
        log_info!("Users {} and {} are now friends", user.name, friend.name);
        Ok(())
    }

    pub async fn delete_friend(&self, user_id: i64, friend_id: i64) -> AppResult<()> {
        let user = self.get_user(user_id).await?;
        let friend = self.get_user(friend_id).await?;
        self.friend_repo.delete_friend(user_id, friend_id).await?;
        log_info!(
            "Users {} and {} are no longer friends",
            user.name,
            friend.name
        );
        Ok(())
    }

    pub async fn list_friends(&self, user_id: i64) -> AppResult<Vec<User>> {
        let user = self.get_user(user_id).await?;
        log_debug!("Listing friends of {}", user.name);
        let ids = self.friend_repo.find_friend_ids(user_id).await?;
        self.user_repo.find_by_ids(&ids).await
    }

    /// Users appearing in both friend sets, resolved to full records.
    pub async fn list_common_friends(&self, user_id: i64, other_id: i64) -> AppResult<Vec<User>> {
        self.get_user(user_id).await?;
        self.get_user(other_id).await?;

        let own: HashSet<i64> = self
            .friend_repo
            .find_friend_ids(user_id)
            .await?
            .into_iter()
            .collect();
        let common: Vec<i64> = self
            .friend_repo
            .find_friend_ids(other_id)
            .await?
            .into_iter()
            .filter(|id| own.contains(id))
            .collect();

        self.user_repo.find_by_ids(&common).await
    }

    fn resolve_name(name: Option<&str>, login: &str) -> String {
        match name {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => login.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::domain::repositories::friend_repository::MockFriendRepository;
    use crate::modules::users::domain::repositories::user_repository::MockUserRepository;
    use chrono::NaiveDate;

    fn birthday() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()
    }

    fn service(
        user_repo: MockUserRepository,
        friend_repo: MockFriendRepository,
    ) -> UserService {
        UserService::new(Arc::new(user_repo), Arc::new(friend_repo))
    }

    #[tokio::test]
    async fn empty_name_defaults_to_login() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_create()
            .withf(|draft| draft.name == "neo")
            .returning(|draft| {
                Ok(User {
                    id: 1,
                    email: draft.email,
                    login: draft.login,
                    name: draft.name,
                    birthday: draft.birthday,
                })
            });

        let svc = service(user_repo, MockFriendRepository::new());
        let user = svc
            .create_user(NewUser {
                email: "neo@matrix.io".to_string(),
                login: "neo".to_string(),
                name: Some("   ".to_string()),
                birthday: birthday(),
            })
            .await
            .unwrap();

        assert_eq!(user.name, "neo");
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_update().returning(|_| Ok(None));

        let svc = service(user_repo, MockFriendRepository::new());
        let err = svc
            .update_user(User {
                id: 999,
                email: "ghost@example.com".to_string(),
                login: "ghost".to_string(),
                name: "Ghost".to_string(),
                birthday: birthday(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn non_positive_ids_are_not_found_without_touching_storage() {
        let svc = service(MockUserRepository::new(), MockFriendRepository::new());

        for id in [0, -1] {
            let err = svc.get_user(id).await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
        }
    }

    #[tokio::test]
    async fn add_friend_requires_both_users() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_id().returning(|id| {
            if id == 1 {
                Ok(Some(User {
                    id: 1,
                    email: "a@example.com".to_string(),
                    login: "a".to_string(),
                    name: "a".to_string(),
                    birthday: birthday(),
                }))
            } else {
                Ok(None)
            }
        });

        let mut friend_repo = MockFriendRepository::new();
        friend_repo.expect_add_friend().never();

        let svc = service(user_repo, friend_repo);
        let err = svc.add_friend(1, 2).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_storage() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_create().never();

        let svc = service(user_repo, MockFriendRepository::new());
        let err = svc
            .create_user(NewUser {
                email: "not-an-email".to_string(),
                login: "neo".to_string(),
                name: None,
                birthday: birthday(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
