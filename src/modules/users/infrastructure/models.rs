use chrono::NaiveDate;
use diesel::prelude::*;

use crate::modules::users::domain::entities::{User, UserDraft};
use crate::schema::users;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

impl UserRow {
    pub fn into_entity(self) -> User {
        User {
            id: self.id,
            email: self.email,
            login: self.login,
            name: self.name,
            birthday: self.birthday,
        }
    }
}

/// Insert payload (write); the id comes from the database sequence.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

impl From<UserDraft> for NewUserRow {
    fn from(draft: UserDraft) -> Self {
        Self {
            email: draft.email,
            login: draft.login,
            name: draft.name,
            birthday: draft.birthday,
        }
    }
}

/// Update payload (write) — excludes `id`.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = users)]
pub struct UserChangeset {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

impl From<&User> for UserChangeset {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            login: user.login.clone(),
            name: user.name.clone(),
            birthday: user.birthday,
        }
    }
}
