use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered user. The identifier is assigned on creation and immutable
/// thereafter; friendship and like edges reference it by id only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

/// Registration candidate. `name` may be absent or empty; the service
/// substitutes the login before the record is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

/// Fully validated shape handed to a storage backend, which assigns the id.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}
