#![allow(dead_code)]

/// Test data factories using builder pattern
///
/// Provides convenient methods to create valid candidates with sensible
/// defaults; individual tests override only the field under test.
use chrono::NaiveDate;
use filmoteka::{NewFilm, NewUser};

pub struct UserFactory {
    email: String,
    login: String,
    name: Option<String>,
    birthday: NaiveDate,
}

impl Default for UserFactory {
    fn default() -> Self {
        Self {
            email: "user@example.com".to_string(),
            login: "user".to_string(),
            name: None,
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_login(mut self, login: &str) -> Self {
        self.login = login.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = birthday;
        self
    }

    pub fn build(self) -> NewUser {
        NewUser {
            email: self.email,
            login: self.login,
            name: self.name,
            birthday: self.birthday,
        }
    }
}

pub struct FilmFactory {
    name: String,
    description: String,
    release_date: NaiveDate,
    duration: i32,
    mpa_id: i32,
    genre_ids: Vec<i32>,
}

impl Default for FilmFactory {
    fn default() -> Self {
        Self {
            name: "Test Film".to_string(),
            description: "A film made for tests".to_string(),
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            duration: 120,
            mpa_id: 1,
            genre_ids: Vec::new(),
        }
    }
}

impl FilmFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn with_duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_mpa_id(mut self, mpa_id: i32) -> Self {
        self.mpa_id = mpa_id;
        self
    }

    pub fn with_genre_ids(mut self, genre_ids: Vec<i32>) -> Self {
        self.genre_ids = genre_ids;
        self
    }

    pub fn build(self) -> NewFilm {
        NewFilm {
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
            mpa_id: self.mpa_id,
            genre_ids: self.genre_ids,
        }
    }
}
