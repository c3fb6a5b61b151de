use chrono::{NaiveDate, Utc};
use regex::Regex;

use crate::shared::errors::AppError;

/// Maximum length of a film description.
pub const MAX_DESCRIPTION_LEN: usize = 200;

pub struct Validator;

impl Validator {
    /// The earliest permissible release date for a motion picture.
    pub fn earliest_release_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1895, 12, 28).unwrap()
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        if email.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Email cannot be empty".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(AppError::ValidationError(format!(
                "Email '{}' must contain '@'",
                email
            )));
        }
        Ok(())
    }

    pub fn validate_login(login: &str) -> Result<(), AppError> {
        if login.is_empty() {
            return Err(AppError::ValidationError(
                "Login cannot be empty".to_string(),
            ));
        }

        let re = Regex::new(r"^\S+$").unwrap();
        if !re.is_match(login) {
            return Err(AppError::ValidationError(format!(
                "Login '{}' must not contain whitespace",
                login
            )));
        }
        Ok(())
    }

    pub fn validate_birthday(birthday: NaiveDate) -> Result<(), AppError> {
        if birthday > Utc::now().date_naive() {
            return Err(AppError::ValidationError(format!(
                "Birthday {} cannot be in the future",
                birthday
            )));
        }
        Ok(())
    }

    pub fn validate_film_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Film name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_film_description(description: &str) -> Result<(), AppError> {
        if description.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Film description cannot be empty".to_string(),
            ));
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::ValidationError(format!(
                "Film description too long (max {} characters)",
                MAX_DESCRIPTION_LEN
            )));
        }
        Ok(())
    }

    pub fn validate_release_date(release_date: NaiveDate) -> Result<(), AppError> {
        let floor = Self::earliest_release_date();
        if release_date < floor {
            return Err(AppError::ValidationError(format!(
                "Release date {} is earlier than {}",
                release_date, floor
            )));
        }
        Ok(())
    }

    pub fn validate_duration(duration: i32) -> Result<(), AppError> {
        if duration <= 0 {
            return Err(AppError::ValidationError(
                "Film duration must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_at_sign() {
        assert!(Validator::validate_email("user@example.com").is_ok());
        assert!(Validator::validate_email("user.example.com").is_err());
        assert!(Validator::validate_email("").is_err());
    }

    #[test]
    fn login_rejects_whitespace() {
        assert!(Validator::validate_login("neo").is_ok());
        assert!(Validator::validate_login("two words").is_err());
        assert!(Validator::validate_login("").is_err());
    }

    #[test]
    fn release_date_floor_is_inclusive() {
        let floor = Validator::earliest_release_date();
        assert!(Validator::validate_release_date(floor).is_ok());
        assert!(Validator::validate_release_date(floor.pred_opt().unwrap()).is_err());
    }

    #[test]
    fn description_length_is_bounded() {
        assert!(Validator::validate_film_description(&"a".repeat(MAX_DESCRIPTION_LEN)).is_ok());
        assert!(
            Validator::validate_film_description(&"a".repeat(MAX_DESCRIPTION_LEN + 1)).is_err()
        );
    }

    #[test]
    fn duration_must_be_positive() {
        assert!(Validator::validate_duration(1).is_ok());
        assert!(Validator::validate_duration(0).is_err());
        assert!(Validator::validate_duration(-10).is_err());
    }
}
