//! Validation rules for submitted users.

use chrono::NaiveDate;

use super::models::User;
use crate::errors::ValidationError;

const DATE_OF_BIRTH_FORMAT: &str = "%Y/%m/%d";

/// Checks a user before it is written as a complete record.
///
/// Field types are checked first (userId, name, email, dateOfBirth), then the
/// key, then the date format. The first failure wins.
///
/// # Errors
///
/// Returns the first `ValidationError` encountered.
pub fn full_validate(user: &User) -> Result<(), ValidationError> {
    let Some(user_id) = user.user_id.as_deref() else {
        return Err(ValidationError::NotAString("userId"));
    };
    if user.name.is_none() {
        return Err(ValidationError::NotAString("name"));
    }
    if user.email.is_none() {
        return Err(ValidationError::NotAString("email"));
    }
    let Some(date_of_birth) = user.date_of_birth.as_deref() else {
        return Err(ValidationError::NotAString("dateOfBirth"));
    };
    if user_id.trim().is_empty() {
        return Err(ValidationError::UserIdRequired);
    }

    validate_date_of_birth(date_of_birth)
}

/// Accepts only `yyyy/MM/dd` strings naming a real calendar date.
///
/// chrono alone is lenient about padding and signs (`1990/1/1`, `+1990/01/01`),
/// so the shape is checked before parsing.
///
/// # Errors
///
/// Returns `InvalidDateOfBirth` for anything else.
pub fn validate_date_of_birth(date_of_birth: &str) -> Result<(), ValidationError> {
    if !has_date_shape(date_of_birth) {
        return Err(ValidationError::InvalidDateOfBirth);
    }

    NaiveDate::parse_from_str(date_of_birth, DATE_OF_BIRTH_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidDateOfBirth)
}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> User {
        User::new("u1", "Bo", "bo@x.com", "1990/01/01")
    }

    #[test]
    fn valid_user_passes() {
        assert_eq!(full_validate(&valid_user()), Ok(()));
    }

    #[test]
    fn empty_user_id_is_required() {
        let user = User::new("", "Bo", "bo@x.com", "1990/01/01");
        assert_eq!(full_validate(&user), Err(ValidationError::UserIdRequired));
        assert_eq!(
            full_validate(&user).unwrap_err().to_string(),
            "\"userId\" is required"
        );
    }

    #[test]
    fn whitespace_user_id_is_required() {
        let user = User::new(" \t ", "Bo", "bo@x.com", "1990/01/01");
        assert_eq!(full_validate(&user), Err(ValidationError::UserIdRequired));
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut user = valid_user();
        user.email = None;
        user.date_of_birth = None;
        assert_eq!(
            full_validate(&user).unwrap_err().to_string(),
            "\"email\" must be a string"
        );

        let user = User::default();
        assert_eq!(
            full_validate(&user),
            Err(ValidationError::NotAString("userId"))
        );

        let mut user = valid_user();
        user.date_of_birth = None;
        assert_eq!(
            full_validate(&user),
            Err(ValidationError::NotAString("dateOfBirth"))
        );
    }

    #[test]
    fn type_checks_come_before_user_id_check() {
        let mut user = User::new("", "Bo", "bo@x.com", "1990/01/01");
        user.name = None;
        assert_eq!(full_validate(&user), Err(ValidationError::NotAString("name")));
    }

    #[test]
    fn dashed_date_is_rejected() {
        let user = User::new("u1", "Bo", "bo@x.com", "1990-01-01");
        assert_eq!(
            full_validate(&user).unwrap_err().to_string(),
            "\"dateOfBirth\" must be a valid date formatted as yyyy/MM/dd"
        );
    }

    #[test]
    fn empty_date_fails_full_validation() {
        let user = User::new("u1", "Bo", "bo@x.com", "");
        assert_eq!(
            full_validate(&user),
            Err(ValidationError::InvalidDateOfBirth)
        );
    }

    #[test]
    fn date_rule_accepts_real_calendar_dates() {
        for date in ["1990/01/01", "2000/02/29", "2024/12/31", "0001/01/01", "2999/06/15"] {
            assert_eq!(validate_date_of_birth(date), Ok(()), "{date}");
        }
    }

    #[test]
    fn date_rule_rejects_malformed_or_impossible_dates() {
        for date in [
            "",
            "1990/1/1",
            "90/01/01",
            "1990/13/01",
            "1990/00/10",
            "1990/02/30",
            "1900/02/29",
            "1990/01/01 ",
            " 1990/01/01",
            "+990/01/01",
            "1990.01.01",
            "01/01/1990",
            "abcd/ef/gh",
        ] {
            assert_eq!(
                validate_date_of_birth(date),
                Err(ValidationError::InvalidDateOfBirth),
                "{date:?}"
            );
        }
    }
}
