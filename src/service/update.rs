use std::collections::BTreeMap;

use crate::core::models::User;
use crate::core::validation::validate_date_of_birth;
use crate::errors::ValidationError;
use crate::storage::UpdateRequest;

/// Translates a sparse user into a `SET` update of the fields it carries.
///
/// Fields are considered in the order name, email, dateOfBirth and only
/// non-empty ones are included. `name` is a DynamoDB reserved word and is
/// written through the `#name` alias. Only the date format is checked here,
/// not the full record.
///
/// # Errors
///
/// - `UserIdRequired` if the key is missing or blank
/// - `InvalidDateOfBirth` if a supplied date is malformed
/// - `NoPropertiesToUpdate` if nothing besides the key was supplied
pub fn build_update(user: &User) -> Result<UpdateRequest, ValidationError> {
    let user_id = user
        .user_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or(ValidationError::UserIdRequired)?;

    let mut assignments: Vec<&str> = Vec::new();
    let mut attribute_names = BTreeMap::new();
    let mut attribute_values = BTreeMap::new();

    if let Some(name) = non_empty(&user.name) {
        assignments.push("#name = :name");
        attribute_names.insert("#name".to_string(), "name".to_string());
        attribute_values.insert(":name".to_string(), name.to_string());
    }
    if let Some(email) = non_empty(&user.email) {
        assignments.push("email = :email");
        attribute_values.insert(":email".to_string(), email.to_string());
    }
    if let Some(date_of_birth) = non_empty(&user.date_of_birth) {
        validate_date_of_birth(date_of_birth)?;
        assignments.push("dateOfBirth = :dateOfBirth");
        attribute_values.insert(":dateOfBirth".to_string(), date_of_birth.to_string());
    }

    if assignments.is_empty() {
        return Err(ValidationError::NoPropertiesToUpdate);
    }

    Ok(UpdateRequest {
        user_id: user_id.to_string(),
        update_expression: format!("SET {}", assignments.join(", ")),
        attribute_names,
        attribute_values,
    })
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse(user_id: &str, name: &str, email: &str, date_of_birth: &str) -> User {
        User::new(user_id, name, email, date_of_birth)
    }

    #[test]
    fn name_only_uses_alias() {
        let update = build_update(&sparse("u1", "Alice", "", "")).unwrap();

        assert_eq!(update.user_id, "u1");
        assert_eq!(update.update_expression, "SET #name = :name");
        assert_eq!(
            update.attribute_names,
            BTreeMap::from([("#name".to_string(), "name".to_string())])
        );
        assert_eq!(
            update.attribute_values,
            BTreeMap::from([(":name".to_string(), "Alice".to_string())])
        );
    }

    #[test]
    fn all_fields_keep_fixed_order() {
        let update = build_update(&sparse("u1", "Bo", "bo@x.com", "1990/01/01")).unwrap();

        assert_eq!(
            update.update_expression,
            "SET #name = :name, email = :email, dateOfBirth = :dateOfBirth"
        );
        assert_eq!(update.attribute_values.len(), 3);
        assert_eq!(
            update.attribute_values.get(":dateOfBirth").map(String::as_str),
            Some("1990/01/01")
        );
    }

    #[test]
    fn without_name_no_alias_is_declared() {
        let user = User {
            user_id: Some("u1".to_string()),
            email: Some("bo@x.com".to_string()),
            ..User::default()
        };

        let update = build_update(&user).unwrap();
        assert_eq!(update.update_expression, "SET email = :email");
        assert!(update.attribute_names.is_empty());
    }

    #[test]
    fn missing_or_blank_user_id_is_rejected() {
        assert_eq!(
            build_update(&sparse("", "Alice", "", "")),
            Err(ValidationError::UserIdRequired)
        );
        assert_eq!(
            build_update(&sparse("  ", "Alice", "", "")),
            Err(ValidationError::UserIdRequired)
        );
        assert_eq!(
            build_update(&User::default()),
            Err(ValidationError::UserIdRequired)
        );
    }

    #[test]
    fn invalid_date_is_rejected() {
        assert_eq!(
            build_update(&sparse("u1", "", "", "1990-01-01")),
            Err(ValidationError::InvalidDateOfBirth)
        );
    }

    #[test]
    fn nothing_to_update_is_rejected() {
        assert_eq!(
            build_update(&sparse("u1", "", "", "")),
            Err(ValidationError::NoPropertiesToUpdate)
        );
        let user = User {
            user_id: Some("u1".to_string()),
            ..User::default()
        };
        assert_eq!(build_update(&user), Err(ValidationError::NoPropertiesToUpdate));
    }
}
