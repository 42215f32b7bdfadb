use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;

/// A user record as submitted by clients and as stored in the users table.
///
/// Every field is optional: requests may omit fields and stored items may be
/// sparse. Absent fields are left out of the serialized JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl User {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            user_id: Some(user_id.into()),
            name: Some(name.into()),
            email: Some(email.into()),
            date_of_birth: Some(date_of_birth.into()),
        }
    }

    /// Builds a user from a JSON request body.
    ///
    /// When `path_user_id` is given it is used as the key and any `userId` in
    /// the body is ignored. Missing and `null` fields become `None`; fields of
    /// any other non-string type are rejected.
    ///
    /// # Errors
    ///
    /// Returns `NotAString` naming the first field (in `userId`, `name`,
    /// `email`, `dateOfBirth` order) whose JSON type is not a string.
    pub fn from_body(body: &Value, path_user_id: Option<&str>) -> Result<Self, ValidationError> {
        let user_id = match path_user_id {
            Some(id) => Some(id.to_string()),
            None => string_field(body, "userId")?,
        };

        Ok(Self {
            user_id,
            name: string_field(body, "name")?,
            email: string_field(body, "email")?,
            date_of_birth: string_field(body, "dateOfBirth")?,
        })
    }
}

fn string_field(body: &Value, field: &'static str) -> Result<Option<String>, ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::NotAString(field)),
    }
}

/// Confirmation or failure message, serialized as `{"msg": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub msg: String,
}

impl Message {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
