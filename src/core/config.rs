use std::env;

use crate::errors::UserError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub users_table: String,
    /// Overrides the DynamoDB endpoint, e.g. `http://localhost:8000` for DynamoDB Local.
    pub dynamodb_endpoint: Option<String>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns a `ConfigError` if `USERS_TABLE` is unset or blank.
    pub fn from_env() -> Result<Self, UserError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `USERS_TABLE` is missing or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, UserError> {
        let users_table = lookup("USERS_TABLE")
            .ok_or_else(|| UserError::ConfigError("USERS_TABLE: not set".to_string()))?;
        if users_table.trim().is_empty() {
            return Err(UserError::ConfigError(
                "USERS_TABLE: must not be empty".to_string(),
            ));
        }

        Ok(Self {
            users_table,
            dynamodb_endpoint: lookup("DYNAMODB_ENDPOINT").filter(|v| !v.trim().is_empty()),
        })
    }
}
