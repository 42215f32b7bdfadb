use thiserror::Error;

/// Faults that escape the record service. None of these are expected
/// outcomes; the API handler turns them into a generic 500.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse request: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for UserError {
    fn from(error: serde_json::Error) -> Self {
        UserError::ParseError(error.to_string())
    }
}

/// Locally detected problems with a submitted user. The `Display` output is
/// the exact message returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("\"{0}\" must be a string")]
    NotAString(&'static str),

    #[error("\"userId\" is required")]
    UserIdRequired,

    #[error("\"dateOfBirth\" must be a valid date formatted as yyyy/MM/dd")]
    InvalidDateOfBirth,

    #[error("No valid properties to update")]
    NoPropertiesToUpdate,
}
