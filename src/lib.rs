//! users-api - a REST resource manager for user records stored in DynamoDB.
//!
//! The crate runs as an AWS Lambda function behind an API Gateway proxy
//! integration and serves six routes:
//!
//! | Method | Path             | Operation                    |
//! |--------|------------------|------------------------------|
//! | GET    | `/users`         | list every user              |
//! | GET    | `/users/:userId` | fetch one user               |
//! | POST   | `/users`         | create (overwrites) a user   |
//! | PUT    | `/users/:userId` | replace a user               |
//! | PATCH  | `/users/:userId` | update the supplied fields   |
//! | DELETE | `/users/:userId` | delete and return the record |
//!
//! # Architecture
//!
//! - `api` parses proxy events, matches the route table and renders responses
//! - `service` validates input, builds the storage call and maps outcomes to
//!   status codes
//! - `storage` defines the `UserStore` contract with DynamoDB and in-memory
//!   implementations
//! - `core` holds configuration, the `User` model and its validation rules
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use lambda_runtime::{LambdaEvent, run, service_fn};
//! use serde_json::Value;
//! use users_api::core::config::AppConfig;
//! use users_api::service::UserService;
//! use users_api::storage::DynamoUserStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     users_api::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let service = Arc::new(UserService::new(DynamoUserStore::from_config(&config).await));
//!
//!     run(service_fn(move |event: LambdaEvent<Value>| {
//!         let service = Arc::clone(&service);
//!         async move { users_api::api::function_handler(&*service, event).await }
//!     }))
//!     .await
//! }
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod service;
pub mod storage;

pub use errors::{UserError, ValidationError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log records go to stdout as JSON, which `CloudWatch` Logs ingests as-is.
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless.
///
/// # Example
///
/// ```
/// users_api::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
