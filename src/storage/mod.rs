//! Storage adapters for the users table.
//!
//! The record service only talks to [`UserStore`]. `dynamodb` is the
//! production adapter; `memory` follows the same contract for local runs
//! and tests.

pub mod dynamodb;
pub mod memory;

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::core::models::User;
use crate::errors::UserError;

pub use dynamodb::DynamoUserStore;
pub use memory::InMemoryUserStore;

/// A sparse mutation of one record, expressed as a `SET` update expression.
///
/// The store applies it atomically and returns the record's new values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub user_id: String,
    pub update_expression: String,
    /// Alias (`#name`) to attribute name. Empty when no alias is used.
    pub attribute_names: BTreeMap<String, String>,
    /// Placeholder (`:name`) to value.
    pub attribute_values: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub status_code: u16,
    pub attributes: Option<User>,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns every record in the table.
    async fn scan(&self) -> Result<Vec<User>, UserError>;

    async fn get(&self, user_id: &str) -> Result<Option<User>, UserError>;

    /// Writes the full record, replacing anything stored under the same key.
    async fn put(&self, user: &User) -> Result<(), UserError>;

    async fn update(&self, request: &UpdateRequest) -> Result<UpdateOutcome, UserError>;

    /// Removes the record and returns its previous values, if there were any.
    async fn delete(&self, user_id: &str) -> Result<Option<User>, UserError>;
}
