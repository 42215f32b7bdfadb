//! Record service: validation, storage calls and status mapping for users.
//!
//! Every operation issues at most one storage call. Expected failures come
//! back as a non-200 [`ServiceResponse`]; only storage faults are returned as
//! `Err`, so callers need a single catch point per operation.

pub mod update;

use serde::Serialize;
use tracing::{info, warn};

use crate::core::models::{Message, User};
use crate::core::validation::full_validate;
use crate::errors::{UserError, ValidationError};
use crate::storage::UserStore;

pub use update::build_update;

pub const USER_CREATED: &str = "User created successfully";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_NOT_FOUND: &str = "User not found";
pub const UPDATE_FAILED: &str = "Could not update user";

/// Payload of a service outcome. Serializes to the bare inner value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Users(Vec<User>),
    User(User),
    /// A record that may not have existed, e.g. the old values on delete.
    Record(Option<User>),
    Message(Message),
    /// Validation failure message.
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ServiceResponse {
    #[must_use]
    pub fn ok(body: ResponseBody) -> Self {
        Self { status: 200, body }
    }

    #[must_use]
    pub fn message(status: u16, msg: &str) -> Self {
        Self {
            status,
            body: ResponseBody::Message(Message::new(msg)),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

impl From<ValidationError> for ServiceResponse {
    fn from(error: ValidationError) -> Self {
        Self {
            status: 400,
            body: ResponseBody::Invalid(error.to_string()),
        }
    }
}

pub struct UserService<S> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// # Errors
    ///
    /// Returns the storage fault if the scan fails.
    pub async fn list(&self) -> Result<ServiceResponse, UserError> {
        let users = self.store.scan().await?;
        info!(count = users.len(), "Listed users");
        Ok(ServiceResponse::ok(ResponseBody::Users(users)))
    }

    /// # Errors
    ///
    /// Returns the storage fault if the lookup fails.
    pub async fn get(&self, user_id: &str) -> Result<ServiceResponse, UserError> {
        match self.store.get(user_id).await? {
            Some(user) => Ok(ServiceResponse::ok(ResponseBody::User(user))),
            None => {
                info!(user_id = %user_id, "User not found");
                Ok(ServiceResponse::message(404, USER_NOT_FOUND))
            }
        }
    }

    /// Validates and writes a complete record, overwriting any existing one.
    ///
    /// # Errors
    ///
    /// Returns the storage fault if the write fails.
    pub async fn create(&self, user: &User) -> Result<ServiceResponse, UserError> {
        self.write(user, USER_CREATED).await
    }

    /// Same write path as [`UserService::create`]; only the confirmation differs.
    ///
    /// # Errors
    ///
    /// Returns the storage fault if the write fails.
    pub async fn replace(&self, user: &User) -> Result<ServiceResponse, UserError> {
        self.write(user, USER_UPDATED).await
    }

    async fn write(&self, user: &User, confirmation: &str) -> Result<ServiceResponse, UserError> {
        if let Err(e) = full_validate(user) {
            warn!(error = %e, "Rejected user");
            return Ok(e.into());
        }

        self.store.put(user).await?;
        info!(user_id = ?user.user_id, "Stored user");
        Ok(ServiceResponse::message(200, confirmation))
    }

    /// Applies the non-empty fields of `user` and returns the merged record.
    ///
    /// # Errors
    ///
    /// Returns the storage fault if the update call fails outright.
    pub async fn patch(&self, user: &User) -> Result<ServiceResponse, UserError> {
        let request = match build_update(user) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Rejected partial update");
                return Ok(e.into());
            }
        };

        let outcome = self.store.update(&request).await?;
        if outcome.status_code != 200 {
            warn!(
                user_id = %request.user_id,
                status = outcome.status_code,
                "Storage rejected update"
            );
            return Ok(ServiceResponse::message(outcome.status_code, UPDATE_FAILED));
        }

        info!(user_id = %request.user_id, "Updated user");
        Ok(ServiceResponse::ok(ResponseBody::Record(outcome.attributes)))
    }

    /// Deletes unconditionally and reports the previous values.
    ///
    /// # Errors
    ///
    /// Returns the storage fault if the delete fails.
    pub async fn delete(&self, user_id: &str) -> Result<ServiceResponse, UserError> {
        let old = self.store.delete(user_id).await?;
        info!(user_id = %user_id, existed = old.is_some(), "Deleted user");
        Ok(ServiceResponse::ok(ResponseBody::Record(old)))
    }
}
