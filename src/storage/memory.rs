use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{UpdateOutcome, UpdateRequest, UserStore};
use crate::core::models::User;
use crate::errors::UserError;

/// In-process `UserStore` with DynamoDB-like semantics: puts overwrite,
/// updates upsert, deletes report the old record.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    items: RwLock<BTreeMap<String, User>>,
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let items = users
            .into_iter()
            .filter_map(|u| u.user_id.clone().map(|id| (id, u)))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

/// Applies `SET a = :a, #b = :b` to `user`, resolving aliases and placeholders.
fn apply_set_expression(user: &mut User, request: &UpdateRequest) -> Result<(), UserError> {
    let unsupported =
        || UserError::AwsError(format!("unsupported update expression: {}", request.update_expression));

    let assignments = request
        .update_expression
        .strip_prefix("SET ")
        .ok_or_else(unsupported)?;

    for assignment in assignments.split(", ") {
        let (target, placeholder) = assignment.split_once(" = ").ok_or_else(unsupported)?;
        let attribute = if target.starts_with('#') {
            request
                .attribute_names
                .get(target)
                .map(String::as_str)
                .ok_or_else(unsupported)?
        } else {
            target
        };
        let value = request
            .attribute_values
            .get(placeholder)
            .cloned()
            .ok_or_else(unsupported)?;

        match attribute {
            "name" => user.name = Some(value),
            "email" => user.email = Some(value),
            "dateOfBirth" => user.date_of_birth = Some(value),
            _ => return Err(unsupported()),
        }
    }

    Ok(())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn scan(&self) -> Result<Vec<User>, UserError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get(&self, user_id: &str) -> Result<Option<User>, UserError> {
        Ok(self.items.read().await.get(user_id).cloned())
    }

    async fn put(&self, user: &User) -> Result<(), UserError> {
        let Some(user_id) = user.user_id.clone() else {
            return Err(UserError::AwsError(
                "put: item is missing the userId key".to_string(),
            ));
        };
        self.items.write().await.insert(user_id, user.clone());
        Ok(())
    }

    async fn update(&self, request: &UpdateRequest) -> Result<UpdateOutcome, UserError> {
        let mut items = self.items.write().await;
        let mut user = items.get(&request.user_id).cloned().unwrap_or_else(|| User {
            user_id: Some(request.user_id.clone()),
            ..User::default()
        });

        apply_set_expression(&mut user, request)?;
        items.insert(request.user_id.clone(), user.clone());

        Ok(UpdateOutcome {
            status_code: 200,
            attributes: Some(user),
        })
    }

    async fn delete(&self, user_id: &str) -> Result<Option<User>, UserError> {
        Ok(self.items.write().await.remove(user_id))
    }
}
