use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use tracing::debug;

use super::{UpdateOutcome, UpdateRequest, UserStore};
use crate::core::config::AppConfig;
use crate::core::models::User;
use crate::errors::UserError;

const KEY_ATTRIBUTE: &str = "userId";

/// `UserStore` backed by a DynamoDB table keyed by `userId`.
#[derive(Debug, Clone)]
pub struct DynamoUserStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoUserStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Loads AWS configuration from the environment and builds a store for
    /// the configured table, honouring an endpoint override if one is set.
    pub async fn from_config(config: &AppConfig) -> Self {
        let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_dynamodb::config::Builder::from(&shared);
        if let Some(endpoint) = &config.dynamodb_endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(
            DynamoClient::from_conf(builder.build()),
            config.users_table.clone(),
        )
    }

    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn key(user_id: &str) -> AttributeValue {
    AttributeValue::S(user_id.to_string())
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Option<String> {
    item.get(name).and_then(|v| v.as_s().ok()).cloned()
}

/// Non-string attributes are ignored; the users table only holds strings.
fn user_from_item(item: &HashMap<String, AttributeValue>) -> User {
    User {
        user_id: string_attr(item, KEY_ATTRIBUTE),
        name: string_attr(item, "name"),
        email: string_attr(item, "email"),
        date_of_birth: string_attr(item, "dateOfBirth"),
    }
}

fn item_from_user(user: &User) -> HashMap<String, AttributeValue> {
    [
        (KEY_ATTRIBUTE, &user.user_id),
        ("name", &user.name),
        ("email", &user.email),
        ("dateOfBirth", &user.date_of_birth),
    ]
    .into_iter()
    .filter_map(|(name, value)| {
        value
            .as_ref()
            .map(|v| (name.to_string(), AttributeValue::S(v.clone())))
    })
    .collect()
}

#[async_trait]
impl UserStore for DynamoUserStore {
    async fn scan(&self) -> Result<Vec<User>, UserError> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| UserError::AwsError(format!("dynamodb scan: {}", DisplayErrorContext(&e))))?;

        Ok(output.items().iter().map(user_from_item).collect())
    }

    async fn get(&self, user_id: &str) -> Result<Option<User>, UserError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, key(user_id))
            .send()
            .await
            .map_err(|e| {
                UserError::AwsError(format!("dynamodb get_item: {}", DisplayErrorContext(&e)))
            })?;

        Ok(output.item().map(user_from_item))
    }

    async fn put(&self, user: &User) -> Result<(), UserError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_from_user(user)))
            .send()
            .await
            .map_err(|e| {
                UserError::AwsError(format!("dynamodb put_item: {}", DisplayErrorContext(&e)))
            })?;

        Ok(())
    }

    async fn update(&self, request: &UpdateRequest) -> Result<UpdateOutcome, UserError> {
        // DynamoDB rejects an empty ExpressionAttributeNames map.
        let names = (!request.attribute_names.is_empty()).then(|| {
            request
                .attribute_names
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<HashMap<_, _>>()
        });
        let values = request
            .attribute_values
            .iter()
            .map(|(k, v)| (k.clone(), AttributeValue::S(v.clone())))
            .collect::<HashMap<_, _>>();

        debug!(
            user_id = %request.user_id,
            update_expression = %request.update_expression,
            "Sending update_item"
        );

        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, key(&request.user_id))
            .update_expression(&request.update_expression)
            .set_expression_attribute_names(names)
            .set_expression_attribute_values(Some(values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| {
                UserError::AwsError(format!("dynamodb update_item: {}", DisplayErrorContext(&e)))
            })?;

        Ok(UpdateOutcome {
            status_code: 200,
            attributes: output.attributes().map(user_from_item),
        })
    }

    async fn delete(&self, user_id: &str) -> Result<Option<User>, UserError> {
        let output = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, key(user_id))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| {
                UserError::AwsError(format!("dynamodb delete_item: {}", DisplayErrorContext(&e)))
            })?;

        Ok(output.attributes().map(user_from_item))
    }
}
