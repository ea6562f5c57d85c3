//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `worktime_core::storage` using
//! DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use worktime_core::storage::{Result, TimerPage, TimerRepository};
use worktime_core::timer::TimerRecord;

use super::conversions::{item_to_timer, timer_to_item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_insert_error, map_query_error,
    map_replace_error,
};
use super::keys;

/// DynamoDB-based repository implementation.
///
/// Provides async access to the timers table. Writes guard on row existence
/// only ("match any" semantics); no version token is ever checked, so
/// concurrent writers to the same row are last-write-wins.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl TimerRepository for DynamoDbRepository {
    async fn get_timer(&self, row_key: Uuid) -> Result<Option<TimerRecord>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::timer_pk()))
            .key("SK", AttributeValue::S(keys::timer_sk(row_key)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, row_key.to_string()))?;

        match result.item {
            Some(item) => Ok(Some(item_to_timer(&item)?)),
            None => Ok(None),
        }
    }

    async fn insert_timer(&self, timer: &TimerRecord) -> Result<()> {
        let item = timer_to_item(timer);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(SK)")
            .send()
            .await
            .map_err(|e| map_insert_error(e, timer.row_key.to_string()))?;

        Ok(())
    }

    async fn replace_timer(&self, timer: &TimerRecord) -> Result<()> {
        let item = timer_to_item(timer);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(SK)")
            .send()
            .await
            .map_err(|e| map_replace_error(e, timer.row_key.to_string()))?;

        Ok(())
    }

    async fn delete_timer(&self, row_key: Uuid) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::timer_pk()))
            .key("SK", AttributeValue::S(keys::timer_sk(row_key)))
            .condition_expression("attribute_exists(SK)")
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, row_key.to_string()))?;

        Ok(())
    }

    async fn scan_timers(&self, exclusive_start: Option<String>) -> Result<TimerPage> {
        // One Query call over the fixed partition = one scan segment. The
        // continuation token is the last row key the store evaluated.
        let mut request = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("PK = :pk")
            .expression_attribute_values(":pk", AttributeValue::S(keys::timer_pk()));

        if let Some(token) = exclusive_start {
            request = request
                .exclusive_start_key("PK", AttributeValue::S(keys::timer_pk()))
                .exclusive_start_key("SK", AttributeValue::S(token));
        }

        let result = request.send().await.map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        let timers = items
            .iter()
            .map(item_to_timer)
            .collect::<Result<Vec<TimerRecord>>>()?;

        let next = result
            .last_evaluated_key
            .as_ref()
            .and_then(|key| key.get("SK"))
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string());

        Ok(TimerPage { timers, next })
    }
}
