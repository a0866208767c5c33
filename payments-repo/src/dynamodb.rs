//! DynamoDB repository adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;

use payments_types::{PaymentFilter, PaymentId, PaymentRecord, PaymentRepository, RepoError};

use crate::RepoConfig;
use crate::item::{self, Item};

const UPDATE_EXPRESSION: &str =
    "SET userId = :u, reserveId = :r, #st = :s, #ts = :t, price = :p, borrowId = :b";

// ─────────────────────────────────────────────────────────────────────────────
// DynamoDB Repository
// ─────────────────────────────────────────────────────────────────────────────

/// DynamoDB repository implementation over a single table keyed by `id`.
#[derive(Debug, Clone)]
pub struct DynamoDbRepo {
    client: Client,
    table_name: String,
}

impl DynamoDbRepo {
    /// Wraps an already configured client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Loads credentials from the default provider chain and builds the client.
    pub async fn connect(config: &RepoConfig) -> anyhow::Result<Self> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
        if let Some(url) = &config.endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;

        tracing::info!(
            table = %config.table_name,
            region = %config.region,
            endpoint = ?config.endpoint_url,
            "DynamoDB client ready"
        );

        Ok(Self::new(Client::new(&sdk_config), &config.table_name))
    }
}

fn db_error<E>(err: E) -> RepoError
where
    E: std::error::Error,
{
    RepoError::Database(DisplayErrorContext(&err).to_string())
}

/// `#attr = :value` pieces for a scan filter.
fn filter_parts(
    filter: &PaymentFilter,
) -> (String, HashMap<String, String>, HashMap<String, AttributeValue>) {
    (
        "#attr = :value".to_string(),
        HashMap::from([("#attr".to_string(), filter.attribute().name().to_string())]),
        HashMap::from([(":value".to_string(), item::string_value(filter.value()))]),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for DynamoDbRepo {
    #[tracing::instrument(skip(self), fields(table = %self.table_name))]
    async fn scan_payments(
        &self,
        filter: Option<PaymentFilter>,
    ) -> Result<Vec<PaymentRecord>, RepoError> {
        let (expression, names, values) = match filter.as_ref().map(filter_parts) {
            Some((e, n, v)) => (Some(e), Some(n), Some(v)),
            None => (None, None, None),
        };

        let mut records = Vec::new();
        let mut start_key: Option<Item> = None;

        // Follow LastEvaluatedKey so results are not cut at the page limit.
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_filter_expression(expression.clone())
                .set_expression_attribute_names(names.clone())
                .set_expression_attribute_values(values.clone())
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(db_error)?;

            for raw in output.items() {
                records.push(item::from_item(raw)?);
            }

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        tracing::debug!(count = records.len(), "scan complete");
        Ok(records)
    }

    #[tracing::instrument(skip(self, record), fields(table = %self.table_name, payment_id = %record.id))]
    async fn put_payment(&self, record: &PaymentRecord) -> Result<(), RepoError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item::to_item(record)))
            .send()
            .await
            .map_err(db_error)?;

        Ok(())
    }

    #[tracing::instrument(skip(self, record), fields(table = %self.table_name, payment_id = %record.id))]
    async fn update_payment(&self, record: &PaymentRecord) -> Result<(), RepoError> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(item::ID, item::key(&record.id))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#st", item::STATUS)
            .expression_attribute_names("#ts", item::TIMESTAMP)
            .expression_attribute_values(":u", item::string_value(&record.user_id))
            .expression_attribute_values(":r", item::string_value(&record.reserve_id))
            .expression_attribute_values(":s", item::string_value(&record.status))
            .expression_attribute_values(":t", item::timestamp_value(&record.timestamp))
            .expression_attribute_values(":p", item::number_value(record.price))
            .expression_attribute_values(":b", item::string_value(&record.borrow_id))
            .send()
            .await
            .map_err(db_error)?;

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(table = %self.table_name, payment_id = %id))]
    async fn delete_payment(&self, id: &PaymentId) -> Result<(), RepoError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(item::ID, item::key(id))
            .send()
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parts_use_placeholders() {
        let (expression, names, values) = filter_parts(&PaymentFilter::ReserveId("r1".into()));

        assert_eq!(expression, "#attr = :value");
        assert_eq!(names["#attr"], "reserveId");
        assert_eq!(values[":value"], AttributeValue::S("r1".into()));
    }

    #[test]
    fn test_update_expression_covers_every_mutable_field() {
        for field in ["userId", "reserveId", "#st", "#ts", "price", "borrowId"] {
            assert!(UPDATE_EXPRESSION.contains(field), "missing {field}");
        }
        assert!(!UPDATE_EXPRESSION.contains(" id "));
    }
}
