use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};

use crate::codec::{self, Record};
use crate::config::Config;
use crate::store::{ItemStore, StoreError};

/// Shareable DynamoDB table handle for use across async handlers
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
    page_size: Option<i32>,
}

impl DynamoStore {
    /// Create a new DynamoDB handle from configuration
    ///
    /// Credentials and region come from the default AWS provider chain.
    /// When `AWS_ENDPOINT_URL` is configured the client talks to that
    /// endpoint instead, which is how DynamoDB Local is reached.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let table_name = config
            .dynamo_table
            .clone()
            .context("DYNAMO_TABLE environment variable is required")?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        match &config.aws_endpoint_url {
            Some(endpoint) => {
                tracing::info!("Connecting to DynamoDB at: {}", endpoint);
                loader = loader.endpoint_url(endpoint);
            }
            None => tracing::info!("Connecting to AWS DynamoDB"),
        }
        let sdk_config = loader.load().await;

        tracing::info!("Using DynamoDB table: {}", table_name);

        Ok(Self::new(Client::new(&sdk_config), table_name))
    }

    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            page_size: None,
        }
    }

    /// Cap each scan page at `limit` records
    #[cfg(test)]
    fn with_page_size(mut self, limit: i32) -> Self {
        self.page_size = Some(limit);
        self
    }
}

/// Collapse an SDK failure into its full message chain
fn request_error<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    StoreError::Request(DisplayErrorContext(err).to_string())
}

#[async_trait]
impl ItemStore for DynamoStore {
    async fn put_record(&self, record: Record) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record))
            .send()
            .await
            .map_err(request_error)?;

        tracing::debug!("Put record into {}", self.table_name);
        Ok(())
    }

    async fn get_record(&self, id: &str) -> Result<Option<Record>, StoreError> {
        let (name, value) = codec::key(id);
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(name, value)
            .send()
            .await
            .map_err(request_error)?;

        tracing::debug!("Read record with id: {} (found: {})", id, output.item.is_some());
        Ok(output.item)
    }

    async fn scan_table(&self) -> Result<Vec<Record>, StoreError> {
        // A single scan response stops at 1 MB; keep following the
        // continuation key until the whole table has been read.
        let mut records = Vec::new();
        let mut start_key: Option<Record> = None;
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_limit(self.page_size)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(request_error)?;

            records.extend(output.items.unwrap_or_default());

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!("Scanned {} records from {}", records.len(), self.table_name);
        Ok(records)
    }

    async fn delete_record(&self, id: &str) -> Result<(), StoreError> {
        let (name, value) = codec::key(id);
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(name, value)
            .send()
            .await
            .map_err(request_error)?;

        tracing::debug!("Deleted record with id: {}", id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(request_error)?;

        tracing::debug!("Health check succeeded for table {}", self.table_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreBackend;
    use crate::models::Item;
    use aws_sdk_dynamodb::config::Credentials;
    use aws_sdk_dynamodb::types::{
        AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
    };

    #[test]
    fn test_store_is_clonable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<DynamoStore>();
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DynamoStore>();
    }

    #[tokio::test]
    async fn test_from_config_requires_table() {
        let config = Config {
            store_backend: StoreBackend::DynamoDb,
            dynamo_table: None,
            aws_endpoint_url: Some("http://localhost:8000".to_string()),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            lambda_runtime: false,
        };

        let result = DynamoStore::from_config(&config).await;
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("DYNAMO_TABLE"));
    }

    // The tests below need DynamoDB Local, e.g.
    // `docker run -p 8000:8000 amazon/dynamodb-local`, then
    // `cargo test -- --ignored` (AWS_ENDPOINT_URL overrides the endpoint).

    async fn local_client() -> Client {
        let endpoint = std::env::var("AWS_ENDPOINT_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(endpoint)
            .region(aws_config::Region::new("us-east-1"))
            .credentials_provider(Credentials::new("local", "local", None, None, "test"))
            .load()
            .await;
        Client::new(&sdk_config)
    }

    /// Create a fresh table keyed on `id` and return a store over it
    async fn setup_local_store() -> DynamoStore {
        let client = local_client().await;
        let table_name = format!("items-test-{}", uuid::Uuid::new_v4());

        client
            .create_table()
            .table_name(&table_name)
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name(codec::ID_ATTRIBUTE)
                    .key_type(KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(codec::ID_ATTRIBUTE)
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .unwrap(),
            )
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .unwrap();

        DynamoStore::new(client, table_name)
    }

    async fn teardown(store: DynamoStore) {
        store
            .client
            .delete_table()
            .table_name(&store.table_name)
            .send()
            .await
            .unwrap();
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local"]
    async fn test_put_and_get_round_trip() {
        let store = setup_local_store().await;

        store.put_record(codec::to_record(&item("1", "a"))).await.unwrap();
        let record = store.get_record("1").await.unwrap().unwrap();
        assert_eq!(codec::from_record(&record).unwrap(), item("1", "a"));

        store.put_record(codec::to_record(&item("1", "b"))).await.unwrap();
        let record = store.get_record("1").await.unwrap().unwrap();
        assert_eq!(codec::from_record(&record).unwrap(), item("1", "b"));

        teardown(store).await;
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local"]
    async fn test_get_absent_key_returns_none() {
        let store = setup_local_store().await;

        assert!(store.get_record("missing").await.unwrap().is_none());

        teardown(store).await;
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local"]
    async fn test_delete_is_idempotent() {
        let store = setup_local_store().await;
        store.put_record(codec::to_record(&item("1", "a"))).await.unwrap();

        store.delete_record("1").await.unwrap();
        store.delete_record("1").await.unwrap();
        store.delete_record("never-existed").await.unwrap();

        assert!(store.get_record("1").await.unwrap().is_none());

        teardown(store).await;
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local"]
    async fn test_scan_spans_multiple_pages() {
        let store = setup_local_store().await.with_page_size(2);
        for i in 0..5 {
            let id = i.to_string();
            store
                .put_record(codec::to_record(&item(&id, "x")))
                .await
                .unwrap();
        }

        let records = store.scan_table().await.unwrap();

        let mut ids: Vec<String> = records
            .iter()
            .map(|record| codec::from_record(record).unwrap().id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);

        teardown(store).await;
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local"]
    async fn test_scan_empty_table() {
        let store = setup_local_store().await;

        assert!(store.scan_table().await.unwrap().is_empty());
        store.health_check().await.unwrap();

        teardown(store).await;
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local"]
    async fn test_empty_key_is_rejected() {
        let store = setup_local_store().await;

        let result = store.put_record(codec::to_record(&item("", "a"))).await;

        assert!(matches!(result, Err(StoreError::Request(_))));

        teardown(store).await;
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local"]
    async fn test_missing_table_fails() {
        let store = DynamoStore::new(local_client().await, "no-such-table");

        assert!(store.health_check().await.is_err());
        assert!(store.scan_table().await.is_err());
    }
}
