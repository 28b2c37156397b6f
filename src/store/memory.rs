use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tokio::sync::RwLock;

use crate::codec::{ID_ATTRIBUTE, Record};
use crate::store::{ItemStore, StoreError};

/// In-memory item table for local development and testing.
///
/// Records are kept in key order, so scans are deterministic. Key
/// validation follows DynamoDB: the `id` attribute must be a non-empty
/// string. Data is lost when the last handle is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<BTreeMap<String, Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Store a record as-is, bypassing key validation
    #[cfg(test)]
    pub async fn insert_raw(&self, key: &str, record: Record) {
        self.records.write().await.insert(key.to_string(), record);
    }
}

fn validate_key(id: &str) -> Result<(), StoreError> {
    if id.is_empty() {
        return Err(StoreError::Request(format!(
            "ValidationException: the key attribute '{}' cannot contain an empty string value",
            ID_ATTRIBUTE
        )));
    }
    Ok(())
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn put_record(&self, record: Record) -> Result<(), StoreError> {
        let id = match record.get(ID_ATTRIBUTE) {
            Some(AttributeValue::S(id)) => id.clone(),
            _ => {
                return Err(StoreError::Request(format!(
                    "ValidationException: missing string key attribute '{}'",
                    ID_ATTRIBUTE
                )));
            }
        };
        validate_key(&id)?;

        self.records.write().await.insert(id, record);
        Ok(())
    }

    async fn get_record(&self, id: &str) -> Result<Option<Record>, StoreError> {
        validate_key(id)?;
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn scan_table(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn delete_record(&self, id: &str) -> Result<(), StoreError> {
        validate_key(id)?;
        self.records.write().await.remove(id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
