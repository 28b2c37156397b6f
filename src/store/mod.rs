//! The item table behind a single shared handle.

pub mod dynamo;
pub mod memory;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::codec::Record;
use crate::config::{Config, StoreBackend};

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

/// Any failure reported by the underlying store call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Request(String),
}

/// Primitive operations on the item table
///
/// Implementations are shared across requests and must be safe for
/// concurrent use.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Unconditional put, overwriting any record with the same key
    async fn put_record(&self, record: Record) -> Result<(), StoreError>;

    /// Look up a record by id; an absent record is `Ok(None)`
    async fn get_record(&self, id: &str) -> Result<Option<Record>, StoreError>;

    /// Every record in the table, in the order the store returns them
    async fn scan_table(&self) -> Result<Vec<Record>, StoreError>;

    /// Idempotent delete by id
    async fn delete_record(&self, id: &str) -> Result<(), StoreError>;

    /// Lightweight connectivity probe
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// Build the process-wide store handle for the configured backend
pub async fn from_config(config: &Config) -> Result<Arc<dyn ItemStore>> {
    match config.store_backend {
        StoreBackend::DynamoDb => Ok(Arc::new(DynamoStore::from_config(config).await?)),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
