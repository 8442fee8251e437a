//! Slot storage: the persistent key/value cells drafts are mirrored into.
//!
//! Backends are pluggable behind `SlotStore` and carried in `AppState` as
//! `Arc<dyn SlotStore>`, chosen at startup via `STORAGE_BACKEND`.

pub mod file;
pub mod legacy;
pub mod memory;
pub mod redis_store;
pub mod repository;

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, StorageBackend};

pub use file::FileSlotStore;
pub use memory::MemorySlotStore;
pub use repository::SlotRepository;

/// A named storage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKey {
    /// The canonical whole-draft slot.
    PortfolioData,
    /// Basic-info subset written by the step-by-step flow.
    PortfolioBasicInfo,
    /// Experience array written by the step-by-step flow.
    PortfolioExperiences,
}

impl SlotKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotKey::PortfolioData => "portfolioData",
            SlotKey::PortfolioBasicInfo => "portfolioBasicInfo",
            SlotKey::PortfolioExperiences => "portfolioExperiences",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("slot '{key}' is {size} bytes, over the {limit}-byte quota")]
    QuotaExceeded {
        key: SlotKey,
        size: usize,
        limit: usize,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Raw string-valued slot storage. Writes overwrite; there is no merge and
/// no history.
#[async_trait]
pub trait SlotStore: Send + Sync {
    async fn get_raw(&self, key: SlotKey) -> Result<Option<String>, StorageError>;

    async fn set_raw(&self, key: SlotKey, value: String) -> Result<(), StorageError>;

    fn backend_name(&self) -> &'static str;
}

/// Rejects writes larger than `limit` bytes before they reach the inner store.
pub struct QuotaSlotStore {
    inner: Arc<dyn SlotStore>,
    limit: usize,
}

impl QuotaSlotStore {
    pub fn new(inner: Arc<dyn SlotStore>, limit: usize) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl SlotStore for QuotaSlotStore {
    async fn get_raw(&self, key: SlotKey) -> Result<Option<String>, StorageError> {
        self.inner.get_raw(key).await
    }

    async fn set_raw(&self, key: SlotKey, value: String) -> Result<(), StorageError> {
        if value.len() > self.limit {
            return Err(StorageError::QuotaExceeded {
                key,
                size: value.len(),
                limit: self.limit,
            });
        }
        self.inner.set_raw(key, value).await
    }

    fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }
}

/// Builds the configured backend, wrapped in the quota guard when one is set.
pub async fn build_slot_store(config: &Config) -> Result<Arc<dyn SlotStore>> {
    let store: Arc<dyn SlotStore> = match &config.storage_backend {
        StorageBackend::Memory => Arc::new(MemorySlotStore::new()),
        StorageBackend::File { dir } => Arc::new(FileSlotStore::open(dir).await?),
        StorageBackend::Redis { url, key_prefix } => {
            Arc::new(redis_store::RedisSlotStore::connect(url, key_prefix.clone()).await?)
        }
    };
    info!("Slot store initialized (backend: {})", store.backend_name());

    Ok(match config.slot_quota_bytes {
        Some(limit) => {
            info!("Slot quota: {limit} bytes");
            Arc::new(QuotaSlotStore::new(store, limit))
        }
        None => store,
    })
}
