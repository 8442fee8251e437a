use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::info;

use super::{SlotKey, SlotStore, StorageError};

/// Slots kept as plain Redis string keys, `<prefix><slot>`.
pub struct RedisSlotStore {
    conn: MultiplexedConnection,
    key_prefix: String,
}

impl RedisSlotStore {
    pub async fn connect(url: &str, key_prefix: String) -> Result<Self, StorageError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Redis slot store connected (prefix: '{key_prefix}')");
        Ok(Self { conn, key_prefix })
    }

    fn redis_key(&self, key: SlotKey) -> String {
        namespaced(&self.key_prefix, key)
    }
}

fn namespaced(prefix: &str, key: SlotKey) -> String {
    format!("{prefix}{}", key.as_str())
}

#[async_trait]
impl SlotStore for RedisSlotStore {
    async fn get_raw(&self, key: SlotKey) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(self.redis_key(key)).await?;
        Ok(value)
    }

    async fn set_raw(&self, key: SlotKey, value: String) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.redis_key(key), value).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
