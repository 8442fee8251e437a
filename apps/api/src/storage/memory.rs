use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{SlotKey, SlotStore, StorageError};

/// Process-local slot store. Contents vanish on restart.
#[derive(Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<SlotKey, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn get_raw(&self, key: SlotKey) -> Result<Option<String>, StorageError> {
        Ok(self.slots.read().await.get(&key).cloned())
    }

    async fn set_raw(&self, key: SlotKey, value: String) -> Result<(), StorageError> {
        self.slots.write().await.insert(key, value);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unwritten_slot_is_absent() {
        let store = MemorySlotStore::new();
        assert_eq!(store.get_raw(SlotKey::PortfolioData).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_and_slots_are_independent() {
        let store = MemorySlotStore::new();
        store
            .set_raw(SlotKey::PortfolioData, "1".to_string())
            .await
            .unwrap();
        store
            .set_raw(SlotKey::PortfolioData, "2".to_string())
            .await
            .unwrap();
        store
            .set_raw(SlotKey::PortfolioExperiences, "[]".to_string())
            .await
            .unwrap();

        assert_eq!(
            store.get_raw(SlotKey::PortfolioData).await.unwrap(),
            Some("2".to_string())
        );
        assert_eq!(
            store.get_raw(SlotKey::PortfolioExperiences).await.unwrap(),
            Some("[]".to_string())
        );
        assert_eq!(
            store.get_raw(SlotKey::PortfolioBasicInfo).await.unwrap(),
            None
        );
    }
}
