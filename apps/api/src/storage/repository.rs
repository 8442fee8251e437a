//! Typed JSON access to slots.
//!
//! Reads fail soft: an absent slot, unparseable JSON, or an unreachable
//! backend all come back as `None` (logged), so callers fall back to
//! defaults instead of failing to render. Writes surface their errors.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use super::{SlotKey, SlotStore, StorageError};

#[derive(Clone)]
pub struct SlotRepository {
    store: Arc<dyn SlotStore>,
}

impl SlotRepository {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    pub async fn load<T: DeserializeOwned>(&self, key: SlotKey) -> Option<T> {
        let raw = match self.store.get_raw(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Slot {key} is empty");
                return None;
            }
            Err(e) => {
                error!("Reading slot {key} failed, treating as empty: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Slot {key} holds malformed JSON, ignoring it: {e}");
                None
            }
        }
    }

    /// Serializes `value` and overwrites whatever `key` held.
    pub async fn save<T: Serialize + ?Sized>(
        &self,
        key: SlotKey,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        let size = raw.len();
        self.store.set_raw(key, raw).await?;
        debug!("Saved slot {key} ({size} bytes)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::PortfolioDraft;
    use crate::storage::MemorySlotStore;

    fn repo() -> (SlotRepository, Arc<dyn SlotStore>) {
        let store: Arc<dyn SlotStore> = Arc::new(MemorySlotStore::new());
        (SlotRepository::new(store.clone()), store)
    }

    struct BrokenStore;

    #[async_trait::async_trait]
    impl SlotStore for BrokenStore {
        async fn get_raw(&self, _key: SlotKey) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("private browsing".to_string()))
        }

        async fn set_raw(&self, _key: SlotKey, _value: String) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("private browsing".to_string()))
        }

        fn backend_name(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let (repo, _) = repo();
        let mut draft = PortfolioDraft::sample();
        draft.skills.push(String::new());
        draft.skills.push("JavaScript".to_string());

        repo.save(SlotKey::PortfolioData, &draft).await.unwrap();
        let loaded: PortfolioDraft = repo.load(SlotKey::PortfolioData).await.unwrap();
        assert_eq!(loaded, draft);
    }

    #[tokio::test]
    async fn test_saving_twice_is_idempotent() {
        let (repo, store) = repo();
        let draft = PortfolioDraft::sample();

        repo.save(SlotKey::PortfolioData, &draft).await.unwrap();
        let first = store.get_raw(SlotKey::PortfolioData).await.unwrap();
        repo.save(SlotKey::PortfolioData, &draft).await.unwrap();
        let second = store.get_raw(SlotKey::PortfolioData).await.unwrap();

        assert_eq!(first, second);
        let loaded: PortfolioDraft = repo.load(SlotKey::PortfolioData).await.unwrap();
        assert_eq!(loaded, draft);
    }

    #[tokio::test]
    async fn test_absent_slot_loads_none() {
        let (repo, _) = repo();
        assert!(repo
            .load::<PortfolioDraft>(SlotKey::PortfolioData)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_loads_none() {
        let (repo, store) = repo();
        store
            .set_raw(SlotKey::PortfolioData, "{not json".to_string())
            .await
            .unwrap();
        assert!(repo
            .load::<PortfolioDraft>(SlotKey::PortfolioData)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_wrong_shape_loads_none() {
        let (repo, store) = repo();
        store
            .set_raw(SlotKey::PortfolioData, r#"{"skills": 7}"#.to_string())
            .await
            .unwrap();
        assert!(repo
            .load::<PortfolioDraft>(SlotKey::PortfolioData)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_unavailable_backend_reads_none_and_write_errors() {
        let repo = SlotRepository::new(Arc::new(BrokenStore));
        assert!(repo
            .load::<PortfolioDraft>(SlotKey::PortfolioData)
            .await
            .is_none());
        let err = repo
            .save(SlotKey::PortfolioData, &PortfolioDraft::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
    }
}
