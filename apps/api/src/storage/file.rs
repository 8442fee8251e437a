use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{SlotKey, SlotStore, StorageError};

/// One `<slot>.json` file per slot under a directory.
///
/// Writes land in a temp file in the same directory and are renamed over the
/// target, so a reader never sees a half-written slot.
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        let meta = tokio::fs::metadata(&dir).await?;
        if !meta.is_dir() {
            return Err(StorageError::Unavailable(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        info!("File slot store rooted at {}", dir.display());
        Ok(Self { dir })
    }

    fn slot_path(&self, key: SlotKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

#[async_trait]
impl SlotStore for FileSlotStore {
    async fn get_raw(&self, key: SlotKey) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.slot_path(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_raw(&self, key: SlotKey, value: String) -> Result<(), StorageError> {
        let dir = self.dir.clone();
        let target = self.slot_path(key);

        tokio::task::spawn_blocking(move || -> Result<(), StorageError> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(value.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&target).map_err(|e| e.error)?;
            debug!("Wrote slot file {}", target.display());
            Ok(())
        })
        .await
        .map_err(|e| StorageError::Unavailable(format!("slot write task failed: {e}")))?
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
