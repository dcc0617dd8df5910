//! Reads and writes the inventory document and the display pointer.
//! Both live in their own pretty-printed JSON file and are always rewritten whole.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::models::{DisplayPointer, InventoryDocument};
use crate::error::{BotError, BotResult};

#[derive(Debug, Clone)]
pub struct JsonStore {
    inventory_path: PathBuf,
    display_path: PathBuf,
}

impl JsonStore {
    /// Opens the store, creating either file with its zero document if it is absent.
    pub async fn open(
        inventory_path: impl Into<PathBuf>,
        display_path: impl Into<PathBuf>,
    ) -> BotResult<Self> {
        let store = Self {
            inventory_path: inventory_path.into(),
            display_path: display_path.into(),
        };
        if !exists(&store.inventory_path).await? {
            info!(target: "store", path = %store.inventory_path.display(), "Creating empty inventory document");
            store.save_inventory(&InventoryDocument::default()).await?;
        }
        if !exists(&store.display_path).await? {
            info!(target: "store", path = %store.display_path.display(), "Creating empty display pointer");
            write_json(&store.display_path, &DisplayPointer::default()).await?;
        }
        Ok(store)
    }

    pub fn inventory_path(&self) -> &Path {
        &self.inventory_path
    }

    pub fn display_path(&self) -> &Path {
        &self.display_path
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn load_inventory(&self) -> BotResult<InventoryDocument> {
        read_json(&self.inventory_path).await
    }

    #[instrument(level = "debug", skip(self, doc))]
    pub async fn save_inventory(&self, doc: &InventoryDocument) -> BotResult<()> {
        write_json(&self.inventory_path, doc).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn load_display_pointer(&self) -> BotResult<Option<String>> {
        let pointer: DisplayPointer = read_json(&self.display_path).await?;
        Ok(pointer.id)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn save_display_pointer(&self, id: &str) -> BotResult<()> {
        let pointer = DisplayPointer {
            id: Some(id.to_string()),
        };
        write_json(&self.display_path, &pointer).await
    }
}

async fn exists(path: &Path) -> BotResult<bool> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|e| BotError::io(path, e))
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> BotResult<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| BotError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| BotError::parse(path, e))
}

/// Serializes to a sibling temp file and renames it over `path`, so a reader
/// never sees a half-written document.
async fn write_json<T: Serialize>(path: &Path, value: &T) -> BotResult<()> {
    let body = serde_json::to_string_pretty(value).map_err(|e| BotError::parse(path, e))?;
    let tmp = temp_path(path);
    tokio::fs::write(&tmp, body)
        .await
        .map_err(|e| BotError::io(&tmp, e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| BotError::io(path, e))?;
    debug!(target: "store", path = %path.display(), "Document written");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
