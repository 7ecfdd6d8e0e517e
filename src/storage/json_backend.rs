//! JSON snapshot persistence for [`MemoryStore`].

use std::fs;
use std::path::Path;

use crate::errors::Result;
use crate::storage::{MemoryStore, StoreSnapshot};

/// Writes the store's current snapshot to `path` as pretty-printed JSON.
pub fn save_store_to_path(store: &MemoryStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&store.snapshot())?;
    fs::write(path, json)?;
    Ok(())
}

/// Loads a store from a JSON snapshot at `path`.
pub fn load_store_from_path(path: &Path) -> Result<MemoryStore> {
    let data = fs::read_to_string(path)?;
    let snapshot: StoreSnapshot = serde_json::from_str(&data)?;
    Ok(MemoryStore::from_snapshot(snapshot))
}
