//! Saving and restoring the history list through local storage

use crate::database::LocalStorage;
use crate::history::cache::{HistoryCache, HistoryItem};
use anyhow::Result;
use tracing::{debug, warn};

/// Storage key holding the serialized history array
pub const HISTORY_KEY: &str = "vidtik_history";

/// Restore the persisted history, or an empty cache if nothing was saved.
///
/// Unreadable data is logged and discarded rather than failing startup.
pub async fn restore_history(storage: &LocalStorage, limit: usize) -> Result<HistoryCache> {
    let Some(raw) = storage.get_item(HISTORY_KEY).await? else {
        debug!("No persisted history");
        return Ok(HistoryCache::new(limit));
    };

    match serde_json::from_str::<Vec<HistoryItem>>(&raw) {
        Ok(items) => {
            debug!("Restored {} history entries", items.len());
            Ok(HistoryCache::from_items(items, limit))
        }
        Err(e) => {
            warn!("Discarding unreadable history: {}", e);
            Ok(HistoryCache::new(limit))
        }
    }
}

/// Persist the whole list as a JSON array
pub async fn persist_history(storage: &LocalStorage, cache: &HistoryCache) -> Result<()> {
    persist_items(storage, cache.items()).await
}

pub async fn persist_items(storage: &LocalStorage, items: &[HistoryItem]) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    storage.set_item(HISTORY_KEY, &raw).await
}

/// Drop the persisted entry
pub async fn clear_persisted_history(storage: &LocalStorage) -> Result<()> {
    storage.remove_item(HISTORY_KEY).await
}
