//! Bounded, newest-first history of resolved links

use crate::extractor::VideoInfo;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Number of entries kept by default
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// One past lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Creation time in milliseconds, as a decimal string
    pub id: String,
    pub url: String,
    /// Creation time in milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Snapshot of the resolved metadata
    pub data: VideoInfo,
}

impl HistoryItem {
    pub fn new(url: String, data: VideoInfo, created_at: DateTime<Utc>) -> Self {
        let timestamp = created_at.timestamp_millis();
        Self {
            id: timestamp.to_string(),
            url,
            timestamp,
            data,
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }
}

#[derive(Debug, Clone)]
pub struct HistoryCache {
    items: Vec<HistoryItem>,
    limit: usize,
}

impl Default for HistoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryCache {
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Build a cache from restored entries, keeping the newest `limit`
    pub fn from_items(mut items: Vec<HistoryItem>, limit: usize) -> Self {
        let limit = limit.max(1);
        items.truncate(limit);
        Self { items, limit }
    }

    /// Prepend a new lookup and evict the oldest entries beyond the limit
    pub fn record(&mut self, url: &str, data: VideoInfo) -> HistoryItem {
        self.push(HistoryItem::new(url.to_string(), data, Utc::now()))
    }

    pub fn push(&mut self, item: HistoryItem) -> HistoryItem {
        self.items.insert(0, item.clone());
        self.items.truncate(self.limit);
        item
    }

    pub fn get(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
