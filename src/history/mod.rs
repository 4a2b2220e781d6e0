//! History cache module

pub mod cache;
pub mod persistence;

pub use cache::{HistoryCache, HistoryItem, DEFAULT_HISTORY_LIMIT};
pub use persistence::{
    clear_persisted_history, persist_history, persist_items, restore_history, HISTORY_KEY,
};
