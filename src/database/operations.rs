//! Key-value operations over the local storage table

use anyhow::Result;
use chrono::Utc;
use sqlx::{Pool, Row, Sqlite};
use std::path::Path;
use tracing::debug;

use super::schema::{initialize_database, initialize_in_memory_database};

/// Persistent string key-value store, the desktop stand-in for browser `localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorage {
    pool: Pool<Sqlite>,
}

impl LocalStorage {
    /// Wrap an already initialized pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file at `path`
    pub async fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(initialize_database(path).await?))
    }

    /// Open a store that lives only as long as this process
    pub async fn open_in_memory() -> Result<Self> {
        Ok(Self::new(initialize_in_memory_database().await?))
    }

    /// Get the value stored under `key`
    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM local_storage WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    /// Store `value` under `key`, replacing any previous value
    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO local_storage (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(key)
            .bind(value)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        debug!("Stored {} ({} bytes)", key, value.len());
        Ok(())
    }

    /// Remove `key`; removing a missing key is not an error
    pub async fn remove_item(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!("Removed {}", key);
        Ok(())
    }

    /// List all stored keys
    pub async fn keys(&self) -> Result<Vec<String>> {
        let rows = sqlx::query("SELECT key FROM local_storage ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.get("key")).collect())
    }

    /// Close the underlying pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
