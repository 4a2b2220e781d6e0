//! Application configuration

use crate::database::LocalStorage;
use crate::downloader::DownloadConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Storage key holding optional settings overrides
pub const SETTINGS_KEY: &str = "vidtik_settings";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Simulated extraction latency (milliseconds)
    pub resolve_delay_ms: u64,

    /// Percentage points added on every progress tick
    pub progress_step: u8,

    /// Interval between progress ticks (milliseconds)
    pub progress_interval_ms: u64,

    /// Pause between reaching 100% and the completion notice (milliseconds)
    pub completion_delay_ms: u64,

    /// Maximum number of history entries kept
    pub history_limit: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            resolve_delay_ms: 1500,
            progress_step: 10,
            progress_interval_ms: 200,
            completion_delay_ms: 500,
            history_limit: 10,
        }
    }
}

impl AppSettings {
    /// Clamp values into ranges the mock pipeline can work with
    pub fn validated(mut self) -> Self {
        if self.progress_step == 0 {
            self.progress_step = 1;
        }
        if self.progress_step > 100 {
            self.progress_step = 100;
        }
        if self.history_limit == 0 {
            self.history_limit = 1;
        }
        self
    }

    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }

    /// Download timings derived from these settings
    pub fn download_config(&self) -> DownloadConfig {
        DownloadConfig {
            step: self.progress_step,
            interval: Duration::from_millis(self.progress_interval_ms),
            completion_delay: Duration::from_millis(self.completion_delay_ms),
        }
    }

    /// Load settings overrides from local storage, falling back to defaults
    pub async fn load(storage: &LocalStorage) -> Result<Self> {
        let Some(raw) = storage.get_item(SETTINGS_KEY).await? else {
            debug!("No stored settings, using defaults");
            return Ok(Self::default());
        };

        match serde_json::from_str::<AppSettings>(&raw) {
            Ok(settings) => Ok(settings.validated()),
            Err(e) => {
                warn!("Ignoring unreadable settings: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Save settings to local storage
    pub async fn save(&self, storage: &LocalStorage) -> Result<()> {
        let raw = serde_json::to_string(self)?;
        storage.set_item(SETTINGS_KEY, &raw).await?;
        Ok(())
    }
}
