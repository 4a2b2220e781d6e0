//! Headless state machine behind the GUI and CLI
//!
//! Mirrors the screen state of the downloader: the typed link, whether a
//! lookup is running, the current result, the validation error, the history
//! and the active simulated download.

use crate::downloader::{DownloadEvent, DownloadProgress, DownloadStatus};
use crate::extractor::{validate_url, QualityOption, VideoInfo};
use crate::history::{HistoryCache, HistoryItem};
use crate::utils::VidtikError;
use tracing::{debug, info};

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Search,
    Result,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    url: String,
    is_processing: bool,
    result: Option<VideoInfo>,
    error: Option<String>,
    history: HistoryCache,
    active_download: Option<QualityOption>,
    progress: DownloadProgress,
}

impl Session {
    pub fn new(history: HistoryCache, progress_step: u8) -> Self {
        Self {
            history,
            progress: DownloadProgress::new(progress_step),
            ..Default::default()
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: String) {
        self.url = url;
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn result(&self) -> Option<&VideoInfo> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &HistoryCache {
        &self.history
    }

    pub fn active_download(&self) -> Option<&QualityOption> {
        self.active_download.as_ref()
    }

    pub fn progress(&self) -> &DownloadProgress {
        &self.progress
    }

    pub fn is_downloading(&self) -> bool {
        self.active_download.is_some()
    }

    pub fn screen(&self) -> Screen {
        if self.result.is_some() {
            Screen::Result
        } else {
            Screen::Search
        }
    }

    /// Validate `input` and enter the processing state.
    ///
    /// On a validation failure only the error message changes.
    pub fn submit(&mut self, input: &str) -> Result<String, VidtikError> {
        if self.is_processing {
            return Err(VidtikError::InvalidState(
                "a lookup is already in progress".to_string(),
            ));
        }

        match validate_url(input) {
            Ok(url) => {
                self.error = None;
                self.is_processing = true;
                debug!("Submitted {}", url);
                Ok(url)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Store a resolved result and prepend it to the history
    pub fn complete_resolution(&mut self, url: &str, info: VideoInfo) -> HistoryItem {
        self.is_processing = false;
        self.result = Some(info.clone());
        let item = self.history.record(url, info);
        info!("Resolved {} -> '{}'", url, item.data.title);
        item
    }

    /// Leave the processing state with an error message
    pub fn fail_resolution(&mut self, message: String) {
        self.is_processing = false;
        self.error = Some(message);
    }

    /// Start downloading the quality option `id` of the current result
    pub fn select_quality(&mut self, id: &str) -> Result<QualityOption, VidtikError> {
        if self.active_download.is_some() {
            return Err(VidtikError::InvalidState(
                "a download is already running".to_string(),
            ));
        }

        let result = self
            .result
            .as_ref()
            .ok_or_else(|| VidtikError::InvalidState("no video selected".to_string()))?;
        let quality = result
            .quality(id)
            .cloned()
            .ok_or_else(|| VidtikError::QualityNotFound(id.to_string()))?;

        self.progress.start();
        self.active_download = Some(quality.clone());
        Ok(quality)
    }

    /// Fold a downloader event into the session.
    ///
    /// Returns the completion notice once the download finishes; the
    /// downloader is idle again afterwards.
    pub fn apply_download_event(&mut self, event: &DownloadEvent) -> Option<String> {
        if self.active_download.is_none() {
            return None;
        }

        match event {
            DownloadEvent::Started { .. } => None,
            DownloadEvent::Progress(percent) => {
                self.progress.set(*percent);
                None
            }
            DownloadEvent::Completed { notice, .. } => {
                self.progress.complete();
                self.active_download = None;
                self.progress.reset();
                Some(notice.clone())
            }
        }
    }

    pub fn download_status(&self) -> DownloadStatus {
        self.progress.status
    }

    /// Back to the search screen
    pub fn reset(&mut self) {
        self.result = None;
        self.url.clear();
        self.error = None;
        self.active_download = None;
        self.progress.reset();
    }

    /// Show a past result again
    pub fn open_history_item(&mut self, id: &str) -> Result<(), VidtikError> {
        let item = self
            .history
            .get(id)
            .cloned()
            .ok_or_else(|| VidtikError::HistoryItemNotFound(id.to_string()))?;

        self.result = Some(item.data);
        self.url = item.url;
        Ok(())
    }

    /// Empty the in-memory history; callers clear the persisted copy
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
