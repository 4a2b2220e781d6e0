//! Download engine module

pub mod engine;
pub mod progress;

// Re-export for convenience
pub use engine::{completion_notice, DownloadConfig, DownloadEvent, DownloadHandle, MockDownloader};
pub use progress::{DownloadProgress, DownloadStatus, PROGRESS_MAX};
