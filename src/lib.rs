//! VidTik library

pub mod app;
pub mod database;
pub mod downloader;
pub mod extractor;
pub mod gui;
pub mod history;
pub mod session;
pub mod utils;

// Re-export main types for easier use
pub use database::LocalStorage;
pub use downloader::{DownloadConfig, DownloadEvent, DownloadProgress, DownloadStatus, MockDownloader};
pub use extractor::{Extractor, MockTikTokExtractor, QualityOption, VideoInfo};
pub use gui::{AppFlags, Message, VidtikApp};
pub use history::{HistoryCache, HistoryItem};
pub use session::{Screen, Session};
pub use utils::{AppSettings, VidtikError};
