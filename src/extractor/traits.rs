use crate::extractor::models::{QualityOption, VideoInfo};
use anyhow::Result;
use async_trait::async_trait;

/// Core trait for all video extractors
///
/// This trait isolates the application from the specific extraction method
/// (the bundled mock, or a real extraction service).
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g., "mock-tiktok")
    fn id(&self) -> &'static str;

    /// Checks if this extractor can handle the given URL
    fn supports(&self, url: &str) -> bool;

    /// Extracts video information
    async fn extract_info(&self, url: &str) -> Result<VideoInfo>;

    /// Gets available quality options (usually calls extract_info internally)
    async fn get_qualities(&self, url: &str) -> Result<Vec<QualityOption>> {
        let info = self.extract_info(url).await?;
        Ok(info.qualities)
    }
}
