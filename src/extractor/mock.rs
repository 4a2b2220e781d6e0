//! Simulated TikTok extractor
//!
//! No network access happens here: after a fixed delay a [`VideoInfo`] is
//! synthesized from random data and the four standard quality options.

use crate::extractor::models::{QualityOption, VideoInfo};
use crate::extractor::traits::Extractor;
use crate::extractor::validator::is_supported_url;
use crate::utils::VidtikError;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};

const SLUG_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Fixed quality options offered for every resolved video
pub fn standard_qualities() -> Vec<QualityOption> {
    vec![
        QualityOption::video("1080", "1080p (Full HD)", "15.2 MB"),
        QualityOption::video("720", "720p (HD)", "8.4 MB"),
        QualityOption::video("480", "480p (SD)", "4.1 MB"),
        QualityOption::audio("mp3", "MP3 (320kbps)", "1.2 MB"),
    ]
}

pub struct MockTikTokExtractor {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl Default for MockTikTokExtractor {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl MockTikTokExtractor {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic variant for tests
    pub fn with_seed(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn synthesize(&self) -> Result<VideoInfo> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| anyhow!("Mock extractor RNG poisoned: {}", e))?;

        let slug_len = rng.gen_range(5..=6);
        let slug: String = (0..slug_len)
            .map(|_| SLUG_ALPHABET[rng.gen_range(0..SLUG_ALPHABET.len())] as char)
            .collect();

        Ok(VideoInfo {
            title: format!("Conteúdo TikTok Viral #{}", rng.gen_range(0..1000)),
            creator: format!("user_{}", slug),
            duration: "00:30".to_string(),
            thumbnail: format!("https://picsum.photos/seed/{}/400/700", rng.gen::<f64>()),
            qualities: standard_qualities(),
        })
    }
}

#[async_trait]
impl Extractor for MockTikTokExtractor {
    fn id(&self) -> &'static str {
        "mock-tiktok"
    }

    fn supports(&self, url: &str) -> bool {
        is_supported_url(url)
    }

    async fn extract_info(&self, url: &str) -> Result<VideoInfo> {
        if !self.supports(url) {
            return Err(VidtikError::InvalidUrl(url.to_string()).into());
        }

        info!("MockTikTokExtractor invoked for: {}", url);
        tokio::time::sleep(self.delay).await;

        let info = self.synthesize()?;
        debug!("Synthesized '{}' by @{}", info.title, info.creator);
        Ok(info)
    }
}
