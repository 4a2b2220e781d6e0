//! Timer-driven mock download engine

use crate::downloader::progress::{DownloadProgress, DownloadStatus};
use crate::extractor::QualityOption;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Download configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadConfig {
    /// Percentage points per tick
    pub step: u8,
    /// Time between ticks
    pub interval: Duration,
    /// Pause between reaching 100% and signalling completion
    pub completion_delay: Duration,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            step: 10,
            interval: Duration::from_millis(200),
            completion_delay: Duration::from_millis(500),
        }
    }
}

/// Events emitted while a simulated download runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadEvent {
    Started { quality_id: String },
    Progress(u8),
    Completed { quality_id: String, notice: String },
}

/// Message shown once a simulated download finishes
pub fn completion_notice(quality: &QualityOption) -> String {
    format!(
        "Sucesso! O arquivo {} ({}) foi salvo.",
        quality.container(),
        quality.resolution
    )
}

#[derive(Debug, Clone, Default)]
pub struct MockDownloader {
    config: DownloadConfig,
}

impl MockDownloader {
    pub fn new(config: DownloadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// Run one simulated download to completion.
    ///
    /// Emits `Started`, `Progress(0)`, one `Progress` per tick up to 100 and
    /// exactly one `Completed`. Returns early with `InProgress` if the
    /// receiver goes away.
    pub async fn run(
        &self,
        quality: QualityOption,
        sender: mpsc::Sender<DownloadEvent>,
    ) -> DownloadStatus {
        let mut progress = DownloadProgress::new(self.config.step);
        progress.start();
        info!("Simulating download of {} ({})", quality.id, quality.resolution);

        let started = DownloadEvent::Started {
            quality_id: quality.id.clone(),
        };
        if sender.send(started).await.is_err() || sender.send(DownloadEvent::Progress(0)).await.is_err()
        {
            debug!("Download receiver dropped before start");
            return progress.status;
        }

        let mut ticker = tokio::time::interval(self.config.interval);
        // The first tick of a tokio interval completes immediately
        ticker.tick().await;

        while !progress.is_full() {
            ticker.tick().await;
            let Some(percent) = progress.advance() else {
                break;
            };
            if sender.send(DownloadEvent::Progress(percent)).await.is_err() {
                debug!("Download receiver dropped at {}%", percent);
                return progress.status;
            }
        }

        tokio::time::sleep(self.config.completion_delay).await;
        progress.complete();

        let completed = DownloadEvent::Completed {
            quality_id: quality.id.clone(),
            notice: completion_notice(&quality),
        };
        if sender.send(completed).await.is_err() {
            debug!("Download receiver dropped before completion");
        }

        info!("Simulated download of {} finished", quality.id);
        progress.status
    }

    /// Run the download on the current tokio runtime
    pub fn spawn(&self, quality: QualityOption) -> (DownloadHandle, mpsc::Receiver<DownloadEvent>) {
        self.spawn_on(&tokio::runtime::Handle::current(), quality)
    }

    /// Run the download on a specific runtime
    pub fn spawn_on(
        &self,
        runtime: &tokio::runtime::Handle,
        quality: QualityOption,
    ) -> (DownloadHandle, mpsc::Receiver<DownloadEvent>) {
        // One slot per tick plus Started, Progress(0) and Completed
        let capacity = usize::from(100 / self.config.step.max(1)) + 4;
        let (tx, rx) = mpsc::channel(capacity);
        let quality_id = quality.id.clone();
        let engine = self.clone();
        let task = runtime.spawn(async move { engine.run(quality, tx).await });

        (
            DownloadHandle {
                quality_id,
                task: Some(task),
            },
            rx,
        )
    }
}

/// Owns a running simulated download; dropping it stops the timers
#[derive(Debug)]
pub struct DownloadHandle {
    quality_id: String,
    task: Option<JoinHandle<DownloadStatus>>,
}

impl DownloadHandle {
    pub fn quality_id(&self) -> &str {
        &self.quality_id
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }

    pub fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for the download task; `None` if it was aborted
    pub async fn wait(mut self) -> Option<DownloadStatus> {
        let task = self.task.take()?;
        task.await.ok()
    }
}

impl Drop for DownloadHandle {
    fn drop(&mut self) {
        self.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::standard_qualities;

    fn fast_config() -> DownloadConfig {
        DownloadConfig {
            step: 10,
            interval: Duration::from_millis(1),
            completion_delay: Duration::from_millis(1),
        }
    }

    async fn collect(mut rx: mpsc::Receiver<DownloadEvent>) -> Vec<DownloadEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_completion_notice_names_container() {
        let qualities = standard_qualities();
        assert_eq!(
            completion_notice(&qualities[0]),
            "Sucesso! O arquivo MP4 (1080p (Full HD)) foi salvo."
        );
        assert_eq!(
            completion_notice(&qualities[3]),
            "Sucesso! O arquivo MP3 (MP3 (320kbps)) foi salvo."
        );
    }

    #[tokio::test]
    async fn test_run_emits_fixed_steps_and_one_completion() {
        let engine = MockDownloader::new(fast_config());
        let (tx, rx) = mpsc::channel(32);
        let quality = standard_qualities().remove(1);

        let status = engine.run(quality, tx).await;
        assert_eq!(status, DownloadStatus::Complete);

        let events = collect(rx).await;
        assert_eq!(
            events.first(),
            Some(&DownloadEvent::Started {
                quality_id: "720".to_string()
            })
        );

        let percents: Vec<u8> = events
            .iter()
            .filter_map(|e| match e {
                DownloadEvent::Progress(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(percents, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert!(percents.windows(2).all(|w| w[1] > w[0]));

        let completions = events
            .iter()
            .filter(|e| matches!(e, DownloadEvent::Completed { .. }))
            .count();
        assert_eq!(completions, 1);
        assert!(matches!(events.last(), Some(DownloadEvent::Completed { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_timings() {
        let engine = MockDownloader::default();
        let (tx, rx) = mpsc::channel(32);
        let started = tokio::time::Instant::now();

        engine.run(standard_qualities().remove(0), tx).await;

        // Ten ticks of 200ms plus the 500ms completion pause
        assert!(started.elapsed() >= Duration::from_millis(2500));
        assert_eq!(collect(rx).await.len(), 13);
    }

    #[tokio::test]
    async fn test_dropped_receiver_stops_run() {
        let engine = MockDownloader::new(fast_config());
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let status = engine.run(standard_qualities().remove(2), tx).await;
        assert_eq!(status, DownloadStatus::InProgress);
    }

    #[tokio::test]
    async fn test_spawned_download_completes() {
        let engine = MockDownloader::new(fast_config());
        let (handle, rx) = engine.spawn(standard_qualities().remove(3));
        assert_eq!(handle.quality_id(), "mp3");

        let events = collect(rx).await;
        assert!(matches!(
            events.last(),
            Some(DownloadEvent::Completed { notice, .. }) if notice.contains("MP3")
        ));
        assert_eq!(handle.wait().await, Some(DownloadStatus::Complete));
    }

    #[tokio::test]
    async fn test_dropping_handle_aborts_timers() {
        let engine = MockDownloader::new(DownloadConfig {
            interval: Duration::from_secs(60),
            ..fast_config()
        });
        let (handle, rx) = engine.spawn(standard_qualities().remove(0));
        drop(handle);

        let events = collect(rx).await;
        assert!(!events
            .iter()
            .any(|e| matches!(e, DownloadEvent::Completed { .. })));
    }
}
