//! Integration-style tests covering the lookup, download and history flows against in-memory storage.

use std::time::Duration;
use vidtik::app;
use vidtik::database::LocalStorage;
use vidtik::downloader::{DownloadConfig, DownloadEvent, DownloadStatus, MockDownloader};
use vidtik::extractor::{Extractor, MockTikTokExtractor};
use vidtik::history::{clear_persisted_history, persist_history, restore_history, HISTORY_KEY};
use vidtik::session::{Screen, Session};
use vidtik::utils::{AppSettings, INVALID_URL_MESSAGE};

fn fast_settings() -> AppSettings {
    AppSettings {
        resolve_delay_ms: 0,
        progress_step: 25,
        progress_interval_ms: 1,
        completion_delay_ms: 1,
        history_limit: 10,
    }
}

async fn resolve(session: &mut Session, extractor: &MockTikTokExtractor, input: &str) -> String {
    let url = session.submit(input).expect("valid link");
    let info = extractor.extract_info(&url).await.expect("mock lookup");
    session.complete_resolution(&url, info);
    url
}

#[tokio::test]
async fn lookup_download_and_reset_flow() {
    let storage = LocalStorage::open_in_memory().await.expect("storage");
    let settings = fast_settings();
    let extractor = MockTikTokExtractor::with_seed(Duration::ZERO, 7);
    let downloader = MockDownloader::new(settings.download_config());

    let mut session = Session::new(
        restore_history(&storage, settings.history_limit).await.unwrap(),
        settings.progress_step,
    );
    assert_eq!(session.screen(), Screen::Search);

    let url = resolve(&mut session, &extractor, "  https://www.tiktok.com/@user/video/1  ").await;
    assert_eq!(url, "https://www.tiktok.com/@user/video/1");
    assert_eq!(session.screen(), Screen::Result);
    assert!(!session.is_processing());
    assert_eq!(session.history().len(), 1);

    persist_history(&storage, session.history()).await.unwrap();

    let quality = session.select_quality("mp3").expect("mp3 option");
    assert_eq!(session.download_status(), DownloadStatus::InProgress);

    let (handle, mut events) = downloader.spawn(quality);
    let mut seen = Vec::new();
    let mut notice = None;
    while let Some(event) = events.recv().await {
        if let DownloadEvent::Progress(p) = event {
            seen.push(p);
        }
        if let Some(n) = session.apply_download_event(&event) {
            notice = Some(n);
        }
    }

    assert_eq!(seen, vec![0, 25, 50, 75, 100]);
    assert_eq!(
        notice.as_deref(),
        Some("Sucesso! O arquivo MP3 (MP3 (320kbps)) foi salvo.")
    );
    assert_eq!(handle.wait().await, Some(DownloadStatus::Complete));
    assert_eq!(session.download_status(), DownloadStatus::Idle);
    assert!(session.active_download().is_none());

    session.reset();
    assert_eq!(session.screen(), Screen::Search);
    assert!(session.url().is_empty());
    assert_eq!(session.history().len(), 1);

    let restored = restore_history(&storage, settings.history_limit).await.unwrap();
    assert_eq!(restored.items(), session.history().items());
}

#[tokio::test]
async fn invalid_link_never_reaches_history() {
    let storage = LocalStorage::open_in_memory().await.unwrap();
    let mut session = Session::new(restore_history(&storage, 10).await.unwrap(), 10);

    for input in ["", "   ", "https://youtube.com/watch?v=1", "tiktok"] {
        let err = session.submit(input).unwrap_err();
        assert_eq!(err.to_string(), INVALID_URL_MESSAGE);
        assert_eq!(session.error(), Some(INVALID_URL_MESSAGE));
        assert!(!session.is_processing());
    }

    assert!(session.history().is_empty());
    assert!(storage.get_item(HISTORY_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn history_keeps_ten_newest_entries() {
    let storage = LocalStorage::open_in_memory().await.unwrap();
    let extractor = MockTikTokExtractor::with_seed(Duration::ZERO, 1);
    let mut session = Session::new(restore_history(&storage, 10).await.unwrap(), 10);

    for n in 0..12 {
        let input = format!("https://vm.tiktok.com/clip{}", n);
        resolve(&mut session, &extractor, &input).await;
        session.reset();
    }
    persist_history(&storage, session.history()).await.unwrap();

    let restored = restore_history(&storage, 10).await.unwrap();
    assert_eq!(restored.len(), 10);
    assert_eq!(restored.items()[0].url, "https://vm.tiktok.com/clip11");
    assert_eq!(restored.items()[9].url, "https://vm.tiktok.com/clip2");
}

#[tokio::test]
async fn reopening_history_item_shows_snapshot() {
    let extractor = MockTikTokExtractor::with_seed(Duration::ZERO, 3);
    let mut session = Session::default();

    resolve(&mut session, &extractor, "https://www.tiktok.com/@a/video/9").await;
    let item = session.history().items()[0].clone();
    session.reset();

    session.open_history_item(&item.id).unwrap();
    assert_eq!(session.result(), Some(&item.data));
    assert_eq!(session.url(), item.url);
    assert_eq!(session.screen(), Screen::Result);
}

#[tokio::test]
async fn clearing_history_removes_persisted_copy() {
    let storage = LocalStorage::open_in_memory().await.unwrap();
    let extractor = MockTikTokExtractor::with_seed(Duration::ZERO, 5);
    let mut session = Session::default();

    resolve(&mut session, &extractor, "https://tiktok.com/@b/video/2").await;
    persist_history(&storage, session.history()).await.unwrap();
    assert!(storage.get_item(HISTORY_KEY).await.unwrap().is_some());

    session.clear_history();
    clear_persisted_history(&storage).await.unwrap();

    assert!(session.history().is_empty());
    assert!(restore_history(&storage, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn headless_lookup_records_history() {
    let storage = LocalStorage::open_in_memory().await.unwrap();
    let settings = fast_settings();

    app::run_lookup(&storage, &settings, "https://vm.tiktok.com/ZMabc/", Some("720"))
        .await
        .expect("lookup and download");

    let history = restore_history(&storage, settings.history_limit).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history.items()[0].url, "https://vm.tiktok.com/ZMabc/");

    let err = app::run_lookup(&storage, &settings, "https://example.com", None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), INVALID_URL_MESSAGE);

    let err = app::run_lookup(&storage, &settings, "https://tiktok.com/x", Some("4k"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("4k"));
}

#[tokio::test]
async fn dropping_handle_stops_progress() {
    let downloader = MockDownloader::new(DownloadConfig {
        step: 10,
        interval: Duration::from_millis(50),
        completion_delay: Duration::from_millis(50),
    });
    let quality = vidtik::extractor::standard_qualities().remove(0);

    let (handle, mut events) = downloader.spawn(quality);
    assert!(matches!(events.recv().await, Some(DownloadEvent::Started { .. })));
    drop(handle);

    let mut completed = false;
    while let Some(event) = events.recv().await {
        if matches!(event, DownloadEvent::Completed { .. }) {
            completed = true;
        }
    }
    assert!(!completed);
}
